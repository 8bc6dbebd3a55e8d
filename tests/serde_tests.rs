#![cfg(feature = "serde")]

//! Integration tests for serde support in orderly.
//!
//! Both collections serialize as plain sequences, so they interoperate with
//! `Vec` and with each other.

use orderly::prelude::*;
use rstest::rstest;

// =============================================================================
// BitSet Integration Tests
// =============================================================================

#[cfg(feature = "bitset")]
#[rstest]
fn test_bitset_json_roundtrip() {
    let set: BitSet = [0, 63, 64, 1000].into();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[0,63,64,1000]");

    let restored: BitSet = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[cfg(feature = "bitset")]
#[rstest]
fn test_bitset_rejects_negative_members() {
    let result: Result<BitSet, _> = serde_json::from_str("[1,-2]");
    assert!(result.is_err());
}

// =============================================================================
// OrderedSet Integration Tests
// =============================================================================

#[cfg(feature = "uniqued")]
#[rstest]
fn test_ordered_set_json_roundtrip_keeps_order() {
    let set: OrderedSet<String> = ["pear", "apple", "fig"].map(String::from).into();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["pear","apple","fig"]"#);

    let restored: OrderedSet<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[cfg(feature = "uniqued")]
#[rstest]
fn test_ordered_set_deserialization_drops_duplicates() {
    let set: OrderedSet<i32> = serde_json::from_str("[3,1,3,2,1]").unwrap();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[cfg(feature = "uniqued")]
#[rstest]
fn test_nested_ordered_sets() {
    let forward: OrderedSet<i32> = [1, 2].into();
    let backward: OrderedSet<i32> = [2, 1].into();
    let outer: OrderedSet<OrderedSet<i32>> = [forward.clone(), backward, forward].into();
    assert_eq!(outer.len(), 2);

    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[1,2],[2,1]]");
    let restored: OrderedSet<OrderedSet<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(outer, restored);
}

#[cfg(all(feature = "bitset", feature = "uniqued"))]
#[rstest]
fn test_formats_are_interchangeable() {
    let bits: BitSet = [5, 1, 9].into();
    let json = serde_json::to_string(&bits).unwrap();
    let ordered: OrderedSet<usize> = serde_json::from_str(&json).unwrap();
    assert_eq!(ordered.iter().copied().collect::<Vec<_>>(), vec![1, 5, 9]);
}
