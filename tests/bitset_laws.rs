#![cfg(feature = "bitset")]
//! Property-based tests for BitSet laws.
//!
//! These tests verify that BitSet agrees with a `BTreeSet` model and
//! satisfies the algebraic laws of set intersection, union and difference.

use std::collections::BTreeSet;

use orderly::bitset::BitSet;
use proptest::prelude::*;

fn members() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..400, 0..60)
}

fn model(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

fn as_model(set: &BitSet) -> BTreeSet<usize> {
    set.iter().collect()
}

// =============================================================================
// Intersection Commutativity Law
// Description: A ∩ B = B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_commutative_law(first in members(), second in members()) {
        let first: BitSet = first.into_iter().collect();
        let second: BitSet = second.into_iter().collect();

        prop_assert_eq!(first.intersection(&second), second.intersection(&first));
    }
}

// =============================================================================
// Intersection Idempotence Law
// Description: A ∩ A = A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_idempotent_law(values in members()) {
        let set: BitSet = values.into_iter().collect();

        prop_assert_eq!(set.intersection(&set), set);
    }
}

// =============================================================================
// Intersection Annihilation Law
// Description: A ∩ ∅ = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_with_empty_law(values in members()) {
        let set: BitSet = values.into_iter().collect();

        prop_assert!(set.intersection(&BitSet::new()).is_empty());
        prop_assert!(BitSet::new().intersection(&set).is_empty());
    }
}

// =============================================================================
// Full Range Identity Law
// Description: A ∩ [0, max + 1) = A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_with_covering_range_law(values in members()) {
        let set: BitSet = values.into_iter().collect();
        let end = set.last().map_or(0, |last| last + 1);
        let bound = isize::try_from(end).unwrap();

        prop_assert_eq!(set.intersection(&BitSet::from(0..end)), set.clone());
        prop_assert_eq!(set.intersection_range(-3..bound), set);
    }
}

// =============================================================================
// Range Intersection Model
// Description: Intersecting with a range keeps exactly the members inside it
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_range_matches_model(
        values in members(),
        start in -70isize..420,
        end in -70isize..420
    ) {
        let set: BitSet = values.iter().copied().collect();
        let expected: BTreeSet<usize> = model(&values)
            .into_iter()
            .filter(|member| {
                let member = isize::try_from(*member).unwrap();
                start <= member && member < end
            })
            .collect();

        prop_assert_eq!(as_model(&set.intersection_range(start..end)), expected.clone());
        prop_assert_eq!(
            set.intersection_range(start..end),
            set.intersection(&BitSet::from_valid_members(start.max(0)..end.max(0)))
        );
    }
}

// =============================================================================
// Binary Operations Model
// Description: Every binary operation agrees with BTreeSet
// =============================================================================

proptest! {
    #[test]
    fn prop_binary_operations_match_model(first in members(), second in members()) {
        let left: BitSet = first.iter().copied().collect();
        let right: BitSet = second.iter().copied().collect();
        let left_model = model(&first);
        let right_model = model(&second);

        prop_assert_eq!(
            as_model(&left.union(&right)),
            left_model.union(&right_model).copied().collect::<BTreeSet<_>>()
        );
        prop_assert_eq!(
            as_model(&left.intersection(&right)),
            left_model.intersection(&right_model).copied().collect::<BTreeSet<_>>()
        );
        prop_assert_eq!(
            as_model(&left.symmetric_difference(&right)),
            left_model.symmetric_difference(&right_model).copied().collect::<BTreeSet<_>>()
        );
        prop_assert_eq!(
            as_model(&left.difference(&right)),
            left_model.difference(&right_model).copied().collect::<BTreeSet<_>>()
        );
        prop_assert_eq!(left.is_subset(&right), left_model.is_subset(&right_model));
        prop_assert_eq!(left.is_disjoint(&right), left_model.is_disjoint(&right_model));
        prop_assert_eq!(left.len(), left_model.len());
    }
}

// =============================================================================
// Trimmed Storage Law
// Description: Equal sets have equal words, whatever the construction path
// =============================================================================

proptest! {
    #[test]
    fn prop_equal_sets_have_equal_words(values in members(), extra in 0usize..1000) {
        let direct: BitSet = values.iter().copied().collect();
        let mut roundabout = direct.clone();
        roundabout.insert(extra);
        if !direct.contains(extra) {
            roundabout.remove(extra);
        }

        prop_assert_eq!(direct.as_words(), roundabout.as_words());
        prop_assert!(direct.as_words().last().is_none_or(|word| *word != 0));
    }
}

// =============================================================================
// Complement Law
// Description: A and its complement partition the range
// =============================================================================

proptest! {
    #[test]
    fn prop_complement_partitions_range(values in members(), end in 0usize..500) {
        let set: BitSet = values.into_iter().collect();
        let complement = set.complement(0..end);
        let inside = set.intersection(&BitSet::from(0..end));

        prop_assert!(complement.is_disjoint(&set));
        prop_assert_eq!(complement.union(&inside), BitSet::from(0..end));
    }
}
