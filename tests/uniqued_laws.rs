#![cfg(feature = "uniqued")]
//! Property-based tests for OrderedSet laws.
//!
//! A plain `Vec` without duplicates serves as the model: after any sequence
//! of operations the collection must iterate exactly like the model and find
//! every element at its model position.

use orderly::hash::{Scale, sample_layouts};
use std::hash::{Hash, Hasher};
use orderly::uniqued::OrderedSet;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Operation {
    Insert(u16),
    InsertAt(usize, u16),
    Remove(u16),
    RemoveAt(usize),
    Pop,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<u16>().prop_map(|value| Operation::Insert(value % 200)),
        1 => (any::<usize>(), any::<u16>())
            .prop_map(|(index, value)| Operation::InsertAt(index, value % 200)),
        3 => any::<u16>().prop_map(|value| Operation::Remove(value % 200)),
        1 => any::<usize>().prop_map(Operation::RemoveAt),
        1 => Just(Operation::Pop),
    ]
}

fn apply(set: &mut OrderedSet<u16>, model: &mut Vec<u16>, operation: &Operation) {
    match *operation {
        Operation::Insert(value) => {
            let inserted = set.insert(value);
            assert_agrees(inserted, !model.contains(&value));
            if inserted {
                model.push(value);
            }
        }
        Operation::InsertAt(index, value) => {
            let index = index % (model.len() + 1);
            let inserted = set.insert_at(index, value);
            assert_agrees(inserted, !model.contains(&value));
            if inserted {
                model.insert(index, value);
            }
        }
        Operation::Remove(value) => {
            let removed = set.remove(&value);
            let position = model.iter().position(|element| *element == value);
            assert_agrees(removed.is_some(), position.is_some());
            if let Some(position) = position {
                model.remove(position);
            }
        }
        Operation::RemoveAt(index) => {
            if !model.is_empty() {
                let index = index % model.len();
                assert_eq!(set.remove_at(index), model.remove(index));
            }
        }
        Operation::Pop => assert_eq!(set.pop(), model.pop()),
    }
}

fn assert_agrees(actual: bool, expected: bool) {
    assert_eq!(actual, expected, "collection and model disagree");
}

// =============================================================================
// Order Preservation Law
// Description: Iteration order always equals the model's order
// =============================================================================

proptest! {
    #[test]
    fn prop_order_preservation_law(operations in prop::collection::vec(operation(), 0..300)) {
        let mut set: OrderedSet<u16> = OrderedSet::new();
        let mut model: Vec<u16> = Vec::new();

        for operation in &operations {
            apply(&mut set, &mut model, operation);
            prop_assert_eq!(set.len(), model.len());
        }

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), model.clone());
        for (position, value) in model.iter().enumerate() {
            prop_assert_eq!(set.index_of(value), Some(position));
        }
        prop_assert!(set.scale() >= Scale::smallest_for(model.len()));
    }
}

// =============================================================================
// Round Trip Law
// Description: Inserting then removing a new element restores the collection
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_remove_round_trip_law(
        values in prop::collection::vec(any::<u16>(), 0..80),
        extra: u16
    ) {
        let set: OrderedSet<u16> = values.into_iter().collect();
        prop_assume!(!set.contains(&extra));

        let mut modified = set.clone();
        prop_assert!(modified.insert(extra));
        prop_assert_eq!(modified.remove(&extra), Some(extra));

        prop_assert_eq!(modified, set);
    }
}

// =============================================================================
// Membership Law
// Description: Exactly the ingested values are members
// =============================================================================

proptest! {
    #[test]
    fn prop_membership_law(
        values in prop::collection::vec(0u32..1000, 0..120),
        probes in prop::collection::vec(0u32..1000, 0..40)
    ) {
        let set: OrderedSet<u32> = values.iter().copied().collect();

        for probe in probes.iter().chain(values.iter()) {
            prop_assert_eq!(set.contains(probe), values.contains(probe));
        }
    }
}

// =============================================================================
// Intersection Order Law
// Description: A ∩ B keeps A's order and contains exactly the shared values
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_order_law(
        first in prop::collection::vec(0u8..50, 0..40),
        second in prop::collection::vec(0u8..50, 0..40)
    ) {
        let left: OrderedSet<u8> = first.iter().copied().collect();
        let right: OrderedSet<u8> = second.iter().copied().collect();

        let expected: Vec<u8> = left
            .iter()
            .copied()
            .filter(|value| right.contains(value))
            .collect();
        let actual: Vec<u8> = left.intersection(&right).iter().copied().collect();

        prop_assert_eq!(actual, expected);
        prop_assert!(left.intersection(&right).is_subset(&right.intersection(&left)));
        prop_assert!(right.intersection(&left).is_subset(&left.intersection(&right)));
    }
}

// =============================================================================
// Explicit Layout Law
// Description: Any insertion order under any sampled scale and bias finds
// every member at its position and rejects colliding outsiders
// =============================================================================

/// A key whose hash only covers `group`, so keys sharing a group collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Colliding {
    group: usize,
    id: usize,
}

impl Hash for Colliding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
    }
}

fn colliding(id: usize) -> Colliding {
    Colliding { group: id / 4, id }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn prop_explicit_layout_permutation_law(
        sort_keys in prop::collection::vec(any::<u32>(), 64)
    ) {
        let scales = [Scale::MINIMUM, Scale::new(6), Scale::new(7)];
        for sample in sample_layouts(scales) {
            let mut order: Vec<usize> = (0..sample.count).collect();
            order.sort_by_key(|id| (sort_keys[id % sort_keys.len()], *id));
            let base: Vec<Colliding> = order.iter().copied().map(colliding).collect();

            let set: OrderedSet<Colliding> =
                OrderedSet::with_layout(sample.scale, sample.bias, base.clone());
            prop_assert_eq!(set.scale(), sample.scale);
            prop_assert_eq!(set.bias(), sample.bias);

            for (position, key) in base.iter().enumerate() {
                prop_assert_eq!(set.index_of(key), Some(position), "{}", sample);
            }
            // Same groups as the first members, ids nobody holds.
            for id in 0..sample.count.min(8) {
                let outsider = Colliding { group: id / 4, id: sample.count + id };
                prop_assert!(!set.contains(&outsider), "{}", sample);
            }
        }
    }
}
