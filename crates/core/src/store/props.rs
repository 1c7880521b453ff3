//! Property tests for the record store.

use proptest::prelude::*;

use super::test_support::Note;
use super::{InsertOrder, Record, RecordStore};

fn insert_order_strategy() -> impl Strategy<Value = InsertOrder> {
    prop_oneof![Just(InsertOrder::Append), Just(InsertOrder::Prepend)]
}

/// An operation against the store: `true` inserts a fresh record, `false`
/// deletes the record at `pick % (len + 1)` (occasionally a missing index,
/// which must be a no-op).
fn ops_strategy() -> impl Strategy<Value = Vec<(bool, u32)>> {
    prop::collection::vec((any::<bool>(), 0u32..64), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After any interleaving of inserts and deletes, the display numbers
    /// over the full sequence are the contiguous run `1..=len`.
    #[test]
    fn prop_display_numbers_stay_contiguous(
        order in insert_order_strategy(),
        ops in ops_strategy(),
    ) {
        let mut store: RecordStore<Note> = RecordStore::new(order);
        let mut next_id = 0u32;

        for (is_insert, pick) in ops {
            if is_insert {
                store.insert(Note::new(next_id, "row"));
                next_id += 1;
            } else {
                let len = u32::try_from(store.len()).unwrap();
                let target = store
                    .all()
                    .get((pick % (len + 1)) as usize)
                    .map(Record::id)
                    .unwrap_or(u32::MAX);
                store.delete(target);
            }

            let expected: Vec<u32> = (1..=u32::try_from(store.len()).unwrap()).collect();
            let actual: Vec<u32> = store.all().iter().map(Record::display_no).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Appending never reorders previously inserted records.
    #[test]
    fn prop_append_preserves_relative_order(count in 1usize..30) {
        let mut store: RecordStore<Note> = RecordStore::new(InsertOrder::Append);
        for id in 0..count {
            store.insert(Note::new(u32::try_from(id).unwrap(), "row"));
        }

        let ids: Vec<u32> = store.all().iter().map(Record::id).collect();
        let expected: Vec<u32> = (0..u32::try_from(count).unwrap()).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Deleting a missing id changes nothing, however many rows exist.
    #[test]
    fn prop_delete_missing_is_no_op(count in 0usize..20) {
        let mut store: RecordStore<Note> = RecordStore::new(InsertOrder::Append);
        for id in 0..count {
            store.insert(Note::new(u32::try_from(id).unwrap(), "row"));
        }

        let before: Vec<u32> = store.all().iter().map(Record::id).collect();
        prop_assert!(!store.delete(u32::MAX));
        let after: Vec<u32> = store.all().iter().map(Record::id).collect();
        prop_assert_eq!(before, after);
    }
}
