//! Session-local mutation of keyed collections.
//!
//! Collections are never edited in place by these functions: each returns
//! a new vector, leaving the input untouched.

use serde::Serialize;

/// A record identified by a unique key within its collection.
pub trait Keyed {
    /// Key type (usually one of the `define_id!` newtypes).
    type Key: PartialEq;

    /// This record's key.
    fn key(&self) -> &Self::Key;
}

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No record had the key; the new record was appended.
    Inserted,
    /// An existing record with the key was replaced in place.
    Replaced,
}

/// Returns `items` with `record` replacing the entry sharing its key, or
/// appended at the end when no entry does.
///
/// ```
/// use brandhub_core::{Keyed, upsert};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Item(&'static str, u32);
///
/// impl Keyed for Item {
///     type Key = &'static str;
///     fn key(&self) -> &Self::Key {
///         &self.0
///     }
/// }
///
/// let items = vec![Item("a", 1), Item("b", 2)];
/// assert_eq!(upsert(&items, Item("a", 9)), vec![Item("a", 9), Item("b", 2)]);
/// assert_eq!(upsert(&items, Item("c", 3)).len(), 3);
/// ```
#[must_use]
pub fn upsert<T: Keyed + Clone>(items: &[T], record: T) -> Vec<T> {
    upsert_with_outcome(items, record).0
}

/// Like [`upsert`], also reporting whether the record was inserted or
/// replaced.
#[must_use]
pub fn upsert_with_outcome<T: Keyed + Clone>(items: &[T], record: T) -> (Vec<T>, UpsertOutcome) {
    match items.iter().position(|item| item.key() == record.key()) {
        Some(index) => {
            let mut next = items.to_vec();
            if let Some(slot) = next.get_mut(index) {
                *slot = record;
            }
            (next, UpsertOutcome::Replaced)
        }
        None => {
            let mut next = Vec::with_capacity(items.len() + 1);
            next.extend_from_slice(items);
            next.push(record);
            (next, UpsertOutcome::Inserted)
        }
    }
}

/// Returns `items` without the record keyed `key`.
///
/// Removing a key that is not present returns a collection equal to
/// `items`.
#[must_use]
pub fn remove<T: Keyed + Clone>(items: &[T], key: &T::Key) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.key() != key)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        qty: u32,
    }

    impl Keyed for Item {
        type Key = String;

        fn key(&self) -> &String {
            &self.id
        }
    }

    fn item(id: &str, qty: u32) -> Item {
        Item {
            id: id.to_string(),
            qty,
        }
    }

    fn items() -> Vec<Item> {
        vec![item("a", 1), item("b", 2), item("c", 3)]
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let (next, outcome) = upsert_with_outcome(&items(), item("b", 20));
        assert_eq!(outcome, UpsertOutcome::Replaced);
        assert_eq!(next, vec![item("a", 1), item("b", 20), item("c", 3)]);
    }

    #[test]
    fn test_upsert_appends_new_key() {
        let (next, outcome) = upsert_with_outcome(&items(), item("d", 4));
        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(next.len(), 4);
        assert_eq!(next.last(), Some(&item("d", 4)));
        assert_eq!(next.get(..3), Some(items().as_slice()));
    }

    #[test]
    fn test_upsert_leaves_input_untouched() {
        let original = items();
        let _ = upsert(&original, item("a", 100));
        assert_eq!(original, items());
    }

    #[test]
    fn test_remove_present() {
        assert_eq!(
            remove(&items(), &"b".to_string()),
            vec![item("a", 1), item("c", 3)]
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        assert_eq!(remove(&items(), &"zzz".to_string()), items());
        assert!(remove::<Item>(&[], &"a".to_string()).is_empty());
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let once = remove(&items(), &"a".to_string());
        let twice = remove(&once, &"a".to_string());
        assert_eq!(once, twice);
    }
}
