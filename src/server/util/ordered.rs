//! Editing of ordered child arrays embedded in a parent document.
//!
//! Topics embed their elements and missions embed their cities as arrays whose order is
//! the display order. Every function here is pure: it takes the current array plus the
//! operands and returns the array to persist, leaving the input untouched. Persisting the
//! result is the caller's job.

use std::collections::HashSet;

use crate::server::error::collection::CollectionError;

/// A child record addressed by a string key that is unique within its parent array.
pub trait Keyed {
    /// Human readable name of the record kind, used in error messages ("Element", "City").
    const KIND: &'static str;

    /// The record's key within its parent array.
    fn key(&self) -> &str;
}

/// A typed partial update of a child record.
///
/// Implementations copy every field that is set onto the target and leave the rest
/// untouched. A patch never changes the target's key.
pub trait Patch<T> {
    fn apply(self, target: &mut T);
}

/// Returns the record with the given key, if present.
pub fn find<'a, T: Keyed>(items: &'a [T], key: &str) -> Option<&'a T> {
    items.iter().find(|item| item.key() == key)
}

/// Returns `items` with `item` appended.
///
/// No uniqueness check happens here; the caller assigns a fresh key before appending.
pub fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut updated = items.to_vec();
    updated.push(item);
    updated
}

/// Merges `patch` onto the record with key `key`.
///
/// # Returns
/// - `Ok(Vec<T>)` - The full array with the one matching record replaced
/// - `Err(CollectionError::NotFound)` - No record has that key
pub fn update_at<T, P>(items: &[T], key: &str, patch: P) -> Result<Vec<T>, CollectionError>
where
    T: Keyed + Clone,
    P: Patch<T>,
{
    let index = items
        .iter()
        .position(|item| item.key() == key)
        .ok_or_else(|| CollectionError::not_found::<T>(key))?;

    let mut updated = items.to_vec();
    patch.apply(&mut updated[index]);

    Ok(updated)
}

/// Removes the record with key `key`.
///
/// Remaining records keep their keys and relative order.
///
/// # Returns
/// - `Ok(Vec<T>)` - The array without the matching record
/// - `Err(CollectionError::NotFound)` - Nothing was removed
pub fn remove_at<T>(items: &[T], key: &str) -> Result<Vec<T>, CollectionError>
where
    T: Keyed + Clone,
{
    let filtered: Vec<T> = items
        .iter()
        .filter(|item| item.key() != key)
        .cloned()
        .collect();

    if filtered.len() == items.len() {
        return Err(CollectionError::not_found::<T>(key));
    }

    Ok(filtered)
}

/// Rearranges `items` so that position `i` holds the record keyed `keys[i]`.
///
/// Checks run in this order: every key must exist (first missing one fails with
/// `NotFound`), the sequence length must equal the array length (`LengthMismatch`), and
/// no key may repeat (`DuplicateKey`). Together they accept exactly the permutations of
/// the current keys.
pub fn reorder<T>(items: &[T], keys: &[String]) -> Result<Vec<T>, CollectionError>
where
    T: Keyed + Clone,
{
    for key in keys {
        if find(items, key).is_none() {
            return Err(CollectionError::not_found::<T>(key));
        }
    }

    if keys.len() != items.len() {
        return Err(CollectionError::LengthMismatch {
            kind: T::KIND,
            expected: items.len(),
            got: keys.len(),
        });
    }

    let mut seen = HashSet::with_capacity(keys.len());
    for key in keys {
        if !seen.insert(key.as_str()) {
            return Err(CollectionError::DuplicateKey {
                kind: T::KIND,
                key: key.clone(),
            });
        }
    }

    Ok(keys
        .iter()
        .filter_map(|key| find(items, key).cloned())
        .collect())
}

/// Returns the first key that appears more than once, if any.
pub fn first_duplicate<'a, I>(keys: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    keys.into_iter().find(|key| !seen.insert(*key))
}
