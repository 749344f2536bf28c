//! Identifier generation for documents and embedded child records.

use chrono::Utc;
use rand::Rng;

const HEX: &[u8] = b"0123456789abcdef";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789";

const SHORT_ID_LENGTH: usize = 8;
const DOCUMENT_ID_LENGTH: usize = 20;

fn random_string(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx] as char
        })
        .collect()
}

/// Generates the 8-character lowercase hex id given to new topics and missions.
pub fn short_id() -> String {
    random_string(HEX, SHORT_ID_LENGTH)
}

/// Generates a 20-character alphanumeric id for documents created without one.
pub fn document_id() -> String {
    random_string(ALPHANUMERIC, DOCUMENT_ID_LENGTH)
}

/// Key for the child at `index` of a parent created with id `parent_id`.
pub fn child_id(parent_id: &str, index: usize) -> String {
    format!("elem_{}_{}", parent_id, index)
}

/// Key for a child at `index` of an array replaced wholesale, when the client sent none.
pub fn indexed_timestamp_id(index: usize) -> String {
    format!("elem_{}_{}", Utc::now().timestamp_millis(), index)
}

/// Key for a child appended to an existing array.
///
/// The base form is `elem_<millis>`. When that key is already taken (two appends in the
/// same millisecond) the smallest numeric suffix that makes it unique is added.
pub fn fresh_child_id<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let base = format!("elem_{}", Utc::now().timestamp_millis());

    if !taken.contains(&base.as_str()) {
        return base;
    }

    (1..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !taken.contains(&candidate.as_str()))
        .unwrap_or(base)
}
