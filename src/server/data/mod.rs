//! Document store access.
//!
//! Every resource is kept as a JSON document in a single table addressed by collection
//! name and id. `DocumentRepository` provides the store primitives (create, list with
//! filters and cursor pagination, fetch, merge update, delete) and returns `Document`
//! models so entity types never leak into the service layer.

pub mod document;

#[cfg(test)]
mod test;
