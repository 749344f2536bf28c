//! SeaORM entities backing the document store.

pub mod prelude;

pub mod document;
