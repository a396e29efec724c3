//! The book catalog façade.
//!
//! A catalog composes one storage backend and one formatter behind the
//! three user-facing operations: add, remove, show.

pub mod catalog;

pub use catalog::Catalog;
