//! Workshop catalog for the registration core
//!
//! Exposes [`WorkshopCatalog`]: an insertion-ordered, read-only map
//! from workshop id to its configuration record, plus the builtin
//! production catalog. Built once at startup and passed by reference
//! into the forms; there is no global mutable state.

#![deny(unsafe_code)]

pub mod builtin;
pub mod catalog;

pub use catalog::{CatalogError, CatalogResult, WorkshopCatalog};
