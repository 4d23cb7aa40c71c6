//! Registration core integration - re-exports all crates
#![deny(unsafe_code)]
pub use registration_catalog;
pub use registration_dispatch;
pub use registration_types;
pub use registration_wizard;
