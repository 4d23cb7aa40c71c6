//! Submission dispatch for the registration core
//!
//! [`SheetDispatcher`] is the seam between the forms and the outside
//! world: one async call that either resolves (success) or errors
//! (generic failure). [`HttpDispatcher`] is the production
//! implementation; when no endpoint is configured it falls back to a
//! clearly-flagged simulated delivery so local development works
//! without a live backend.

#![deny(unsafe_code)]

pub mod dispatcher;

pub use dispatcher::{
    DispatchError, DispatchOutcome, DispatchResult, HttpDispatcher, SheetDispatcher,
    ENDPOINT_ENV_VAR, SIMULATED_DELAY, UNCONFIGURED_ENDPOINT,
};
