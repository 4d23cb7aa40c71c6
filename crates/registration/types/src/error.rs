//! Registration error types
//!
//! Every variant is client-local and recoverable: validation failures
//! block the triggering action and are surfaced to the user, dispatch
//! failures leave the form's entered values intact for retry. A
//! catalog lookup miss is deliberately NOT an error: it is an
//! `Option::None` that renders as a "coming soon" state.

use thiserror::Error;

/// Errors raised by the registration forms
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Forward progression attempted with no tier selected
    #[error("please select at least one tier before continuing")]
    EmptyTierSelection,

    /// Submit attempted without the terms agreement checked
    #[error("please agree to the terms and conditions before submitting")]
    TermsNotAccepted,

    /// A required contact field was left empty
    #[error("required field is missing: {0}")]
    MissingField(&'static str),

    /// Navigation outside the wizard's step range
    #[error("cannot move to step {step} of {total}")]
    StepOutOfRange { step: usize, total: usize },

    /// Submit attempted before reaching the final step
    #[error("submit is only available on step {total}, currently on step {step}")]
    NotOnFinalStep { step: usize, total: usize },

    /// A submission is already in flight; the submit control must be
    /// disabled while status is `submitting`
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// An operation required a status the form is not in
    #[error("operation requires status {expected}, current status is {actual}")]
    InvalidStatus {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type for registration operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;
