//! Form selection tags and the submission lifecycle

use serde::{Deserialize, Serialize};

// ── Form Type ────────────────────────────────────────────────────────

/// Which form handles a workshop's registrations.
///
/// The catalog tags each workshop with one of these; callers match on
/// it exhaustively to construct the right form, so adding a variant
/// forces every dispatch site to handle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormType {
    /// Single-step interest form for recurring local workshops
    Local,
    /// Three-step wizard: tier selection, add-on interest, contact info
    TieredSummit,
    /// Single-step interest form for untiered summits
    GenericSummit,
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Local => "local",
            Self::TieredSummit => "tiered-summit",
            Self::GenericSummit => "generic-summit",
        };
        write!(f, "{tag}")
    }
}

// ── Submission Status ────────────────────────────────────────────────

/// Lifecycle of one form submission.
///
/// Legal transitions:
/// - `Idle → Submitting` on a validated submit
/// - `Submitting → Success` when dispatch resolves (including the
///   simulated no-endpoint path)
/// - `Submitting → Error` when dispatch rejects
/// - `Success | Error → Idle` on explicit user reset
///
/// There is no automatic retry and no timeout-driven transition; the
/// forms enforce the transitions, this enum just names the states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_idle() {
        assert!(SubmissionStatus::default().is_idle());
    }

    #[test]
    fn test_form_type_tags() {
        assert_eq!(
            serde_json::to_string(&FormType::TieredSummit).unwrap(),
            "\"tiered-summit\""
        );
        assert_eq!(FormType::Local.to_string(), "local");
    }
}
