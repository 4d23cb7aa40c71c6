//! The three-step summit registration wizard
//!
//! Step 1 selects tiers, step 2 records private-coaching interest,
//! step 3 collects contact details and submits. Forward progression
//! is gated per step; back-navigation never loses entered values.
//! Submission drives the `idle -> submitting -> success | error`
//! lifecycle and guards against duplicate dispatches.

use crate::{ContactFields, TierSelection};
use chrono::{DateTime, Utc};
use registration_dispatch::SheetDispatcher;
use registration_types::{
    FormInstanceId, RegistrationError, RegistrationResult, SheetPayload, SubmissionStatus,
    SummitWorkshop, TierId,
};

/// Step labels for the wizard's progress indicator
pub const SUMMIT_STEP_LABELS: [&str; 3] = ["Select Tier", "Private Classes", "Contact Info"];

/// State machine for a tiered summit registration
#[derive(Clone, Debug)]
pub struct SummitWizard {
    id: FormInstanceId,
    /// Snapshot of the catalog record this wizard serves
    workshop: SummitWorkshop,
    /// Current step, 1-based
    step: usize,
    tiers: TierSelection,
    private_class_interest: bool,
    private_class_type: Option<String>,
    pub contact: ContactFields,
    agreed_to_terms: bool,
    status: SubmissionStatus,
    created_at: DateTime<Utc>,
}

impl SummitWizard {
    /// Mount a wizard for a summit workshop
    pub fn new(workshop: &SummitWorkshop) -> Self {
        Self {
            id: FormInstanceId::generate(),
            workshop: workshop.clone(),
            step: 1,
            tiers: TierSelection::multi(),
            private_class_interest: false,
            private_class_type: None,
            contact: ContactFields::default(),
            agreed_to_terms: false,
            status: SubmissionStatus::Idle,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &FormInstanceId {
        &self.id
    }

    pub fn workshop(&self) -> &SummitWorkshop {
        &self.workshop
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // ── Step Navigation ──────────────────────────────────────────────

    /// Current step, 1-based
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        SUMMIT_STEP_LABELS.len()
    }

    pub fn step_labels(&self) -> &'static [&'static str] {
        &SUMMIT_STEP_LABELS
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.total_steps()
    }

    /// Advance one step.
    ///
    /// Leaving step 1 requires a non-empty tier selection; the error
    /// is surfaced to the user, never swallowed. Returns the new step
    /// so the caller can reset the scroll position (a presentation
    /// side effect that stays outside this type).
    pub fn go_next(&mut self) -> RegistrationResult<usize> {
        if self.step == 1 && self.tiers.is_empty() {
            return Err(RegistrationError::EmptyTierSelection);
        }
        if self.is_final_step() {
            return Err(RegistrationError::StepOutOfRange {
                step: self.step + 1,
                total: self.total_steps(),
            });
        }
        self.step += 1;
        Ok(self.step)
    }

    /// Go back one step. Entered values are preserved so returning
    /// forward restores them exactly.
    pub fn go_back(&mut self) -> RegistrationResult<usize> {
        if self.step == 1 {
            return Err(RegistrationError::StepOutOfRange {
                step: 0,
                total: self.total_steps(),
            });
        }
        self.step -= 1;
        Ok(self.step)
    }

    // ── Step 1: Tier Selection ───────────────────────────────────────

    pub fn select_tier(&mut self, tier: &TierId) {
        self.tiers.select(tier);
    }

    pub fn toggle_tier_details(&mut self, tier: &TierId) {
        self.tiers.toggle_details(tier);
    }

    pub fn tier_selection(&self) -> &TierSelection {
        &self.tiers
    }

    /// The combined-commitment note, when every tier is selected and
    /// the workshop defines one
    pub fn combined_tier_note(&self) -> Option<&str> {
        if self.tiers.all_selected(self.workshop.tier_count()) {
            self.workshop
                .tier_selection_note
                .as_ref()
                .map(|n| n.both_tiers.as_str())
        } else {
            None
        }
    }

    // ── Step 2: Private Coaching Interest ────────────────────────────

    /// Record interest in private coaching. Declining clears any
    /// previously chosen format.
    pub fn set_private_class_interest(&mut self, interested: bool) {
        self.private_class_interest = interested;
        if !interested {
            self.private_class_type = None;
        }
    }

    pub fn private_class_interest(&self) -> bool {
        self.private_class_interest
    }

    pub fn set_private_class_type(&mut self, type_id: impl Into<String>) {
        self.private_class_type = Some(type_id.into());
    }

    pub fn private_class_type(&self) -> Option<&str> {
        self.private_class_type.as_deref()
    }

    // ── Step 3: Terms and Submission ─────────────────────────────────

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
    }

    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    /// Build the sheet payload from current state. Tier names are
    /// joined in the order the user selected them.
    pub fn payload(&self) -> SheetPayload {
        let tier_names: Vec<&str> = self
            .tiers
            .selected()
            .iter()
            .map(|id| {
                self.workshop
                    .tier(id)
                    .map(|t| t.name.as_str())
                    .unwrap_or_else(|| id.as_str())
            })
            .collect();

        SheetPayload::new(
            &self.workshop.sheet_name,
            &self.contact.name,
            &self.contact.email,
            &self.contact.phone,
            &self.contact.instagram,
        )
        .with_summit_fields(
            tier_names.join(", "),
            self.private_class_interest,
            self.private_class_type.as_deref(),
        )
    }

    /// Submit the registration.
    ///
    /// Validation failures (`Err`) leave the status untouched at
    /// `idle`; once validation passes, the result of the dispatch is
    /// reported through the returned status (`success` or `error`),
    /// and entered values are retained either way so an `error` can
    /// be retried by submitting again.
    pub async fn submit(
        &mut self,
        dispatcher: &dyn SheetDispatcher,
    ) -> RegistrationResult<SubmissionStatus> {
        if !self.is_final_step() {
            return Err(RegistrationError::NotOnFinalStep {
                step: self.step,
                total: self.total_steps(),
            });
        }
        if self.status.is_submitting() {
            return Err(RegistrationError::SubmissionInFlight);
        }
        // success -> submitting is not a defined transition; the user
        // must reset first ("submit another response").
        if self.status.is_success() {
            return Err(RegistrationError::InvalidStatus {
                expected: "idle or error",
                actual: "success",
            });
        }
        if !self.agreed_to_terms {
            return Err(RegistrationError::TermsNotAccepted);
        }
        self.contact.validate_required()?;

        self.status = SubmissionStatus::Submitting;
        let payload = self.payload();

        match dispatcher.submit(&payload).await {
            Ok(outcome) => {
                tracing::info!(
                    instance = %self.id.short(),
                    workshop = %self.workshop.id,
                    ?outcome,
                    "summit registration submitted"
                );
                self.status = SubmissionStatus::Success;
            }
            Err(error) => {
                tracing::error!(
                    instance = %self.id.short(),
                    workshop = %self.workshop.id,
                    %error,
                    "summit registration dispatch failed"
                );
                self.status = SubmissionStatus::Error;
            }
        }
        Ok(self.status)
    }

    /// "Submit another response": restore all defaults. Only legal
    /// from the success state.
    pub fn reset_after_success(&mut self) -> RegistrationResult<()> {
        if !self.status.is_success() {
            return Err(RegistrationError::InvalidStatus {
                expected: "success",
                actual: status_name(self.status),
            });
        }
        self.step = 1;
        self.tiers = TierSelection::multi();
        self.private_class_interest = false;
        self.private_class_type = None;
        self.contact = ContactFields::default();
        self.agreed_to_terms = false;
        self.status = SubmissionStatus::Idle;
        Ok(())
    }
}

#[cfg(test)]
impl SummitWizard {
    pub(crate) fn force_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}

pub(crate) fn status_name(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "idle",
        SubmissionStatus::Submitting => "submitting",
        SubmissionStatus::Success => "success",
        SubmissionStatus::Error => "error",
    }
}
