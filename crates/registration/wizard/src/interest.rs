//! Single-step interest forms
//!
//! The local circuit and untiered summits share one shape: contact
//! fields, a free-text box, the terms checkbox, submit. The only
//! difference is which payload key carries the free text
//! (`learningGoals` for local, `notes` for summits).

use crate::{status_name, ContactFields};
use chrono::{DateTime, Utc};
use registration_dispatch::SheetDispatcher;
use registration_types::{
    FormInstanceId, LocalWorkshop, RegistrationError, RegistrationResult, SheetPayload,
    SubmissionStatus, SummitWorkshop,
};

/// Which interest form this is; decides the free-text payload key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterestKind {
    Local,
    GenericSummit,
}

/// Single-step interest registration form
#[derive(Clone, Debug)]
pub struct InterestForm {
    id: FormInstanceId,
    kind: InterestKind,
    sheet_name: String,
    terms_url: String,
    pub contact: ContactFields,
    free_text: String,
    agreed_to_terms: bool,
    status: SubmissionStatus,
    created_at: DateTime<Utc>,
}

impl InterestForm {
    fn new(kind: InterestKind, sheet_name: &str, terms_url: &str) -> Self {
        Self {
            id: FormInstanceId::generate(),
            kind,
            sheet_name: sheet_name.to_string(),
            terms_url: terms_url.to_string(),
            contact: ContactFields::default(),
            free_text: String::new(),
            agreed_to_terms: false,
            status: SubmissionStatus::Idle,
            created_at: Utc::now(),
        }
    }

    /// Interest form for the local circuit (`learningGoals` free text)
    pub fn local(workshop: &LocalWorkshop) -> Self {
        Self::new(InterestKind::Local, &workshop.sheet_name, &workshop.terms_url)
    }

    /// Interest form for an untiered summit (`notes` free text)
    pub fn generic_summit(workshop: &SummitWorkshop) -> Self {
        Self::new(
            InterestKind::GenericSummit,
            &workshop.sheet_name,
            &workshop.terms_url,
        )
    }

    pub fn id(&self) -> &FormInstanceId {
        &self.id
    }

    pub fn kind(&self) -> InterestKind {
        self.kind
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Link target for the terms checkbox label
    pub fn terms_url(&self) -> &str {
        &self.terms_url
    }

    /// The free-text field: learning goals or notes, per kind
    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.free_text = text.into();
    }

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
    }

    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    /// Build the sheet payload from current state
    pub fn payload(&self) -> SheetPayload {
        let base = SheetPayload::new(
            &self.sheet_name,
            &self.contact.name,
            &self.contact.email,
            &self.contact.phone,
            &self.contact.instagram,
        );
        match self.kind {
            InterestKind::Local => base.with_learning_goals(&self.free_text),
            InterestKind::GenericSummit => base.with_notes(&self.free_text),
        }
    }

    /// Submit the form. Same lifecycle contract as the summit wizard:
    /// validation failures error out with status untouched, dispatch
    /// outcomes are reported through the returned status.
    pub async fn submit(
        &mut self,
        dispatcher: &dyn SheetDispatcher,
    ) -> RegistrationResult<SubmissionStatus> {
        if self.status.is_submitting() {
            return Err(RegistrationError::SubmissionInFlight);
        }
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
                    sheet = %self.sheet_name,
                    ?outcome,
                    "interest registration submitted"
                );
                self.status = SubmissionStatus::Success;
            }
            Err(error) => {
                tracing::error!(
                    instance = %self.id.short(),
                    sheet = %self.sheet_name,
                    %error,
                    "interest registration dispatch failed"
                );
                self.status = SubmissionStatus::Error;
            }
        }
        Ok(self.status)
    }

    /// "Submit another response": restore defaults, only from success
    pub fn reset_after_success(&mut self) -> RegistrationResult<()> {
        if !self.status.is_success() {
            return Err(RegistrationError::InvalidStatus {
                expected: "success",
                actual: status_name(self.status),
            });
        }
        self.contact = ContactFields::default();
        self.free_text = String::new();
        self.agreed_to_terms = false;
        self.status = SubmissionStatus::Idle;
        Ok(())
    }
}

#[cfg(test)]
impl InterestForm {
    pub(crate) fn force_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}
