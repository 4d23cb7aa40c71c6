//! The site-wide reservation modal form
//!
//! One modal serves several entry points (reserve a summit spot, join
//! the newsletter, lab interest, merch access); the `event` context
//! string records which one. Opening the modal re-arms the form with
//! the caller's default context; state from a previous open is
//! replaced, never leaked across contexts.

use crate::{status_name, ContactFields};
use chrono::{DateTime, Utc};
use registration_dispatch::SheetDispatcher;
use registration_types::{
    FormInstanceId, RegistrationError, RegistrationResult, SheetPayload, SubmissionStatus,
};

/// Destination tab for modal reservations
pub const RESERVATION_SHEET: &str = "Reservations";

/// Single-step reservation form behind the modal
#[derive(Clone, Debug)]
pub struct ReservationForm {
    id: FormInstanceId,
    pub contact: ContactFields,
    event: String,
    status: SubmissionStatus,
    created_at: DateTime<Utc>,
}

impl ReservationForm {
    /// Mount the form with a default event context
    pub fn new(default_event: impl Into<String>) -> Self {
        Self {
            id: FormInstanceId::generate(),
            contact: ContactFields::default(),
            event: default_event.into(),
            status: SubmissionStatus::Idle,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &FormInstanceId {
        &self.id
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn set_event(&mut self, event: impl Into<String>) {
        self.event = event.into();
    }

    /// Re-arm the form for a (re)opened modal: any stale status is
    /// cleared, and reopening under a different event context
    /// discards what was typed for the previous one.
    pub fn open(&mut self, default_event: impl Into<String>) {
        let default_event = default_event.into();
        if default_event != self.event {
            self.contact = ContactFields::default();
        }
        self.event = default_event;
        self.status = SubmissionStatus::Idle;
    }

    pub fn payload(&self) -> SheetPayload {
        SheetPayload::new(
            RESERVATION_SHEET,
            &self.contact.name,
            &self.contact.email,
            &self.contact.phone,
            &self.contact.instagram,
        )
        .with_notes(&self.event)
    }

    /// Submit the reservation. The modal carries no terms checkbox,
    /// so gating is required fields plus the in-flight guard only.
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
        self.contact.validate_required()?;

        self.status = SubmissionStatus::Submitting;
        let payload = self.payload();

        match dispatcher.submit(&payload).await {
            Ok(outcome) => {
                tracing::info!(
                    instance = %self.id.short(),
                    event = %self.event,
                    ?outcome,
                    "reservation submitted"
                );
                self.status = SubmissionStatus::Success;
            }
            Err(error) => {
                tracing::error!(
                    instance = %self.id.short(),
                    event = %self.event,
                    %error,
                    "reservation dispatch failed"
                );
                self.status = SubmissionStatus::Error;
            }
        }
        Ok(self.status)
    }

    /// Restore defaults after a success
    pub fn reset_after_success(&mut self) -> RegistrationResult<()> {
        if !self.status.is_success() {
            return Err(RegistrationError::InvalidStatus {
                expected: "success",
                actual: status_name(self.status),
            });
        }
        self.contact = ContactFields::default();
        self.status = SubmissionStatus::Idle;
        Ok(())
    }
}

#[cfg(test)]
impl ReservationForm {
    pub(crate) fn force_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}
