//! Form state machines for the registration core
//!
//! The interesting state lives here:
//!
//! - [`TierSelection`] — which tiers are chosen, in what order, and
//!   which have their details expanded
//! - [`SummitWizard`] — the three-step tiered registration flow with
//!   per-step validation gates and the submission lifecycle
//! - [`InterestForm`] — the single-step local/generic interest forms
//! - [`ReservationForm`] — the site-wide reservation modal
//! - [`WorkshopForm`] — exhaustive form dispatch from a catalog entry
//!
//! Every form mounts its own isolated state; nothing is shared across
//! instances. Dispatch failures leave entered values intact so the
//! user can retry without re-typing.

#![deny(unsafe_code)]

pub mod contact;
pub mod forms;
pub mod interest;
pub mod reservation;
pub mod summit;
pub mod tier_selection;

#[cfg(test)]
pub(crate) mod testing;

pub use contact::ContactFields;
pub use forms::WorkshopForm;
pub use interest::{InterestForm, InterestKind};
pub use reservation::{ReservationForm, RESERVATION_SHEET};
pub use summit::{SummitWizard, SUMMIT_STEP_LABELS};
pub use tier_selection::TierSelection;

pub(crate) use summit::status_name;
