//! Registration domain types
//!
//! Shared vocabulary for the interest-registration core: workshop
//! catalog records (the configuration-as-data backbone), tier
//! definitions, form selection tags, the submission lifecycle, the
//! flat sheet payload, and the error taxonomy.
//!
//! Catalog data is immutable once loaded; forms reference it by id
//! and never mutate it. The only external contract here is
//! [`SheetPayload`], whose JSON key names the spreadsheet integration
//! depends on.

#![deny(unsafe_code)]

pub mod error;
pub mod form;
pub mod ids;
pub mod payload;
pub mod prefs;
pub mod tier;
pub mod workshop;

pub use error::{RegistrationError, RegistrationResult};
pub use form::{FormType, SubmissionStatus};
pub use ids::{FormInstanceId, TierId, WorkshopId};
pub use payload::SheetPayload;
pub use prefs::{InMemoryPreferences, PreferenceStore, Theme, COOKIE_CONSENT_KEY, THEME_KEY};
pub use tier::{Prerequisites, Skill, TierSchedule, WorkshopTier};
pub use workshop::{
    ConfirmedGuest, CurrentOfferings, Instructor, LocalSchedule, LocalWorkshop, Methodology,
    MysteryGuest, PrivateClassType, PrivateClasses, ProgressionSession, SummitWorkshop,
    TierSelectionNote, TimeSlot, VisionMission, WorkshopConfig,
};
