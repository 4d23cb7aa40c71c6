//! Summit workshop tiers
//!
//! Tiers are immutable catalog data. Selection state only ever holds
//! `TierId` references back into the catalog; the tier records
//! themselves are never mutated at runtime.

use crate::TierId;
use serde::{Deserialize, Serialize};

/// A skill taught within a tier, with its difficulty level
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Free-text level label, e.g. "Foundational", "Advanced", "Elite"
    pub level: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }
}

/// Entry requirements for a tier
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prerequisites {
    /// Skills a participant must already have. Empty means the tier
    /// is open to all levels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    pub recommended: String,
    pub note: String,
}

impl Prerequisites {
    /// Whether the tier has no hard entry requirements.
    ///
    /// The UI keys its affordance off this: an "open to all levels"
    /// badge when true, a "prerequisites required" badge when false.
    pub fn open_to_all(&self) -> bool {
        self.required.is_empty()
    }
}

/// Per-tier two-day schedule outline
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSchedule {
    pub day1: String,
    pub day2: String,
}

/// A selectable tier of a summit workshop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopTier {
    pub id: TierId,
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Skills covered, in teaching order
    pub skills: Vec<Skill>,
    pub philosophy: String,
    pub prerequisites: Prerequisites,
    pub schedule: TierSchedule,
}

impl WorkshopTier {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: TierId::new(id),
            name: name.into(),
            tagline: String::new(),
            description: String::new(),
            skills: Vec::new(),
            philosophy: String::new(),
            prerequisites: Prerequisites::default(),
            schedule: TierSchedule::default(),
        }
    }
}
