//! Workshop catalog records
//!
//! A [`WorkshopConfig`] is the single source of truth for one
//! workshop: its copy, its tiers (for summits), which form handles
//! it, and which spreadsheet tab its submissions land in. Catalog
//! records are loaded once at startup and never mutated.

use crate::{FormType, WorkshopId, WorkshopTier};
use serde::{Deserialize, Serialize};

// ── Local Workshop ───────────────────────────────────────────────────

/// One time slot in the recurring local schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub focus: String,
}

/// Recurring schedule for local circuit workshops
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSchedule {
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_slots: Vec<TimeSlot>,
    pub format: String,
    pub philosophy: String,
}

/// One session in a multi-session progression path
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionSession {
    pub number: u32,
    pub title: String,
    pub content: String,
    pub prerequisite: String,
}

/// The structured-progression teaching methodology block
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Methodology {
    pub title: String,
    pub description: String,
    pub example_title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<ProgressionSession>,
}

/// What the local circuit is currently teaching
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentOfferings {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    pub note: String,
}

/// Vision/mission narrative for the local circuit page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionMission {
    pub headline: String,
    pub introduction: String,
    pub methodology: Methodology,
    pub current_offerings: CurrentOfferings,
}

/// An instructor on the local circuit roster
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// A recurring local workshop. No tiers, no private-coaching add-on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalWorkshop {
    pub id: WorkshopId,
    pub active: bool,
    pub title: String,
    pub tagline: String,
    pub current_focus: String,
    pub schedule: LocalSchedule,
    pub vision_mission: VisionMission,
    /// Roster in display order
    pub instructors: Vec<Instructor>,
    pub form_type: FormType,
    /// Destination tab identifier passed to the submission endpoint
    pub sheet_name: String,
    /// Relative path to the governing terms document
    pub terms_url: String,
}

// ── Summit Workshop ──────────────────────────────────────────────────

/// Guidance copy shown alongside tier selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSelectionNote {
    /// Shown when every available tier is selected
    pub both_tiers: String,
    /// Always shown above the tier cards
    pub encouragement: String,
}

/// A private-coaching format on offer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateClassType {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Private-coaching add-on descriptor for a summit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateClasses {
    pub available: bool,
    pub headline: String,
    pub description: String,
    /// Coaching formats in display order
    pub types: Vec<PrivateClassType>,
    pub schedule: String,
    pub availability: String,
    pub pricing_note: String,
    pub limitations: String,
}

/// A confirmed guest athlete with a public bio
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedGuest {
    pub name: String,
    pub country: String,
    pub flag: String,
    pub team: String,
    pub team_note: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// An unannounced guest, either still a silhouette or revealed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryGuest {
    pub silhouette: bool,
    pub hint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub revealed: bool,
}

/// A one-off or multi-tier summit event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummitWorkshop {
    pub id: WorkshopId,
    pub active: bool,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Selectable tiers in display order; empty for untiered summits
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<WorkshopTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_selection_note: Option<TierSelectionNote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_classes: Option<PrivateClasses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_bird_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<ConfirmedGuest>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mystery_guests: Vec<MysteryGuest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspense_message: Option<String>,
    pub form_type: FormType,
    pub sheet_name: String,
    pub terms_url: String,
}

impl SummitWorkshop {
    /// Look up a tier by id
    pub fn tier(&self, id: &crate::TierId) -> Option<&WorkshopTier> {
        self.tiers.iter().find(|t| &t.id == id)
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }
}

// ── Workshop Config ──────────────────────────────────────────────────

/// A workshop catalog entry, discriminated by kind
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkshopConfig {
    Local(LocalWorkshop),
    Summit(SummitWorkshop),
}

impl WorkshopConfig {
    pub fn id(&self) -> &WorkshopId {
        match self {
            Self::Local(w) => &w.id,
            Self::Summit(w) => &w.id,
        }
    }

    /// Whether the workshop is currently orderable/visible
    pub fn active(&self) -> bool {
        match self {
            Self::Local(w) => w.active,
            Self::Summit(w) => w.active,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Local(w) => &w.title,
            Self::Summit(w) => &w.title,
        }
    }

    pub fn form_type(&self) -> FormType {
        match self {
            Self::Local(w) => w.form_type,
            Self::Summit(w) => w.form_type,
        }
    }

    pub fn sheet_name(&self) -> &str {
        match self {
            Self::Local(w) => &w.sheet_name,
            Self::Summit(w) => &w.sheet_name,
        }
    }

    pub fn terms_url(&self) -> &str {
        match self {
            Self::Local(w) => &w.terms_url,
            Self::Summit(w) => &w.terms_url,
        }
    }

    pub fn as_summit(&self) -> Option<&SummitWorkshop> {
        match self {
            Self::Summit(w) => Some(w),
            Self::Local(_) => None,
        }
    }

    pub fn as_local(&self) -> Option<&LocalWorkshop> {
        match self {
            Self::Local(w) => Some(w),
            Self::Summit(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_summit() -> SummitWorkshop {
        SummitWorkshop {
            id: WorkshopId::new("test-summit"),
            active: true,
            title: "Test Summit".into(),
            subtitle: "Subtitle".into(),
            date: "TBC 2026".into(),
            location: "Kuala Lumpur".into(),
            duration: None,
            tiers: Vec::new(),
            tier_selection_note: None,
            private_classes: None,
            early_bird_message: None,
            confirmed: None,
            mystery_guests: Vec::new(),
            suspense_message: None,
            form_type: FormType::GenericSummit,
            sheet_name: "Test_Summit".into(),
            terms_url: "/terms/international-summit".into(),
        }
    }

    #[test]
    fn test_config_is_tagged_by_type() {
        let config = WorkshopConfig::Summit(minimal_summit());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "summit");
        assert_eq!(json["id"], "test-summit");
    }

    #[test]
    fn test_common_accessors_reach_through_variants() {
        let config = WorkshopConfig::Summit(minimal_summit());
        assert_eq!(config.id().as_str(), "test-summit");
        assert!(config.active());
        assert_eq!(config.sheet_name(), "Test_Summit");
        assert_eq!(config.form_type(), FormType::GenericSummit);
        assert!(config.as_summit().is_some());
        assert!(config.as_local().is_none());
    }

    #[test]
    fn test_tier_lookup_by_id() {
        let mut summit = minimal_summit();
        summit.tiers.push(WorkshopTier::new("foundation", "Foundation Tier"));
        summit.tiers.push(WorkshopTier::new("elite", "Elite Tier"));

        assert_eq!(summit.tier_count(), 2);
        assert!(summit.tier(&crate::TierId::new("elite")).is_some());
        assert!(summit.tier(&crate::TierId::new("mythic")).is_none());
    }
}
