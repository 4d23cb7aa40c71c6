//! Tier selection controller
//!
//! Tracks which tiers a user has chosen plus independent per-tier
//! "details expanded" visibility. Selection order is preserved: the
//! payload joins tiers in the order the user picked them, not catalog
//! order.

use registration_types::TierId;
use std::collections::HashSet;

/// Selection state over a summit workshop's tiers
#[derive(Clone, Debug)]
pub struct TierSelection {
    allow_multiple: bool,
    /// Selected tiers, in the order they were selected. Uniqueness is
    /// enforced on insert.
    selected: Vec<TierId>,
    /// Tiers whose supplementary skill details are expanded
    expanded: HashSet<TierId>,
}

impl TierSelection {
    pub fn new(allow_multiple: bool) -> Self {
        Self {
            allow_multiple,
            selected: Vec::new(),
            expanded: HashSet::new(),
        }
    }

    /// Multi-select controller (summit wizard default)
    pub fn multi() -> Self {
        Self::new(true)
    }

    /// Single-select controller: any select replaces the prior choice
    pub fn single() -> Self {
        Self::new(false)
    }

    pub fn allow_multiple(&self) -> bool {
        self.allow_multiple
    }

    /// Select a tier.
    ///
    /// Multi mode toggles membership; single mode makes the selection
    /// exactly `{tier}`.
    pub fn select(&mut self, tier: &TierId) {
        if self.allow_multiple {
            if let Some(pos) = self.selected.iter().position(|t| t == tier) {
                self.selected.remove(pos);
            } else {
                self.selected.push(tier.clone());
            }
        } else {
            self.selected.clear();
            self.selected.push(tier.clone());
        }
    }

    pub fn is_selected(&self, tier: &TierId) -> bool {
        self.selected.contains(tier)
    }

    /// Selected tiers in selection order
    pub fn selected(&self) -> &[TierId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether every available tier is selected.
    ///
    /// Drives the combined-commitment note. Requires at least two
    /// tiers to exist so a single-tier summit never shows a
    /// "both tiers" note.
    pub fn all_selected(&self, tier_count: usize) -> bool {
        tier_count >= 2 && self.selected.len() == tier_count
    }

    // ── Details Visibility ───────────────────────────────────────────

    /// Flip a tier's details panel. Independent of selection; any
    /// number of tiers may be expanded at once.
    pub fn toggle_details(&mut self, tier: &TierId) {
        if !self.expanded.remove(tier) {
            self.expanded.insert(tier.clone());
        }
    }

    pub fn details_expanded(&self, tier: &TierId) -> bool {
        self.expanded.contains(tier)
    }
}
