//! Workshop catalog: insertion-ordered, read-only lookup
//!
//! Workshops are registered once at startup and never mutated. The
//! catalog preserves registration order so listings are stable and
//! deterministic; callers receive references into the catalog rather
//! than copies.

use registration_types::{SummitWorkshop, WorkshopConfig, WorkshopId};
use std::collections::HashMap;
use thiserror::Error;

/// Catalog construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A workshop with the same id was already registered
    #[error("duplicate workshop id: {0}")]
    DuplicateWorkshop(WorkshopId),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only lookup over the configured workshops.
///
/// Lookup misses are a normal outcome (an unpublished slug renders as
/// "coming soon"), so [`get`](Self::get) returns `Option` rather than
/// an error. Pass the catalog by reference into whatever needs it;
/// there is no global instance.
#[derive(Clone, Debug, Default)]
pub struct WorkshopCatalog {
    /// Workshops in registration order
    workshops: Vec<WorkshopConfig>,
    /// Index by id into `workshops`
    by_id: HashMap<WorkshopId, usize>,
}

impl WorkshopCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workshop.
    ///
    /// Ids must be unique; listing order is registration order.
    pub fn register(&mut self, workshop: WorkshopConfig) -> CatalogResult<WorkshopId> {
        let id = workshop.id().clone();
        if self.by_id.contains_key(&id) {
            return Err(CatalogError::DuplicateWorkshop(id));
        }

        self.by_id.insert(id.clone(), self.workshops.len());
        self.workshops.push(workshop);

        tracing::debug!(workshop_id = %id, "workshop registered");
        Ok(id)
    }

    /// Look up a workshop by id. `None` is not an error.
    pub fn get(&self, id: &WorkshopId) -> Option<&WorkshopConfig> {
        self.by_id.get(id).map(|&idx| &self.workshops[idx])
    }

    /// All active workshops, in registration order
    pub fn list_active(&self) -> Vec<&WorkshopConfig> {
        self.workshops.iter().filter(|w| w.active()).collect()
    }

    /// All summit-type workshops, in registration order
    pub fn summits(&self) -> Vec<&SummitWorkshop> {
        self.workshops
            .iter()
            .filter_map(WorkshopConfig::as_summit)
            .collect()
    }

    pub fn contains(&self, id: &WorkshopId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.workshops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workshops.is_empty()
    }
}
