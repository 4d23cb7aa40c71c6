//! Form dispatch by workshop configuration
//!
//! Each catalog entry names which form handles it via [`FormType`];
//! the match here is exhaustive, so a new form type cannot be added
//! without deciding what every workshop kind does with it.

use crate::{InterestForm, SummitWizard};
use registration_types::{FormType, SubmissionStatus, WorkshopConfig};

/// The form mounted for a workshop page
#[derive(Clone, Debug)]
pub enum WorkshopForm {
    /// Three-step tiered wizard
    Summit(Box<SummitWizard>),
    /// Single-step interest form
    Interest(InterestForm),
}

impl WorkshopForm {
    /// Construct the right form for a catalog entry.
    ///
    /// A local workshop always gets the local interest form; a summit
    /// gets the wizard when tagged [`FormType::TieredSummit`] and the
    /// generic interest form otherwise.
    pub fn for_workshop(config: &WorkshopConfig) -> Self {
        match config {
            WorkshopConfig::Local(w) => Self::Interest(InterestForm::local(w)),
            WorkshopConfig::Summit(s) => match s.form_type {
                FormType::TieredSummit => Self::Summit(Box::new(SummitWizard::new(s))),
                FormType::GenericSummit | FormType::Local => {
                    Self::Interest(InterestForm::generic_summit(s))
                }
            },
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        match self {
            Self::Summit(w) => w.status(),
            Self::Interest(f) => f.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InterestKind;
    use registration_catalog::WorkshopCatalog;
    use registration_types::WorkshopId;

    #[test]
    fn test_form_selection_matches_catalog_tags() {
        let catalog = WorkshopCatalog::builtin();

        let local = WorkshopForm::for_workshop(catalog.get(&WorkshopId::new("local")).unwrap());
        assert!(matches!(
            local,
            WorkshopForm::Interest(ref f) if f.kind() == InterestKind::Local
        ));

        let tiered =
            WorkshopForm::for_workshop(catalog.get(&WorkshopId::new("hailey-kollin")).unwrap());
        assert!(matches!(tiered, WorkshopForm::Summit(_)));

        let generic =
            WorkshopForm::for_workshop(catalog.get(&WorkshopId::new("coming-soon")).unwrap());
        assert!(matches!(
            generic,
            WorkshopForm::Interest(ref f) if f.kind() == InterestKind::GenericSummit
        ));
    }
}
