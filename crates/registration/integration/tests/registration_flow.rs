//! End-to-end registration scenarios over the builtin catalog

use async_trait::async_trait;
use registration_catalog::WorkshopCatalog;
use registration_dispatch::{
    DispatchOutcome, DispatchResult, HttpDispatcher, SheetDispatcher, UNCONFIGURED_ENDPOINT,
};
use registration_types::{
    RegistrationError, SheetPayload, SubmissionStatus, TierId, WorkshopConfig, WorkshopId,
};
use registration_wizard::{InterestForm, SummitWizard, WorkshopForm};
use std::sync::atomic::{AtomicUsize, Ordering};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("registration_dispatch=debug,registration_wizard=debug")
        .with_test_writer()
        .try_init();
}

/// Counts dispatches so duplicate-submission bugs show up as counts
#[derive(Default)]
struct CountingDispatcher {
    calls: AtomicUsize,
}

impl CountingDispatcher {
    fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SheetDispatcher for CountingDispatcher {
    async fn submit(&self, _payload: &SheetPayload) -> DispatchResult<DispatchOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DispatchOutcome::Delivered)
    }
}

fn summit_wizard() -> SummitWizard {
    let catalog = WorkshopCatalog::builtin();
    let workshop = catalog
        .get(&WorkshopId::new("hailey-kollin"))
        .and_then(WorkshopConfig::as_summit)
        .cloned()
        .expect("builtin catalog carries the tiered summit");
    SummitWizard::new(&workshop)
}

#[tokio::test]
async fn full_summit_walk_with_both_tiers() {
    init_tracing();
    let mut wizard = summit_wizard();

    // Step 1: empty selection blocks, both tiers surface the note.
    assert_eq!(wizard.go_next(), Err(RegistrationError::EmptyTierSelection));
    wizard.select_tier(&TierId::new("foundation"));
    wizard.select_tier(&TierId::new("elite"));
    let note = wizard
        .combined_tier_note()
        .expect("both tiers selected must surface the catalog note");
    assert!(note.contains("committing to attend BOTH"));

    assert_eq!(wizard.go_next().unwrap(), 2);
    wizard.set_private_class_interest(true);
    wizard.set_private_class_type("2-on-1");

    assert_eq!(wizard.go_next().unwrap(), 3);
    wizard.contact.name = "Aina Zulkifli".into();
    wizard.contact.email = "aina@example.com".into();
    wizard.contact.phone = "+60 12-345 6789".into();
    wizard.contact.instagram = "@aina.stunts".into();
    wizard.set_agreed_to_terms(true);

    let dispatcher = CountingDispatcher::default();
    let status = wizard.submit(&dispatcher).await.unwrap();
    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(dispatcher.count(), 1);

    // A second submit without reset is not a defined transition.
    assert!(wizard.submit(&dispatcher).await.is_err());
    assert_eq!(dispatcher.count(), 1);

    // Reset restores the initial state.
    wizard.reset_after_success().unwrap();
    assert_eq!(wizard.step(), 1);
    assert!(wizard.tier_selection().is_empty());
    assert!(wizard.status().is_idle());
}

#[tokio::test]
async fn back_navigation_preserves_later_step_values() {
    let mut wizard = summit_wizard();
    wizard.select_tier(&TierId::new("elite"));
    wizard.go_next().unwrap();
    wizard.set_private_class_interest(true);
    wizard.set_private_class_type("1-on-1");
    wizard.go_next().unwrap();
    wizard.contact.name = "Aina".into();

    wizard.go_back().unwrap();
    wizard.go_back().unwrap();
    assert_eq!(wizard.step(), 1);

    wizard.go_next().unwrap();
    wizard.go_next().unwrap();
    assert_eq!(wizard.step(), 3);
    assert_eq!(wizard.contact.name, "Aina");
    assert_eq!(wizard.private_class_type(), Some("1-on-1"));
}

#[tokio::test]
async fn terms_gate_keeps_status_idle() {
    let mut wizard = summit_wizard();
    wizard.select_tier(&TierId::new("foundation"));
    wizard.go_next().unwrap();
    wizard.go_next().unwrap();
    wizard.contact.name = "Aina".into();
    wizard.contact.email = "aina@example.com".into();
    wizard.contact.phone = "+60 12-345 6789".into();

    let dispatcher = CountingDispatcher::default();
    assert_eq!(
        wizard.submit(&dispatcher).await,
        Err(RegistrationError::TermsNotAccepted)
    );
    assert!(wizard.status().is_idle());
    assert_eq!(dispatcher.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn local_form_succeeds_on_simulated_endpoint() {
    init_tracing();
    let catalog = WorkshopCatalog::builtin();
    let workshop = catalog
        .get(&WorkshopId::new("local"))
        .and_then(WorkshopConfig::as_local)
        .unwrap();

    let mut form = InterestForm::local(workshop);
    form.contact.name = "Aina".into();
    form.contact.email = "aina@example.com".into();
    form.contact.phone = "+60 12-345 6789".into();
    form.set_free_text("how to toss higher");
    form.set_agreed_to_terms(true);

    // No endpoint configured: the dispatcher must simulate success
    // rather than attempt a network call.
    let dispatcher = HttpDispatcher::new(UNCONFIGURED_ENDPOINT).unwrap();
    let status = form.submit(&dispatcher).await.unwrap();
    assert_eq!(status, SubmissionStatus::Success);

    form.reset_after_success().unwrap();
    assert_eq!(form.free_text(), "");
    assert!(form.status().is_idle());
}

#[test]
fn unknown_slug_renders_coming_soon_not_an_error() {
    let catalog = WorkshopCatalog::builtin();
    assert!(catalog.get(&WorkshopId::new("nonexistent")).is_none());
}

#[test]
fn every_catalog_entry_mounts_a_form() {
    let catalog = WorkshopCatalog::builtin();
    for workshop in catalog.list_active() {
        let form = WorkshopForm::for_workshop(workshop);
        assert!(form.status().is_idle());
    }
}
