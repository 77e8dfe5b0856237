use quicksite::config::WizardConfig;
use quicksite::core::SessionStore;
use quicksite::domain::model::{Page, SummarySlot};
use quicksite::{
    FieldId, MemorySessionStore, MemoryView, OrderDraft, OrderHandoff, Plan, SiteError,
    StepOutcome, WizardController,
};

fn wizard(
    config: WizardConfig,
) -> (
    MemoryView,
    MemorySessionStore,
    WizardController<MemoryView, MemorySessionStore>,
) {
    let view = MemoryView::new();
    let store = MemorySessionStore::new();
    let controller = WizardController::new(
        view.clone(),
        OrderHandoff::new(store.clone(), "tempOrder"),
        config,
    );
    (view, store, controller)
}

fn three_steps() -> WizardConfig {
    WizardConfig {
        steps: 3,
        ..WizardConfig::default()
    }
}

#[test]
fn test_starts_on_step_one() {
    let (view, _, controller) = wizard(WizardConfig::default());
    assert_eq!(controller.state().current_step, 1);
    assert_eq!(view.snapshot().visible_step, Some(1));
    assert_eq!(view.snapshot().progress, Some(1));
}

#[test]
fn test_short_name_blocks_advance() {
    let (view, _, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::Name, "J").fill(FieldId::Email, "jo@x.com");

    let outcome = controller.advance();

    assert_eq!(
        outcome,
        StepOutcome::Blocked {
            fields: vec![FieldId::Name]
        }
    );
    assert_eq!(controller.state().current_step, 1);
    assert_eq!(view.error(FieldId::Name).as_deref(), Some("Please enter your name"));
    assert_eq!(view.error(FieldId::Email), None);
    assert_eq!(view.snapshot().visible_step, Some(1));
    assert_eq!(view.snapshot().scroll_to_top_count, 0);
}

#[test]
fn test_single_character_name_passes_with_relaxed_threshold() {
    let (view, _, mut controller) = wizard(WizardConfig {
        name_min_len: 1,
        ..WizardConfig::default()
    });
    view.fill(FieldId::Name, "J").fill(FieldId::Email, "jo@x.com");

    assert_eq!(controller.advance(), StepOutcome::Moved { from: 1, to: 2 });
}

#[test]
fn test_valid_step_one_advances_and_resets_errors() {
    let (view, _, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::Name, "J").fill(FieldId::Email, "not-an-email");
    assert!(matches!(controller.advance(), StepOutcome::Blocked { .. }));
    assert_eq!(controller.state().field_errors.len(), 2);

    view.fill(FieldId::Name, "Jo").fill(FieldId::Email, "jo@x.com");
    let outcome = controller.advance();

    assert_eq!(outcome, StepOutcome::Moved { from: 1, to: 2 });
    assert!(controller.state().field_errors.is_empty());
    let snapshot = view.snapshot();
    assert!(snapshot.errors.is_empty());
    assert_eq!(snapshot.visible_step, Some(2));
    assert_eq!(snapshot.progress, Some(2));
    assert_eq!(snapshot.scroll_to_top_count, 1);
}

#[test]
fn test_phone_is_optional_but_checked_when_present() {
    let (view, _, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::Name, "Jo")
        .fill(FieldId::Email, "jo@x.com")
        .fill(FieldId::Phone, "555-0100");

    assert_eq!(
        controller.advance(),
        StepOutcome::Blocked {
            fields: vec![FieldId::Phone]
        }
    );

    view.fill(FieldId::Phone, "(555) 010-0000");
    assert_eq!(controller.advance(), StepOutcome::Moved { from: 1, to: 2 });
}

#[test]
fn test_retreat_skips_validation_and_keeps_errors() {
    let (view, _, mut controller) = wizard(three_steps());
    view.fill(FieldId::Name, "Jo").fill(FieldId::Email, "jo@x.com");
    controller.advance();

    assert!(matches!(controller.advance(), StepOutcome::Blocked { .. }));
    assert!(view.error(FieldId::BusinessName).is_some());

    assert_eq!(controller.retreat(), StepOutcome::Moved { from: 2, to: 1 });
    assert!(view.error(FieldId::BusinessName).is_some());
    assert_eq!(view.snapshot().visible_step, Some(1));
    assert_eq!(view.snapshot().progress, Some(1));
    assert_eq!(controller.retreat(), StepOutcome::Unchanged);
}

#[test]
fn test_advance_on_last_step_is_a_no_op() {
    let (view, _, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::Name, "Jo").fill(FieldId::Email, "jo@x.com");
    controller.advance();

    assert_eq!(controller.advance(), StepOutcome::Unchanged);
    assert_eq!(controller.state().current_step, 2);
}

#[test]
fn test_three_step_flow_reaches_plan_step() {
    let (view, store, mut controller) = wizard(three_steps());
    view.fill(FieldId::Name, "Jo")
        .fill(FieldId::Email, "jo@x.com")
        .fill(FieldId::BusinessName, "Acme")
        .fill(FieldId::Plan, "basic");

    assert_eq!(controller.advance(), StepOutcome::Moved { from: 1, to: 2 });
    assert_eq!(controller.advance(), StepOutcome::Moved { from: 2, to: 3 });

    let outcome = controller.submit_final().unwrap();
    assert_eq!(outcome, StepOutcome::Submitted(OrderDraft::new("Acme", Plan::Basic)));
    assert!(store.get_item("tempOrder").unwrap().is_some());
}

#[test]
fn test_submit_saves_handoff_and_navigates() {
    let (view, store, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::Name, "Jo")
        .fill(FieldId::Email, "jo@x.com")
        .fill(FieldId::BusinessName, "  Acme  ")
        .fill(FieldId::Plan, "pro");
    controller.advance();

    let outcome = controller.submit_final().unwrap();

    assert_eq!(outcome, StepOutcome::Submitted(OrderDraft::new("Acme", Plan::Pro)));
    let raw = store.get_item("tempOrder").unwrap().unwrap();
    let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        saved,
        serde_json::json!({"businessName": "Acme", "plan": "pro", "price": 149})
    );
    assert_eq!(view.snapshot().navigations, vec![Page::Checkout]);
    assert!(controller.state().submitted);

    assert_eq!(controller.submit_final().unwrap(), StepOutcome::Unchanged);
    assert_eq!(controller.retreat(), StepOutcome::Unchanged);
}

#[test]
fn test_submit_with_short_business_name_is_blocked() {
    let (view, store, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::Name, "Jo")
        .fill(FieldId::Email, "jo@x.com")
        .fill(FieldId::BusinessName, "A")
        .fill(FieldId::Plan, "pro");
    controller.advance();

    let outcome = controller.submit_final().unwrap();

    assert_eq!(
        outcome,
        StepOutcome::Blocked {
            fields: vec![FieldId::BusinessName]
        }
    );
    assert_eq!(view.error(FieldId::BusinessName).as_deref(), Some("Business name required"));
    assert!(store.is_empty());
    assert!(view.snapshot().navigations.is_empty());
}

#[test]
fn test_unknown_plan_is_blocked() {
    let (view, store, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::Name, "Jo")
        .fill(FieldId::Email, "jo@x.com")
        .fill(FieldId::BusinessName, "Acme")
        .fill(FieldId::Plan, "enterprise");
    controller.advance();

    assert_eq!(
        controller.submit_final().unwrap(),
        StepOutcome::Blocked {
            fields: vec![FieldId::Plan]
        }
    );
    assert!(store.is_empty());
}

#[test]
fn test_submit_before_final_step_does_nothing() {
    let (view, store, mut controller) = wizard(WizardConfig::default());
    view.fill(FieldId::BusinessName, "Acme").fill(FieldId::Plan, "pro");

    assert_eq!(controller.submit_final().unwrap(), StepOutcome::Unchanged);
    assert!(store.is_empty());
}

#[test]
fn test_business_name_preview() {
    let (view, _, controller) = wizard(WizardConfig::default());

    controller.on_business_name_input("  Acme Studio ");
    assert_eq!(view.text(SummarySlot::Business).as_deref(), Some("Acme Studio"));

    controller.on_business_name_input("   ");
    assert_eq!(view.text(SummarySlot::Business).as_deref(), Some("Your Agency"));
}

struct FullStore;

impl SessionStore for FullStore {
    fn get_item(&self, _key: &str) -> quicksite::Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> quicksite::Result<()> {
        Err(SiteError::storage("quota exceeded"))
    }

    fn clear(&self) -> quicksite::Result<()> {
        Ok(())
    }
}

#[test]
fn test_storage_failure_is_reported_and_keeps_wizard_open() {
    let view = MemoryView::new();
    let mut controller = WizardController::new(
        view.clone(),
        OrderHandoff::new(FullStore, "tempOrder"),
        WizardConfig::default(),
    );
    view.fill(FieldId::Name, "Jo")
        .fill(FieldId::Email, "jo@x.com")
        .fill(FieldId::BusinessName, "Acme")
        .fill(FieldId::Plan, "pro");
    controller.advance();

    let err = controller.submit_final().unwrap_err();

    assert!(matches!(err, SiteError::StorageError { .. }));
    assert!(!controller.state().submitted);
    assert!(view.snapshot().navigations.is_empty());
}
