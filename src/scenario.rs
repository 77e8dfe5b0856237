//! Scripted replay of one visitor going through both pages of a tab.

use crate::adapters::{MemorySessionStore, MemoryView, SimulatedProcessor};
use crate::config::SiteConfig;
use crate::core::checkout::{CheckoutController, PaymentOutcome};
use crate::core::handoff::{LoadedDraft, OrderHandoff};
use crate::core::wizard::{StepOutcome, WizardController};
use crate::domain::model::FieldId;
use crate::domain::ports::Clock;
use crate::utils::cancel::CancelToken;
use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub order: OrderInput,
    pub payment: Option<PaymentInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub plan: String,
}

/// Raw keystrokes; card number and expiry go through the input formatters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInput {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl Scenario {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiteError::ConfigError {
            message: format!("Scenario parsing error: {}", e),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub steps: Vec<StepOutcome>,
    pub order: StepOutcome,
    pub checkout: Option<LoadedDraft>,
    pub payment: Option<PaymentOutcome>,
    pub errors: BTreeMap<FieldId, String>,
    pub session_items: usize,
}

pub async fn run<C: Clock>(config: &SiteConfig, scenario: &Scenario, clock: C) -> Result<ScenarioReport> {
    let store = MemorySessionStore::new();
    let order_view = MemoryView::new();
    let order = &scenario.order;
    order_view
        .fill(FieldId::Name, &order.name)
        .fill(FieldId::Email, &order.email)
        .fill(FieldId::Phone, &order.phone)
        .fill(FieldId::BusinessName, &order.business_name)
        .fill(FieldId::Plan, &order.plan);

    let mut wizard = WizardController::new(
        order_view.clone(),
        OrderHandoff::new(store.clone(), config.handoff.storage_key.as_str()),
        config.wizard.clone(),
    );
    wizard.on_business_name_input(&order.business_name);

    let mut steps = Vec::new();
    let mut blocked = None;
    while wizard.state().current_step < config.wizard.steps {
        let outcome = wizard.advance();
        steps.push(outcome.clone());
        if !matches!(outcome, StepOutcome::Moved { .. }) {
            blocked = Some(outcome);
            break;
        }
    }

    let order_outcome = match blocked {
        Some(outcome) => outcome,
        None => wizard.submit_final()?,
    };

    let mut report = ScenarioReport {
        steps,
        order: order_outcome,
        checkout: None,
        payment: None,
        errors: order_view.snapshot().errors,
        session_items: store.len(),
    };

    if !matches!(report.order, StepOutcome::Submitted(_)) {
        return Ok(report);
    }
    let Some(payment) = &scenario.payment else {
        return Ok(report);
    };

    let checkout_view = MemoryView::new();
    let checkout = CheckoutController::new(
        checkout_view.clone(),
        OrderHandoff::new(store.clone(), config.handoff.storage_key.as_str()),
        SimulatedProcessor::from(&config.checkout),
        clock,
        config.checkout.clone(),
    );
    report.checkout = Some(checkout.populate_summary());

    checkout.on_card_input(&payment.card_number);
    checkout.on_expiry_input(&payment.expiry);
    checkout_view.fill(FieldId::CardCvc, &payment.cvc);

    report.payment = Some(checkout.submit_payment(&CancelToken::new()).await?);
    report.errors.extend(checkout_view.snapshot().errors);
    report.session_items = store.len();
    Ok(report)
}
