use crate::config::WizardConfig;
use crate::core::handoff::OrderHandoff;
use crate::core::validators;
use crate::domain::model::{FieldId, OrderDraft, Page, Plan, SummarySlot};
use crate::domain::ports::{FormView, SessionStore};
use crate::utils::error::Result;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: usize,
    pub field_errors: BTreeMap<FieldId, String>,
    pub submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: usize, to: usize },
    Blocked { fields: Vec<FieldId> },
    /// Nowhere to go: first step on retreat, last step on advance, or already submitted.
    Unchanged,
    Submitted(OrderDraft),
}

/// Drives the order page: step gating, the sidebar preview, and the final handoff.
pub struct WizardController<V: FormView, S: SessionStore> {
    view: V,
    handoff: OrderHandoff<S>,
    config: WizardConfig,
    state: WizardState,
}

impl<V: FormView, S: SessionStore> WizardController<V, S> {
    pub fn new(view: V, handoff: OrderHandoff<S>, config: WizardConfig) -> Self {
        view.set_step_visible(1);
        view.set_progress(1);
        Self {
            view,
            handoff,
            config,
            state: WizardState {
                current_step: 1,
                ..WizardState::default()
            },
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn last_step(&self) -> usize {
        self.config.steps
    }

    /// Fields gated when leaving `step`. The final step is gated by `submit_final`.
    fn step_fields(&self, step: usize) -> &'static [FieldId] {
        match (self.config.steps, step) {
            (_, 1) => &[FieldId::Name, FieldId::Email, FieldId::Phone],
            (3, 2) => &[FieldId::BusinessName],
            _ => &[],
        }
    }

    fn check(&self, field: FieldId) -> Option<&'static str> {
        let value = self.view.field_value(field);
        let value = value.trim();
        let ok = match field {
            FieldId::Name => validators::text(value, self.config.name_min_len),
            FieldId::Email => validators::email(value),
            FieldId::Phone => validators::phone(value),
            FieldId::BusinessName => validators::text(value, self.config.business_min_len),
            FieldId::Plan => value.parse::<Plan>().is_ok(),
            _ => true,
        };
        if ok {
            return None;
        }
        Some(match field {
            FieldId::Name => "Please enter your name",
            FieldId::Email => "Enter a valid email",
            FieldId::Phone => "Enter a valid phone number",
            FieldId::BusinessName => "Business name required",
            FieldId::Plan => "Please choose a plan",
            _ => "Invalid value",
        })
    }

    /// Validates `fields`, showing errors on failures and clearing them on passes.
    fn gate(&mut self, fields: &[FieldId]) -> Vec<FieldId> {
        let mut failed = Vec::new();
        for &field in fields {
            match self.check(field) {
                Some(message) => {
                    self.view.set_field_error(field, Some(message));
                    self.state.field_errors.insert(field, message.to_string());
                    failed.push(field);
                }
                None => {
                    self.view.set_field_error(field, None);
                    self.state.field_errors.remove(&field);
                }
            }
        }
        failed
    }

    fn clear_errors(&mut self) {
        for field in std::mem::take(&mut self.state.field_errors).into_keys() {
            self.view.set_field_error(field, None);
        }
    }

    fn show_step(&self, step: usize) {
        self.view.set_step_visible(step);
        self.view.set_progress(step);
    }

    pub fn advance(&mut self) -> StepOutcome {
        let from = self.state.current_step;
        if self.state.submitted || from >= self.last_step() {
            return StepOutcome::Unchanged;
        }

        let fields = self.step_fields(from);
        let failed = self.gate(fields);
        if !failed.is_empty() {
            tracing::debug!(step = from, ?failed, "Step blocked by validation");
            return StepOutcome::Blocked { fields: failed };
        }

        self.clear_errors();
        let to = from + 1;
        self.state.current_step = to;
        self.show_step(to);
        self.view.scroll_to_top();
        tracing::debug!(from, to, "Advanced wizard step");
        StepOutcome::Moved { from, to }
    }

    pub fn retreat(&mut self) -> StepOutcome {
        let from = self.state.current_step;
        if self.state.submitted || from <= 1 {
            return StepOutcome::Unchanged;
        }

        let to = from - 1;
        self.state.current_step = to;
        self.show_step(to);
        tracing::debug!(from, to, "Went back a wizard step");
        StepOutcome::Moved { from, to }
    }

    /// Validates the final step, saves the order for the checkout page and navigates there.
    ///
    /// Only a session storage write failure is an error; invalid input is `Blocked`.
    pub fn submit_final(&mut self) -> Result<StepOutcome> {
        if self.state.submitted || self.state.current_step != self.last_step() {
            return Ok(StepOutcome::Unchanged);
        }

        let failed = self.gate(&[FieldId::BusinessName, FieldId::Plan]);
        if !failed.is_empty() {
            tracing::debug!(?failed, "Order submission blocked by validation");
            return Ok(StepOutcome::Blocked { fields: failed });
        }

        let business_name = self.view.field_value(FieldId::BusinessName).trim().to_string();
        let Ok(plan) = self.view.field_value(FieldId::Plan).parse::<Plan>() else {
            return Ok(StepOutcome::Blocked {
                fields: vec![FieldId::Plan],
            });
        };
        let draft = OrderDraft::new(business_name, plan);

        self.handoff.save(&draft)?;
        self.clear_errors();
        self.state.submitted = true;
        let next = Page::Checkout;
        self.view.navigate(next);
        tracing::info!(
            plan = %plan,
            price = draft.price(),
            page = next.path(),
            "Order saved, continuing to checkout"
        );
        Ok(StepOutcome::Submitted(draft))
    }

    /// Sidebar preview of the business name, updated on every keystroke.
    pub fn on_business_name_input(&self, raw: &str) {
        let trimmed = raw.trim();
        let preview = if trimmed.is_empty() {
            self.config.preview_placeholder.as_str()
        } else {
            trimmed
        };
        self.view.set_text(SummarySlot::Business, preview);
    }
}
