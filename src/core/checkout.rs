use crate::config::CheckoutConfig;
use crate::core::format::{format_card_number, format_expiry};
use crate::core::handoff::{LoadedDraft, OrderHandoff};
use crate::core::validators;
use crate::domain::model::{FieldId, PaymentFields, SubmitState, SummarySlot};
use crate::domain::ports::{Clock, FormView, PaymentProcessor, ProcessingOutcome, SessionStore};
use crate::utils::cancel::CancelToken;
use crate::utils::error::Result;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Rejected { fields: Vec<FieldId> },
    Confirmed,
    Cancelled,
    /// Submit arrived while a payment was in flight or after confirmation.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Processing,
    Confirmed,
}

pub struct CheckoutController<V, S, P, C>
where
    V: FormView,
    S: SessionStore,
    P: PaymentProcessor,
    C: Clock,
{
    view: V,
    handoff: OrderHandoff<S>,
    processor: P,
    clock: C,
    config: CheckoutConfig,
    phase: Mutex<CheckoutPhase>,
}

impl<V, S, P, C> CheckoutController<V, S, P, C>
where
    V: FormView,
    S: SessionStore,
    P: PaymentProcessor,
    C: Clock,
{
    pub fn new(view: V, handoff: OrderHandoff<S>, processor: P, clock: C, config: CheckoutConfig) -> Self {
        Self {
            view,
            handoff,
            processor,
            clock,
            config,
            phase: Mutex::new(CheckoutPhase::Idle),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn phase(&self) -> CheckoutPhase {
        *self.lock_phase()
    }

    fn lock_phase(&self) -> MutexGuard<'_, CheckoutPhase> {
        self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fills the order sidebar from the handed-off draft, or the default draft.
    pub fn populate_summary(&self) -> LoadedDraft {
        let loaded = self.handoff.load_detailed();
        let draft = &loaded.draft;
        let price = format!("${}.00", draft.price());

        self.view
            .set_text(SummarySlot::Plan, &draft.plan().as_str().to_uppercase());
        self.view.set_text(SummarySlot::Business, draft.business_name());
        self.view.set_text(SummarySlot::Subtotal, &price);
        self.view.set_text(SummarySlot::Total, &price);
        loaded
    }

    pub fn on_card_input(&self, raw: &str) {
        self.view
            .set_field_value(FieldId::CardNumber, &format_card_number(raw));
    }

    pub fn on_expiry_input(&self, raw: &str) {
        self.view
            .set_field_value(FieldId::CardExpiry, &format_expiry(raw));
    }

    fn read_payment(&self) -> PaymentFields {
        PaymentFields {
            card_number: self.view.field_value(FieldId::CardNumber),
            expiry: self.view.field_value(FieldId::CardExpiry).trim().to_string(),
            cvc: self.view.field_value(FieldId::CardCvc).trim().to_string(),
        }
    }

    fn check_payment(&self, payment: &PaymentFields) -> Vec<FieldId> {
        let checks = [
            (
                FieldId::CardNumber,
                validators::card_number(&payment.card_number),
                "Invalid card number",
            ),
            (
                FieldId::CardExpiry,
                validators::expiry_at(&payment.expiry, self.clock.now()),
                "Invalid expiry date",
            ),
            (FieldId::CardCvc, validators::cvc(&payment.cvc), "Invalid CVC"),
        ];

        let mut failed = Vec::new();
        for (field, ok, message) in checks {
            if ok {
                self.view.set_field_error(field, None);
            } else {
                self.view.set_field_error(field, Some(message));
                failed.push(field);
            }
        }
        failed
    }

    /// Validates the card, waits out the simulated processing delay, then confirms.
    ///
    /// The session store is only cleared once the confirmation is shown; a rejected
    /// or cancelled payment leaves the handed-off order in place. Only one payment
    /// runs at a time and a confirmed checkout ignores further submits.
    pub async fn submit_payment(&self, cancel: &CancelToken) -> Result<PaymentOutcome> {
        {
            let mut phase = self.lock_phase();
            if *phase != CheckoutPhase::Idle {
                tracing::debug!(phase = ?*phase, "Ignoring payment submit");
                return Ok(PaymentOutcome::Unchanged);
            }

            let payment = self.read_payment();
            let failed = self.check_payment(&payment);
            if !failed.is_empty() {
                tracing::debug!(?failed, "Payment rejected by validation");
                return Ok(PaymentOutcome::Rejected { fields: failed });
            }
            *phase = CheckoutPhase::Processing;
        }

        self.view.set_submit_state(SubmitState::Processing {
            label: self.config.processing_label.clone(),
        });

        match self.processor.process(cancel).await {
            ProcessingOutcome::Completed => {
                *self.lock_phase() = CheckoutPhase::Confirmed;
                self.view.show_confirmation();
                self.handoff.clear()?;
                tracing::info!("Payment confirmed, session cleared");
                Ok(PaymentOutcome::Confirmed)
            }
            ProcessingOutcome::Cancelled => {
                *self.lock_phase() = CheckoutPhase::Idle;
                self.view.set_submit_state(SubmitState::Idle);
                tracing::info!("Payment processing cancelled");
                Ok(PaymentOutcome::Cancelled)
            }
        }
    }
}
