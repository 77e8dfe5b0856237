use crate::domain::model::{FieldId, Page, SubmitState, SummarySlot};
use crate::utils::cancel::CancelToken;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// The slice of the page DOM the controllers touch.
pub trait FormView: Send + Sync {
    fn field_value(&self, field: FieldId) -> String;
    fn set_field_value(&self, field: FieldId, value: &str);
    /// `Some` shows the message and marks the input invalid, `None` clears both.
    fn set_field_error(&self, field: FieldId, message: Option<&str>);
    fn set_step_visible(&self, step: usize);
    fn set_progress(&self, step: usize);
    fn set_text(&self, slot: SummarySlot, text: &str);
    fn scroll_to_top(&self);
    fn navigate(&self, page: Page);
    fn set_submit_state(&self, state: SubmitState);
    fn show_confirmation(&self);
}

/// Tab-scoped key/value storage.
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Completed,
    Cancelled,
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process(&self, cancel: &CancelToken) -> ProcessingOutcome;
}
