pub mod checkout;
pub mod format;
pub mod handoff;
pub mod validators;
pub mod wizard;

pub use crate::domain::model::{FieldId, OrderDraft, Page, PaymentFields, Plan, SubmitState, SummarySlot};
pub use crate::domain::ports::{Clock, FormView, PaymentProcessor, ProcessingOutcome, SessionStore};
pub use crate::utils::error::Result;
