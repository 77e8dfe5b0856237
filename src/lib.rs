pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod scenario;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{FixedClock, MemorySessionStore, MemoryView, SimulatedProcessor, SystemClock};
pub use config::SiteConfig;
pub use crate::core::checkout::{CheckoutController, CheckoutPhase, PaymentOutcome};
pub use crate::core::handoff::{DraftSource, FallbackReason, LoadedDraft, OrderHandoff};
pub use crate::core::wizard::{StepOutcome, WizardController, WizardState};
pub use domain::model::{FieldId, OrderDraft, Plan};
pub use utils::cancel::CancelToken;
pub use utils::error::{Result, SiteError};
