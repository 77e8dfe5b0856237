use crate::config::CheckoutConfig;
use crate::domain::ports::{PaymentProcessor, ProcessingOutcome};
use crate::utils::cancel::CancelToken;
use async_trait::async_trait;
use std::time::Duration;

/// Pretends to charge the card by waiting a fixed delay. It cannot fail.
#[derive(Debug, Clone)]
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl From<&CheckoutConfig> for SimulatedProcessor {
    fn from(config: &CheckoutConfig) -> Self {
        Self::new(config.processing_delay())
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedProcessor {
    async fn process(&self, cancel: &CancelToken) -> ProcessingOutcome {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Processing payment");
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => ProcessingOutcome::Completed,
            _ = cancel.cancelled() => ProcessingOutcome::Cancelled,
        }
    }
}
