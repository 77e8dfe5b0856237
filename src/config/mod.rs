#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Thresholds that differed between the site's page variants. Defaults are the canonical set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub wizard: WizardConfig,
    pub handoff: HandoffConfig,
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub steps: usize,
    pub name_min_len: usize,
    pub business_min_len: usize,
    pub preview_placeholder: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            steps: 2,
            name_min_len: 2,
            business_min_len: 2,
            preview_placeholder: "Your Agency".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    pub storage_key: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            storage_key: "tempOrder".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub processing_delay_ms: u64,
    pub processing_label: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 400,
            processing_label: "Processing...".to_string(),
        }
    }
}

impl CheckoutConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Logs thresholds that only some page variants used.
    pub fn warn_non_canonical(&self) {
        if self.wizard.name_min_len != 2 || self.wizard.business_min_len != 2 {
            tracing::warn!(
                name_min_len = self.wizard.name_min_len,
                business_min_len = self.wizard.business_min_len,
                "Non-canonical name length thresholds in use; the canonical minimum is 2"
            );
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("wizard.steps", self.wizard.steps, &[2, 3])?;
        validation::validate_range("wizard.name_min_len", self.wizard.name_min_len, 1, 2)?;
        validation::validate_range(
            "wizard.business_min_len",
            self.wizard.business_min_len,
            1,
            2,
        )?;
        validation::validate_non_empty_string(
            "wizard.preview_placeholder",
            &self.wizard.preview_placeholder,
        )?;
        validation::validate_non_empty_string("handoff.storage_key", &self.handoff.storage_key)?;
        validation::validate_range(
            "checkout.processing_delay_ms",
            self.checkout.processing_delay_ms,
            0,
            2000,
        )?;
        Ok(())
    }
}
