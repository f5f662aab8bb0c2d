//! Runtime settings for the registrar
//!
//! Holds the currency symbol used in output and the minimum-payment share
//! enforced on tuition payments. Settings are read-only: the registrar never
//! writes them back.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RegistrarError, RegistrarResult};
use crate::models::Money;

/// Default share of the outstanding balance a payment must cover
pub const DEFAULT_MINIMUM_PAYMENT_PERCENT: u32 = 40;

/// Registrar settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Minimum payment as a percentage of the pre-payment balance (0-100)
    #[serde(default = "default_minimum_payment_percent")]
    pub minimum_payment_percent: u32,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_minimum_payment_percent() -> u32 {
    DEFAULT_MINIMUM_PAYMENT_PERCENT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            minimum_payment_percent: default_minimum_payment_percent(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// Missing fields fall back to their defaults. A missing or malformed file
    /// is a configuration error.
    pub fn load(path: &Path) -> RegistrarResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RegistrarError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            RegistrarError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> RegistrarResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line overrides on top of the loaded settings
    pub fn with_overrides(
        mut self,
        currency_symbol: Option<String>,
        minimum_payment_percent: Option<u32>,
    ) -> RegistrarResult<Self> {
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol;
        }
        if let Some(percent) = minimum_payment_percent {
            self.minimum_payment_percent = percent;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate setting values
    pub fn validate(&self) -> RegistrarResult<()> {
        if self.minimum_payment_percent > 100 {
            return Err(RegistrarError::Config(format!(
                "minimum_payment_percent must be between 0 and 100, got {}",
                self.minimum_payment_percent
            )));
        }
        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
