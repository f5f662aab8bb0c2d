//! Payment model
//!
//! A tuition payment applied against a student's outstanding balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single payment received from a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Amount received
    pub amount: Money,

    /// Outstanding balance right after this payment was applied
    pub balance_after: Money,

    /// When the payment was received
    pub received_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(amount: Money, balance_after: Money) -> Self {
        Self {
            amount,
            balance_after,
            received_at: Utc::now(),
        }
    }
}
