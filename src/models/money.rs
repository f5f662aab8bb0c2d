//! Money type for fees, payments and balances
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Arithmetic is checked: operations that would leave the i64 range
//! return `None` instead of wrapping or panicking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use registrar::models::Money;
    /// let fee = Money::from_cents(1050); // $10.50
    /// assert_eq!(fee.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract `other` from this amount, `None` on overflow
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Total of a sequence of amounts, `None` on overflow
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// `percent` of this amount, rounded up to the next cent
    ///
    /// This is the smallest amount for which [`Money::covers_percent_of`]
    /// holds. For a negative amount (a credit) the result is negative too.
    pub fn percent_of_ceil(&self, percent: u32) -> Self {
        let scaled = self.0 as i128 * percent as i128;
        let ceil = -(-scaled).div_euclid(100);
        Self(ceil.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Whether this amount is at least `percent` of `balance`
    ///
    /// Compared in exact integer arithmetic, so `40.00` covers 40% of `100.00`
    /// and `39.99` does not.
    pub fn covers_percent_of(&self, balance: Money, percent: u32) -> bool {
        self.0 as i128 * 100 >= balance.0 as i128 * percent as i128
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".50".
    /// More than two fractional digits are rejected rather than rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (rest, None),
        };

        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match fraction {
            None | Some("") => 0,
            Some(digits) => {
                if !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                if digits.len() > 2 {
                    return Err(MoneyParseError::TooManyDecimals(input.to_string()));
                }
                let value: i64 = digits.parse().map_err(|_| invalid())?;
                if digits.len() == 1 {
                    value * 10
                } else {
                    value
                }
            }
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooManyDecimals(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooManyDecimals(s) => write!(
                f,
                "Invalid money format: {} (at most two decimal places)",
                s
            ),
        }
    }
}

impl std::error::Error for MoneyParseError {}
