//! Non-negative monetary amounts using decimal arithmetic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Cost`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CostError {
    /// The amount is negative.
    #[error("cost cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input string is not a decimal number.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),
}

/// A non-negative monetary amount (e.g., the cost of a service visit).
///
/// Wraps [`Decimal`] rather than a float so amounts like `19.99` round-trip
/// exactly. The non-negativity constraint is enforced on construction and on
/// deserialization, so a stored document with a negative cost is rejected at
/// the read boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Cost(Decimal);

impl Cost {
    /// Create a `Cost` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, CostError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CostError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with two decimal places (e.g., "$19.99").
    #[must_use]
    pub fn display_dollars(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Cost {
    type Error = CostError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Cost> for Decimal {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl FromStr for Cost {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| CostError::InvalidDecimal(s.to_owned()))?;
        Self::new(amount)
    }
}
