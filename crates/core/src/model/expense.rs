use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::ExpenseId;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ExpenseError {
    #[error("expense amount must be a finite positive number, got {0}")]
    InvalidAmount(f64),

    #[error("invalid expense category: {0:?}")]
    InvalidCategory(String),
}

/// Fixed set of categories an expense can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Entertainment,
    Housing,
    Utilities,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Housing,
        ExpenseCategory::Utilities,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Utilities => "Utilities",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ExpenseError::InvalidCategory(s.to_string()));
        }
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ExpenseError::InvalidCategory(trimmed.to_string()))
    }
}

/// Validates a raw amount entered by the user.
///
/// # Errors
///
/// Returns `ExpenseError::InvalidAmount` for NaN, infinities, zero and negatives.
pub fn validate_amount(amount: f64) -> Result<f64, ExpenseError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ExpenseError::InvalidAmount(amount))
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    amount: f64,
    category: ExpenseCategory,
    recorded_at: DateTime<Utc>,
}

impl Expense {
    /// # Errors
    ///
    /// Returns `ExpenseError::InvalidAmount` if `amount` is not finite and positive.
    pub fn new(
        id: ExpenseId,
        amount: f64,
        category: ExpenseCategory,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, ExpenseError> {
        Ok(Self {
            id,
            amount: validate_amount(amount)?,
            category,
            recorded_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
