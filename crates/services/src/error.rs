//! Shared error types for the services crate.

use thiserror::Error;

use finance_core::QuizError;
use finance_core::model::{ExpenseError, QuestionError};

/// Errors emitted by `QuizRunner` and quiz start-up.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Content(#[from] QuestionError),
}

/// Errors emitted by `ExpenseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExpenseServiceError {
    #[error(transparent)]
    Expense(#[from] ExpenseError),
}
