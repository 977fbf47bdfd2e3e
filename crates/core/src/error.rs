use thiserror::Error;

use crate::model::{ExpenseError, QuestionError, QuizSettingsError, TopicError};
use crate::quiz::QuizError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
}
