mod runner;

pub use crate::error::QuizServiceError;
pub use runner::QuizRunner;
