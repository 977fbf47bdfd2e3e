#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod expenses;
pub mod model;
pub mod quiz;
pub mod time;

pub use content::{ContentProvider, StaticContent};
pub use error::Error;
pub use expenses::{CategoryShare, CategoryTotal, ExpenseLedger};
pub use quiz::{
    AdvanceTicket, AnswerOutcome, Feedback, MissedQuestion, PendingAdvance, QuizError,
    QuizProgress, QuizResults, QuizSession, QuizState,
};
pub use time::Clock;
