mod expense;
mod ids;
mod question;
mod quiz_settings;
mod story;
mod topic;
mod tutorial;

pub use expense::{Expense, ExpenseCategory, ExpenseError, validate_amount};
pub use ids::{ExpenseId, ParseIdError};
pub use question::{Question, QuestionDraft, QuestionError};
pub use quiz_settings::{
    DEFAULT_AUTO_ADVANCE_DELAY, MAX_AUTO_ADVANCE_DELAY, QuizSettings, QuizSettingsDraft,
    QuizSettingsError,
};
pub use story::{Speaker, StoryLine};
pub use topic::{Topic, TopicError};
pub use tutorial::TutorialSection;
