mod expense_vm;
mod quiz_vm;
mod story_vm;
mod tutorial_vm;

pub use expense_vm::{map_breakdown, map_expense_rows};
pub use quiz_vm::{QuizResultsVm, feedback_message, map_question};
pub use story_vm::map_story_line;
pub use tutorial_vm::{map_topic_line, map_tutorial_page};
