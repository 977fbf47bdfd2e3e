//! Read-only tutorial and quiz content.

mod banks;
mod stories;
mod tutorials;

use crate::model::{Question, QuestionError, Speaker, StoryLine, Topic, TutorialSection};

/// Source of tutorial sections and quiz question banks, keyed by topic.
pub trait ContentProvider: Send + Sync {
    /// Fresh, unanswered copy of the topic's question bank in authored order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a stored question is malformed.
    fn question_bank(&self, topic: Topic) -> Result<Vec<Question>, QuestionError>;

    /// Tutorial sections for `topic` in reading order.
    fn tutorial(&self, topic: Topic) -> Vec<TutorialSection>;

    /// Scripted story-mode conversation for `topic`, in speaking order.
    fn story(&self, topic: Topic) -> Vec<StoryLine>;
}

struct BankEntry {
    text: &'static str,
    choices: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

type StoryEntry = (Speaker, &'static str);

struct SectionEntry {
    title: &'static str,
    content: &'static str,
}

/// Content compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl StaticContent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn bank(topic: Topic) -> &'static [BankEntry] {
        match topic {
            Topic::Budgeting => banks::BUDGETING,
            Topic::Investing => banks::INVESTING,
            Topic::CreditScore => banks::CREDIT_SCORE,
            Topic::Saving => banks::SAVING,
            Topic::Spending => banks::SPENDING,
        }
    }

    fn sections(topic: Topic) -> &'static [SectionEntry] {
        match topic {
            Topic::Budgeting => tutorials::BUDGETING,
            Topic::Investing => tutorials::INVESTING,
            Topic::CreditScore => tutorials::CREDIT_SCORE,
            Topic::Saving => tutorials::SAVING,
            Topic::Spending => tutorials::SPENDING,
        }
    }

    fn script(topic: Topic) -> &'static [StoryEntry] {
        match topic {
            Topic::Budgeting => stories::BUDGETING,
            Topic::Investing => stories::INVESTING,
            Topic::CreditScore => stories::CREDIT_SCORE,
            Topic::Saving => stories::SAVING,
            Topic::Spending => stories::SPENDING,
        }
    }
}

impl ContentProvider for StaticContent {
    fn question_bank(&self, topic: Topic) -> Result<Vec<Question>, QuestionError> {
        Self::bank(topic)
            .iter()
            .map(|entry| {
                Question::new(entry.text, entry.choices, entry.correct, entry.explanation)
            })
            .collect()
    }

    fn tutorial(&self, topic: Topic) -> Vec<TutorialSection> {
        Self::sections(topic)
            .iter()
            .map(|entry| TutorialSection::new(entry.title, entry.content))
            .collect()
    }

    fn story(&self, topic: Topic) -> Vec<StoryLine> {
        Self::script(topic)
            .iter()
            .map(|&(speaker, text)| StoryLine::new(speaker, text))
            .collect()
    }
}
