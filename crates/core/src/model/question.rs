use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least two choices, got {len}")]
    TooFewChoices { len: usize },

    #[error("correct answer index {index} is out of range for {len} choices")]
    CorrectAnswerOutOfRange { index: usize, len: usize },
}

//
// ─── DRAFT ────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as authored in a content bank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, fewer than two choices are
    /// given, or the correct answer does not index into `choices`.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        let len = self.choices.len();
        if len < 2 {
            return Err(QuestionError::TooFewChoices { len });
        }
        if self.correct_answer >= len {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: self.correct_answer,
                len,
            });
        }

        Ok(Question {
            text: self.text,
            choices: self.choices,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            user_answer: None,
        })
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Multiple-choice question with the learner's latest selection.
///
/// `correct_answer` always indexes into `choices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft")]
pub struct Question {
    text: String,
    choices: Vec<String>,
    correct_answer: usize,
    explanation: String,
    #[serde(skip)]
    user_answer: Option<usize>,
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl Question {
    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn new<S: Into<String>>(
        text: impl Into<String>,
        choices: impl IntoIterator<Item = S>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            text: text.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_answer,
            explanation: explanation.into(),
        }
        .validate()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_answer]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<usize> {
        self.user_answer
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }

    /// True when an answer was recorded and it is not the correct one.
    #[must_use]
    pub fn is_answered_wrong(&self) -> bool {
        self.user_answer
            .is_some_and(|answer| answer != self.correct_answer)
    }

    pub(crate) fn set_user_answer(&mut self, choice: usize) {
        self.user_answer = Some(choice);
    }

    pub(crate) fn clear_user_answer(&mut self) {
        self.user_answer = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
