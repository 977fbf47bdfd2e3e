use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("unknown topic: {0}")]
    Unknown(String),
}

/// Subject area shared by a tutorial and its quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    Budgeting,
    Investing,
    CreditScore,
    Saving,
    Spending,
}

impl Topic {
    /// Topics in menu order.
    pub const ALL: [Topic; 5] = [
        Topic::Budgeting,
        Topic::Investing,
        Topic::CreditScore,
        Topic::Saving,
        Topic::Spending,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Topic::Budgeting => "Budgeting",
            Topic::Investing => "Investing",
            Topic::CreditScore => "Credit Score",
            Topic::Saving => "Saving",
            Topic::Spending => "Spending",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    /// Accepts the display name in any case; spaces, dashes and underscores
    /// are interchangeable ("credit-score", "Credit Score", "creditscore").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.name().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| TopicError::Unknown(s.trim().to_string()))
    }
}
