use std::time::Duration;

use thiserror::Error;

/// Delay between a correct answer and the automatic move to the next question.
pub const DEFAULT_AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(1);

/// Longest accepted auto-advance delay.
pub const MAX_AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("auto-advance delay {0:?} exceeds the maximum of 30s")]
    DelayTooLong(Duration),
}

/// Behavior knobs for quiz sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    auto_advance_delay: Duration,
    reshuffle_on_reset: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuizSettingsDraft {
    pub auto_advance_delay: Option<Duration>,
    pub reshuffle_on_reset: Option<bool>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset values with defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError::DelayTooLong` if the delay exceeds
    /// [`MAX_AUTO_ADVANCE_DELAY`].
    pub fn validate(self) -> Result<QuizSettings, QuizSettingsError> {
        let auto_advance_delay = self
            .auto_advance_delay
            .unwrap_or(DEFAULT_AUTO_ADVANCE_DELAY);
        if auto_advance_delay > MAX_AUTO_ADVANCE_DELAY {
            return Err(QuizSettingsError::DelayTooLong(auto_advance_delay));
        }

        Ok(QuizSettings {
            auto_advance_delay,
            reshuffle_on_reset: self.reshuffle_on_reset.unwrap_or(false),
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn auto_advance_delay(&self) -> Duration {
        self.auto_advance_delay
    }

    #[must_use]
    pub fn reshuffle_on_reset(&self) -> bool {
        self.reshuffle_on_reset
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            auto_advance_delay: DEFAULT_AUTO_ADVANCE_DELAY,
            reshuffle_on_reset: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_yields_defaults() {
        let settings = QuizSettingsDraft::new().validate().unwrap();
        assert_eq!(settings, QuizSettings::default());
        assert_eq!(settings.auto_advance_delay(), Duration::from_secs(1));
        assert!(!settings.reshuffle_on_reset());
    }

    #[test]
    fn zero_delay_is_allowed() {
        let settings = QuizSettingsDraft {
            auto_advance_delay: Some(Duration::ZERO),
            reshuffle_on_reset: Some(true),
        }
        .validate()
        .unwrap();
        assert_eq!(settings.auto_advance_delay(), Duration::ZERO);
        assert!(settings.reshuffle_on_reset());
    }

    #[test]
    fn overlong_delay_is_rejected() {
        let err = QuizSettingsDraft {
            auto_advance_delay: Some(Duration::from_secs(60)),
            ..QuizSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, QuizSettingsError::DelayTooLong(Duration::from_secs(60)));
    }
}
