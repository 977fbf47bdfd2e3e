use std::sync::Arc;

use rand::Rng;
use tracing::info;

use finance_core::model::{QuizSettings, Topic};
use finance_core::{Clock, ContentProvider, QuizSession, StaticContent};

use crate::error::QuizServiceError;
use crate::expense_service::ExpenseService;
use crate::quiz::QuizRunner;
use crate::stories::StoryService;
use crate::tutorials::TutorialService;

/// Assembles app-facing services around one content provider and settings.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    settings: QuizSettings,
    content: Arc<dyn ContentProvider>,
}

impl AppServices {
    #[must_use]
    pub fn new(content: Arc<dyn ContentProvider>, settings: QuizSettings, clock: Clock) -> Self {
        Self {
            clock,
            settings,
            content,
        }
    }

    /// Services backed by the built-in tutorial and quiz content.
    #[must_use]
    pub fn with_static_content(settings: QuizSettings, clock: Clock) -> Self {
        Self::new(Arc::new(StaticContent::new()), settings, clock)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn topics(&self) -> &'static [Topic] {
        &Topic::ALL
    }

    /// Start a quiz over `topic`'s bank in random order.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Content` for a malformed bank and
    /// `QuizServiceError::Quiz` for an empty one.
    pub fn start_quiz(&self, topic: Topic) -> Result<QuizRunner, QuizServiceError> {
        self.start_quiz_with_rng(topic, &mut rand::rng())
    }

    /// Like [`AppServices::start_quiz`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// See [`AppServices::start_quiz`].
    pub fn start_quiz_with_rng<R: Rng + ?Sized>(
        &self,
        topic: Topic,
        rng: &mut R,
    ) -> Result<QuizRunner, QuizServiceError> {
        let questions = self.content.question_bank(topic)?;
        let session =
            QuizSession::shuffled_with_rng(questions, self.settings, rng, self.clock.now())?
                .with_topic(topic);
        info!(%topic, questions = session.total(), "quiz started");
        Ok(QuizRunner::new(session, self.clock))
    }

    #[must_use]
    pub fn expense_tracker(&self) -> ExpenseService {
        ExpenseService::new(self.clock)
    }

    #[must_use]
    pub fn tutorials(&self) -> TutorialService {
        TutorialService::new(Arc::clone(&self.content))
    }

    #[must_use]
    pub fn stories(&self) -> StoryService {
        StoryService::new(Arc::clone(&self.content))
    }
}
