use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use finance_core::{
    AnswerOutcome, Clock, PendingAdvance, QuizProgress, QuizResults, QuizSession, QuizState,
};

use crate::error::QuizServiceError;

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// Drives a `QuizSession` for the presentation layer and owns its auto-advance.
///
/// After a correct answer the runner spawns a Tokio task that waits for the
/// configured delay and then fires the session's pending advance. `advance`,
/// `reset` and dropping the runner abort that task; a task that wakes up late
/// still cannot move the session because its ticket is no longer live.
///
/// Methods that schedule work must be called from within a Tokio runtime.
pub struct QuizRunner {
    clock: Clock,
    session: Arc<Mutex<QuizSession>>,
    scheduled: Option<JoinHandle<()>>,
}

impl QuizRunner {
    #[must_use]
    pub fn new(session: QuizSession, clock: Clock) -> Self {
        Self {
            clock,
            session: Arc::new(Mutex::new(session)),
            scheduled: None,
        }
    }

    /// Run `f` against the current session state.
    pub fn with_session<T>(&self, f: impl FnOnce(&QuizSession) -> T) -> T {
        f(&*lock(&self.session))
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.with_session(QuizSession::state)
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.with_session(QuizSession::progress)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.with_session(QuizSession::is_complete)
    }

    /// True while an auto-advance is scheduled and has not fired yet.
    #[must_use]
    pub fn has_scheduled_advance(&self) -> bool {
        self.with_session(|session| session.pending_advance().is_some())
    }

    /// Select a choice on the current question, scheduling the auto-advance
    /// when it is correct.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` for an out-of-range choice or a
    /// finished session.
    pub fn select_answer(&mut self, choice: usize) -> Result<AnswerOutcome, QuizServiceError> {
        let outcome = lock(&self.session).select_answer(choice)?;
        self.cancel_scheduled();

        match outcome.pending_advance() {
            Some(pending) => {
                debug!(choice, delay = ?pending.delay, "correct answer");
                self.schedule(pending);
            }
            None => debug!(choice, "incorrect answer"),
        }
        Ok(outcome)
    }

    /// Move past the current question without waiting for the auto-advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the question is unanswered or the
    /// session is finished.
    pub fn advance(&mut self) -> Result<QuizState, QuizServiceError> {
        self.cancel_scheduled();
        let state = lock(&self.session).advance(self.clock.now())?;
        if state == QuizState::Complete {
            info!("quiz completed");
        }
        Ok(state)
    }

    /// Restart the quiz. Cancels any scheduled auto-advance.
    pub fn reset(&mut self) {
        self.cancel_scheduled();
        lock(&self.session).reset(self.clock.now());
        debug!("quiz reset");
    }

    /// Like [`QuizRunner::reset`] with a caller-supplied RNG for reshuffling.
    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cancel_scheduled();
        lock(&self.session).reset_with_rng(rng, self.clock.now());
    }

    /// Wait until a scheduled auto-advance has run. Returns immediately when
    /// nothing is scheduled.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.scheduled.take() {
            // A cancelled task reports a JoinError; nothing to do in that case.
            let _ = handle.await;
        }
    }

    /// Results for a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` while questions remain.
    pub fn results(&self) -> Result<QuizResults, QuizServiceError> {
        Ok(self.with_session(QuizSession::results)?)
    }

    fn schedule(&mut self, pending: PendingAdvance) {
        let session = Arc::downgrade(&self.session);
        let clock = self.clock;
        self.scheduled = Some(tokio::spawn(fire_after_delay(session, pending, clock)));
    }

    fn cancel_scheduled(&mut self) {
        if let Some(handle) = self.scheduled.take() {
            handle.abort();
        }
    }
}

impl Drop for QuizRunner {
    fn drop(&mut self) {
        self.cancel_scheduled();
    }
}

impl fmt::Debug for QuizRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizRunner")
            .field("clock", &self.clock)
            .field("session", &*lock(&self.session))
            .field("scheduled", &self.scheduled.is_some())
            .finish()
    }
}

async fn fire_after_delay(
    session: Weak<Mutex<QuizSession>>,
    pending: PendingAdvance,
    clock: Clock,
) {
    tokio::time::sleep(pending.delay).await;
    let Some(session) = session.upgrade() else {
        return;
    };
    let mut session = lock(&session);
    if session.complete_pending_advance(pending.ticket, clock.now()) {
        debug!(state = ?session.state(), "auto-advanced");
        if session.is_complete() {
            info!("quiz completed");
        }
    }
}

// The session holds no invariants that a panicking holder could break halfway,
// so a poisoned lock is still usable.
fn lock(session: &Mutex<QuizSession>) -> MutexGuard<'_, QuizSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
