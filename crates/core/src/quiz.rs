//! Quiz session state machine.
//!
//! A session walks an ordered list of questions. A correct answer schedules an
//! automatic advance: the session hands out a [`PendingAdvance`] and the caller
//! fires [`QuizSession::complete_pending_advance`] once the delay has elapsed.
//! The session itself never sleeps. A wrong answer keeps the session on the
//! same question until [`QuizSession::advance`] is called.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::{Question, QuizSettings, Topic};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("choice {index} is out of range for a question with {len} choices")]
    InvalidChoiceIndex { index: usize, len: usize },

    #[error("no questions available for quiz")]
    Empty,

    #[error("quiz already completed")]
    Completed,

    #[error("current question has not been answered yet")]
    Unanswered,

    #[error("quiz is not complete yet")]
    NotComplete,
}

//
// ─── STATE & OUTCOMES ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Showing the question at this zero-based index.
    Active(usize),
    Complete,
}

/// Identifies one scheduled auto-advance. Only the most recently issued ticket
/// of a session is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket(u64);

/// Auto-advance the caller should schedule after a correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub ticket: AdvanceTicket,
    pub delay: Duration,
}

/// Result of selecting a choice on the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct {
        choice: usize,
        pending: PendingAdvance,
    },
    Incorrect {
        choice: usize,
        correct_choice: usize,
        correct_text: String,
        explanation: String,
    },
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }

    #[must_use]
    pub fn pending_advance(&self) -> Option<PendingAdvance> {
        match self {
            AnswerOutcome::Correct { pending, .. } => Some(*pending),
            AnswerOutcome::Incorrect { .. } => None,
        }
    }
}

/// Feedback for the current question, cleared on advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub selected: usize,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// One-based position of the current question, `total` once complete.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}

/// A question the learner got wrong, as listed on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedQuestion {
    /// One-based position in session order.
    pub position: usize,
    pub question: String,
    pub chosen: String,
    pub correct: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub topic: Option<Topic>,
    pub total: usize,
    pub correct: usize,
    pub score_percent: u32,
    pub missed: Vec<MissedQuestion>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

pub struct QuizSession {
    topic: Option<Topic>,
    settings: QuizSettings,
    questions: Vec<Question>,
    current: usize,
    correct_count: usize,
    feedback: Option<Feedback>,
    pending: Option<AdvanceTicket>,
    next_ticket: u64,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session that keeps the given question order.
    ///
    /// Any answers already recorded on `questions` are cleared.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(
        mut questions: Vec<Question>,
        settings: QuizSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        questions.iter_mut().for_each(Question::clear_user_answer);

        Ok(Self {
            topic: None,
            settings,
            questions,
            current: 0,
            correct_count: 0,
            feedback: None,
            pending: None,
            next_ticket: 0,
            started_at,
            completed_at: None,
        })
    }

    /// Create a session with the questions in uniformly random order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn shuffled(
        questions: Vec<Question>,
        settings: QuizSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        Self::shuffled_with_rng(questions, settings, &mut rand::rng(), started_at)
    }

    /// Like [`QuizSession::shuffled`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn shuffled_with_rng<R: Rng + ?Sized>(
        mut questions: Vec<Question>,
        settings: QuizSettings,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        questions.shuffle(rng);
        Self::new(questions, settings, started_at)
    }

    #[must_use]
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    #[must_use]
    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.is_complete() {
            QuizState::Complete
        } else {
            QuizState::Active(self.current)
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current == self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// The live auto-advance ticket, if a correct answer is waiting to move on.
    #[must_use]
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.pending
    }

    /// True once the current question has an answer and can be left.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .is_some_and(|question| question.user_answer().is_some())
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        QuizProgress {
            position: (self.current + 1).min(total),
            total,
            answered: self
                .questions
                .iter()
                .filter(|question| question.user_answer().is_some())
                .count(),
            is_complete: self.is_complete(),
        }
    }

    /// Record `choice` for the current question.
    ///
    /// Selecting again on the same question overwrites the earlier answer; a
    /// question contributes at most one point to the score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` when the session is finished and
    /// `QuizError::InvalidChoiceIndex` when `choice` does not index into the
    /// current question's choices. Neither case modifies the session.
    pub fn select_answer(&mut self, choice: usize) -> Result<AnswerOutcome, QuizError> {
        let delay = self.settings.auto_advance_delay();
        let Some(question) = self.questions.get_mut(self.current) else {
            return Err(QuizError::Completed);
        };
        let len = question.choices().len();
        if choice >= len {
            return Err(QuizError::InvalidChoiceIndex { index: choice, len });
        }

        let was_correct = question
            .user_answer()
            .is_some_and(|answer| question.is_correct(answer));
        let is_correct = question.is_correct(choice);
        question.set_user_answer(choice);

        match (was_correct, is_correct) {
            (false, true) => self.correct_count += 1,
            (true, false) => self.correct_count -= 1,
            _ => {}
        }
        self.feedback = Some(Feedback {
            selected: choice,
            correct: is_correct,
        });

        if is_correct {
            let ticket = self.issue_ticket();
            Ok(AnswerOutcome::Correct {
                choice,
                pending: PendingAdvance { ticket, delay },
            })
        } else {
            self.pending = None;
            Ok(AnswerOutcome::Incorrect {
                choice,
                correct_choice: question.correct_answer(),
                correct_text: question.correct_choice().to_string(),
                explanation: question.explanation().to_string(),
            })
        }
    }

    /// Move to the next question, or to `Complete` after the last one.
    ///
    /// Cancels any pending auto-advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` if the session is finished and
    /// `QuizError::Unanswered` if the current question has no answer yet.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<QuizState, QuizError> {
        if self.is_complete() {
            return Err(QuizError::Completed);
        }
        if !self.can_advance() {
            return Err(QuizError::Unanswered);
        }
        self.step(now);
        Ok(self.state())
    }

    /// Fire a scheduled auto-advance.
    ///
    /// Returns `false` without touching the session when `ticket` is no longer
    /// live (the session was reset, advanced manually, or re-answered).
    pub fn complete_pending_advance(&mut self, ticket: AdvanceTicket, now: DateTime<Utc>) -> bool {
        if self.pending != Some(ticket) || self.is_complete() {
            return false;
        }
        self.step(now);
        true
    }

    /// Restart from the first question with a zero score.
    ///
    /// Reshuffles with the thread RNG when the session settings ask for it.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.reset_with_rng(&mut rand::rng(), now);
    }

    /// Like [`QuizSession::reset`] with a caller-supplied RNG.
    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R, now: DateTime<Utc>) {
        self.questions
            .iter_mut()
            .for_each(Question::clear_user_answer);
        if self.settings.reshuffle_on_reset() {
            self.questions.shuffle(rng);
        }
        self.current = 0;
        self.correct_count = 0;
        self.feedback = None;
        self.pending = None;
        self.started_at = now;
        self.completed_at = None;
    }

    /// Percentage score rounded to the nearest integer, once complete.
    #[must_use]
    pub fn score_percent(&self) -> Option<u32> {
        self.is_complete()
            .then(|| score_percent(self.correct_count, self.questions.len()))
    }

    /// Summary for the results screen.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotComplete` while questions remain.
    pub fn results(&self) -> Result<QuizResults, QuizError> {
        let completed_at = self.completed_at.ok_or(QuizError::NotComplete)?;
        let missed = self
            .questions
            .iter()
            .enumerate()
            .filter(|(_, question)| question.is_answered_wrong())
            .filter_map(|(idx, question)| {
                let chosen = question.user_answer().and_then(|a| question.choice(a))?;
                Some(MissedQuestion {
                    position: idx + 1,
                    question: question.text().to_string(),
                    chosen: chosen.to_string(),
                    correct: question.correct_choice().to_string(),
                    explanation: question.explanation().to_string(),
                })
            })
            .collect();

        Ok(QuizResults {
            topic: self.topic,
            total: self.questions.len(),
            correct: self.correct_count,
            score_percent: score_percent(self.correct_count, self.questions.len()),
            missed,
            started_at: self.started_at,
            completed_at,
        })
    }

    fn issue_ticket(&mut self) -> AdvanceTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = AdvanceTicket(self.next_ticket);
        self.pending = Some(ticket);
        ticket
    }

    fn step(&mut self, now: DateTime<Utc>) {
        self.pending = None;
        self.feedback = None;
        self.current += 1;
        if self.is_complete() {
            self.completed_at = Some(now);
        }
    }
}

fn score_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * correct + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("topic", &self.topic)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("correct_count", &self.correct_count)
            .field("pending", &self.pending)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: usize, correct: usize) -> Question {
        Question::new(
            format!("Q{id}"),
            ["a", "b", "c", "d"],
            correct,
            format!("E{id}"),
        )
        .unwrap()
    }

    fn session(correct: &[usize]) -> QuizSession {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(id, &c)| question(id, c))
            .collect();
        QuizSession::new(questions, QuizSettings::default(), fixed_now()).unwrap()
    }

    fn assert_index_invariant(s: &QuizSession) {
        assert!(s.current_index() <= s.total());
    }

    #[test]
    fn empty_session_is_rejected() {
        let err = QuizSession::new(Vec::new(), QuizSettings::default(), fixed_now()).unwrap_err();
        assert_eq!(err, QuizError::Empty);
    }

    #[test]
    fn all_correct_reaches_complete_with_full_score() {
        let mut s = session(&[1, 0, 2]);
        for choice in [1, 0, 2] {
            let outcome = s.select_answer(choice).unwrap();
            let pending = outcome.pending_advance().unwrap();
            assert_eq!(pending.delay, Duration::from_secs(1));
            assert!(s.complete_pending_advance(pending.ticket, fixed_now()));
            assert_index_invariant(&s);
        }

        assert_eq!(s.correct_count(), 3);
        assert_eq!(s.state(), QuizState::Complete);
        assert_eq!(s.score_percent(), Some(100));
        assert!(s.results().unwrap().missed.is_empty());
    }

    #[test]
    fn out_of_range_choice_leaves_state_unchanged() {
        let mut s = session(&[1, 0]);
        let err = s.select_answer(4).unwrap_err();
        assert_eq!(err, QuizError::InvalidChoiceIndex { index: 4, len: 4 });
        assert_eq!(s.state(), QuizState::Active(0));
        assert_eq!(s.correct_count(), 0);
        assert_eq!(s.current_question().unwrap().user_answer(), None);
        assert_eq!(s.feedback(), None);
    }

    #[test]
    fn wrong_answer_requires_explicit_advance() {
        let mut s = session(&[1, 0]);
        let outcome = s.select_answer(3).unwrap();
        match outcome {
            AnswerOutcome::Incorrect {
                choice,
                correct_choice,
                correct_text,
                explanation,
            } => {
                assert_eq!(choice, 3);
                assert_eq!(correct_choice, 1);
                assert_eq!(correct_text, "b");
                assert_eq!(explanation, "E0");
            }
            AnswerOutcome::Correct { .. } => panic!("expected incorrect outcome"),
        }
        assert_eq!(s.correct_count(), 0);
        assert_eq!(s.pending_advance(), None);
        assert_eq!(s.state(), QuizState::Active(0));
        assert!(s.can_advance());

        assert_eq!(s.advance(fixed_now()).unwrap(), QuizState::Active(1));
        assert_eq!(s.feedback(), None);
    }

    #[test]
    fn advance_before_answering_is_rejected() {
        let mut s = session(&[1]);
        assert_eq!(s.advance(fixed_now()).unwrap_err(), QuizError::Unanswered);
    }

    #[test]
    fn advancing_past_last_question_completes() {
        let mut s = session(&[1]);
        s.select_answer(0).unwrap();
        assert_eq!(s.advance(fixed_now()).unwrap(), QuizState::Complete);
        assert_eq!(s.completed_at(), Some(fixed_now()));
        assert_eq!(s.advance(fixed_now()).unwrap_err(), QuizError::Completed);
        assert_eq!(s.select_answer(0).unwrap_err(), QuizError::Completed);
        assert_index_invariant(&s);
    }

    #[test]
    fn reselection_overwrites_without_double_counting() {
        let mut s = session(&[2, 0]);
        s.select_answer(0).unwrap();
        let first = s.select_answer(2).unwrap().pending_advance().unwrap();
        let second = s.select_answer(2).unwrap().pending_advance().unwrap();
        assert_eq!(s.correct_count(), 1);
        assert_ne!(first.ticket, second.ticket);
        assert!(!s.complete_pending_advance(first.ticket, fixed_now()));

        s.select_answer(1).unwrap();
        assert_eq!(s.correct_count(), 0);
        assert_eq!(s.current_question().unwrap().user_answer(), Some(1));
        assert!(!s.complete_pending_advance(second.ticket, fixed_now()));
        assert_eq!(s.state(), QuizState::Active(0));
    }

    #[test]
    fn manual_advance_invalidates_pending_ticket() {
        let mut s = session(&[0, 0, 0]);
        let pending = s.select_answer(0).unwrap().pending_advance().unwrap();
        s.advance(fixed_now()).unwrap();
        assert!(!s.complete_pending_advance(pending.ticket, fixed_now()));
        assert_eq!(s.state(), QuizState::Active(1));
    }

    #[test]
    fn reset_clears_answers_and_ignores_stale_tickets() {
        let mut s = session(&[1, 0, 2]);
        s.select_answer(0).unwrap();
        s.advance(fixed_now()).unwrap();
        let pending = s.select_answer(0).unwrap().pending_advance().unwrap();

        let later = fixed_now() + chrono::Duration::minutes(5);
        s.reset(later);

        assert_eq!(s.state(), QuizState::Active(0));
        assert_eq!(s.correct_count(), 0);
        assert!(s.questions().iter().all(|q| q.user_answer().is_none()));
        assert_eq!(s.started_at(), later);
        assert!(!s.complete_pending_advance(pending.ticket, later));
        assert_eq!(s.state(), QuizState::Active(0));
    }

    #[test]
    fn reset_keeps_order_unless_configured() {
        let questions: Vec<_> = (0..8).map(|id| question(id, 0)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = QuizSession::shuffled_with_rng(
            questions.clone(),
            QuizSettings::default(),
            &mut rng,
            fixed_now(),
        )
        .unwrap();
        let order: Vec<_> = s.questions().iter().map(|q| q.text().to_string()).collect();
        s.reset_with_rng(&mut rng, fixed_now());
        let after: Vec<_> = s.questions().iter().map(|q| q.text().to_string()).collect();
        assert_eq!(order, after);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let questions: Vec<_> = (0..8).map(|id| question(id, 0)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let s = QuizSession::shuffled_with_rng(
            questions,
            QuizSettings::default(),
            &mut rng,
            fixed_now(),
        )
        .unwrap();
        let mut texts: Vec<_> = s.questions().iter().map(|q| q.text().to_string()).collect();
        texts.sort();
        let expected: Vec<_> = (0..8).map(|id| format!("Q{id}")).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn results_list_missed_questions_in_session_order() {
        let mut s = session(&[1, 0, 2, 3]);
        s.select_answer(1).unwrap();
        s.advance(fixed_now()).unwrap();
        s.select_answer(3).unwrap();
        s.advance(fixed_now()).unwrap();
        s.select_answer(2).unwrap();
        s.advance(fixed_now()).unwrap();
        assert_eq!(s.results().unwrap_err(), QuizError::NotComplete);
        s.select_answer(0).unwrap();
        s.advance(fixed_now()).unwrap();

        let results = s.results().unwrap();
        assert_eq!(results.correct, 2);
        assert_eq!(results.score_percent, 50);
        assert_eq!(results.missed.len(), 2);
        assert_eq!(results.missed[0].position, 2);
        assert_eq!(results.missed[0].chosen, "d");
        assert_eq!(results.missed[0].correct, "a");
        assert_eq!(results.missed[0].explanation, "E1");
        assert_eq!(results.missed[1].position, 4);
    }

    #[test]
    fn score_rounds_to_nearest_integer() {
        assert_eq!(score_percent(1, 3), 33);
        assert_eq!(score_percent(2, 3), 67);
        assert_eq!(score_percent(5, 8), 63);
        assert_eq!(score_percent(0, 8), 0);
    }

    #[test]
    fn progress_reports_position_and_answers() {
        let mut s = session(&[0, 0]);
        assert_eq!(
            s.progress(),
            QuizProgress {
                position: 1,
                total: 2,
                answered: 0,
                is_complete: false
            }
        );
        s.select_answer(1).unwrap();
        s.advance(fixed_now()).unwrap();
        let progress = s.progress();
        assert_eq!(progress.position, 2);
        assert_eq!(progress.answered, 1);
    }
}
