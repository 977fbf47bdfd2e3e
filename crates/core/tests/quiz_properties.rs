use finance_core::model::{
    ExpenseCategory, ExpenseError, Question, QuizSettings, QuizSettingsDraft, Topic,
};
use finance_core::time::fixed_now;
use finance_core::{
    ContentProvider, ExpenseLedger, QuizError, QuizSession, QuizState, StaticContent,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn three_question_bank() -> Vec<Question> {
    [1, 0, 2]
        .into_iter()
        .enumerate()
        .map(|(id, correct)| {
            Question::new(format!("Q{id}"), ["w", "x", "y"], correct, "because").unwrap()
        })
        .collect()
}

#[test]
fn perfect_run_scores_one_hundred() {
    let mut session =
        QuizSession::new(three_question_bank(), QuizSettings::default(), fixed_now()).unwrap();
    for choice in [1, 0, 2] {
        let pending = session.select_answer(choice).unwrap().pending_advance().unwrap();
        session.complete_pending_advance(pending.ticket, fixed_now());
    }
    assert_eq!(session.correct_count(), 3);
    assert_eq!(session.state(), QuizState::Complete);
    assert_eq!(session.score_percent(), Some(100));
}

#[test]
fn random_walks_keep_index_in_bounds() {
    let settings = QuizSettingsDraft {
        reshuffle_on_reset: Some(true),
        ..QuizSettingsDraft::default()
    }
    .validate()
    .unwrap();
    let bank = StaticContent::new().question_bank(Topic::Investing).unwrap();

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session =
            QuizSession::shuffled_with_rng(bank.clone(), settings, &mut rng, fixed_now()).unwrap();
        let mut tickets = Vec::new();

        for _ in 0..200 {
            let before = session.correct_count();
            match rng.random_range(0..5) {
                0 | 1 => {
                    let choice = rng.random_range(0..6);
                    let index_before = session.current_index();
                    match session.select_answer(choice) {
                        Ok(outcome) => {
                            if let Some(pending) = outcome.pending_advance() {
                                tickets.push(pending.ticket);
                            }
                            assert!(session.correct_count().abs_diff(before) <= 1);
                        }
                        Err(QuizError::InvalidChoiceIndex { .. }) => {
                            assert_eq!(session.correct_count(), before);
                            assert_eq!(session.current_index(), index_before);
                        }
                        Err(err) => assert_eq!(err, QuizError::Completed),
                    }
                }
                2 => {
                    let _ = session.advance(fixed_now());
                }
                3 => {
                    if let Some(ticket) = tickets.pop() {
                        session.complete_pending_advance(ticket, fixed_now());
                    }
                }
                _ => {
                    if rng.random_bool(0.1) {
                        session.reset_with_rng(&mut rng, fixed_now());
                        assert_eq!(session.correct_count(), 0);
                        assert_eq!(session.current_index(), 0);
                        assert!(session.questions().iter().all(|q| q.user_answer().is_none()));
                    }
                }
            }
            assert!(session.current_index() <= session.total());
            assert!(session.correct_count() <= session.total());
        }
    }
}

#[test]
fn expense_examples() {
    let mut ledger = ExpenseLedger::new();
    ledger.add(25.0, "Food", fixed_now()).unwrap();
    ledger.add(75.0, "Food", fixed_now()).unwrap();
    ledger.add(50.0, "Transportation", fixed_now()).unwrap();

    let shares: Vec<_> = ledger
        .breakdown()
        .into_iter()
        .map(|s| (s.category, s.share))
        .collect();
    assert_eq!(shares[0].0, ExpenseCategory::Food);
    assert!((shares[0].1 - 0.666_666_666_666).abs() < 1e-9);
    assert_eq!(shares[1].0, ExpenseCategory::Transportation);
    assert!((shares[1].1 - 0.333_333_333_333).abs() < 1e-9);

    let err = ledger.add(-5.0, "Food", fixed_now()).unwrap_err();
    assert_eq!(err, ExpenseError::InvalidAmount(-5.0));
    assert_eq!(ledger.len(), 3);
}
