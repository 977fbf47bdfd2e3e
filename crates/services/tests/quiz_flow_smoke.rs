use std::time::Duration;

use finance_core::model::{QuizSettingsDraft, Topic};
use finance_core::time::fixed_clock;
use finance_core::{AnswerOutcome, QuizState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::AppServices;

#[test_log::test(tokio::test(start_paused = true))]
async fn full_quiz_with_mixed_answers() {
    let settings = QuizSettingsDraft {
        auto_advance_delay: Some(Duration::from_millis(500)),
        ..QuizSettingsDraft::default()
    }
    .validate()
    .unwrap();
    let services = AppServices::with_static_content(settings, fixed_clock());
    let mut rng = StdRng::seed_from_u64(2024);
    let mut runner = services.start_quiz_with_rng(Topic::Budgeting, &mut rng).unwrap();

    // Answer even positions correctly, odd positions wrong.
    let mut position = 0;
    while !runner.is_complete() {
        let correct = runner.with_session(|s| s.current_question().unwrap().correct_answer());
        if position % 2 == 0 {
            let outcome = runner.select_answer(correct).unwrap();
            assert!(matches!(outcome, AnswerOutcome::Correct { .. }));
            runner.settle().await;
        } else {
            let wrong = (correct + 1) % 4;
            runner.select_answer(wrong).unwrap();
            runner.advance().unwrap();
        }
        position += 1;
    }

    assert_eq!(runner.state(), QuizState::Complete);
    let results = runner.results().unwrap();
    assert_eq!(results.total, 8);
    assert_eq!(results.correct, 4);
    assert_eq!(results.score_percent, 50);
    assert_eq!(results.topic, Some(Topic::Budgeting));
    let positions: Vec<_> = results.missed.iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![2, 4, 6, 8]);

    runner.reset();
    assert_eq!(runner.state(), QuizState::Active(0));
    runner.with_session(|s| assert_eq!(s.correct_count(), 0));
}

#[test_log::test(tokio::test)]
async fn expense_breakdown_example() {
    let services = AppServices::with_static_content(Default::default(), fixed_clock());
    let mut expenses = services.expense_tracker();
    expenses.add(25.0, "Food").unwrap();
    expenses.add(75.0, "Food").unwrap();
    expenses.add(50.0, "Transportation").unwrap();

    let breakdown = expenses.breakdown();
    let names: Vec<_> = breakdown.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["Food", "Transportation"]);
    assert!((breakdown[0].share - 2.0 / 3.0).abs() < 1e-9);
    assert!((breakdown[1].share - 1.0 / 3.0).abs() < 1e-9);

    assert!(expenses.add(-5.0, "Food").is_err());
    assert_eq!(expenses.expenses().len(), 3);
}
