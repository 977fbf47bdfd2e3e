use finance_core::model::Question;
use finance_core::{AnswerOutcome, MissedQuestion, QuizProgress, QuizResults};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub header: String,
    pub text: String,
    pub choices: Vec<String>,
}

#[must_use]
pub fn map_question(progress: QuizProgress, question: &Question) -> QuestionVm {
    QuestionVm {
        header: format!("Question {} out of {}", progress.position, progress.total),
        text: question.text().to_string(),
        choices: question
            .choices()
            .iter()
            .enumerate()
            .map(|(idx, choice)| format!("{}. {choice}", idx + 1))
            .collect(),
    }
}

#[must_use]
pub fn feedback_message(outcome: &AnswerOutcome) -> String {
    match outcome {
        AnswerOutcome::Correct { .. } => "Correct!".to_string(),
        AnswerOutcome::Incorrect {
            correct_text,
            explanation,
            ..
        } => format!("Wrong! Correct answer: {correct_text}\n\nExplanation: {explanation}"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissedQuestionVm {
    pub heading: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

impl From<&MissedQuestion> for MissedQuestionVm {
    fn from(missed: &MissedQuestion) -> Self {
        Self {
            heading: format!("Question {}: {}", missed.position, missed.question),
            your_answer: format!("Your answer: {}", missed.chosen),
            correct_answer: format!("Correct answer: {}", missed.correct),
            explanation: format!("Explanation: {}", missed.explanation),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultsVm {
    pub title: String,
    pub summary: String,
    pub score: String,
    pub missed: Vec<MissedQuestionVm>,
}

impl From<&QuizResults> for QuizResultsVm {
    fn from(results: &QuizResults) -> Self {
        Self {
            title: "Quiz Completed!".to_string(),
            summary: format!(
                "You got {} out of {} right.",
                results.correct, results.total
            ),
            score: format!("Your score: {}%", results.score_percent),
            missed: results.missed.iter().map(MissedQuestionVm::from).collect(),
        }
    }
}
