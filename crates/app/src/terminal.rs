//! Line-oriented front end over the services.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use finance_core::AnswerOutcome;
use finance_core::model::{ExpenseCategory, Topic};
use services::{AppServices, ExpenseService, QuizRunner, StoryService, TutorialService};

use crate::vm::{
    QuizResultsVm, feedback_message, map_breakdown, map_expense_rows, map_question,
    map_story_line, map_topic_line, map_tutorial_page,
};

const CHART_WIDTH: usize = 30;

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next trimmed input line, `None` at end of input.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line().await
    }

    pub fn topics(&mut self, tutorials: &TutorialService) -> io::Result<()> {
        writeln!(self.output, "Courses")?;
        for topic in Topic::ALL {
            writeln!(self.output, "  {}", map_topic_line(topic, &tutorials.viewed_flags(topic)))?;
        }
        Ok(())
    }

    pub async fn tutorial(
        &mut self,
        tutorials: &mut TutorialService,
        topic: Topic,
    ) -> io::Result<()> {
        if tutorials.open(topic).is_none() {
            writeln!(self.output, "No sections available for {topic}.")?;
            return Ok(());
        }

        loop {
            let (Some(index), Some(section)) =
                (tutorials.current_index(), tutorials.current_section())
            else {
                break;
            };
            let page = map_tutorial_page(topic, index, section);
            writeln!(self.output, "\n{}\n{}\n\n{}\n", page.heading, page.title, page.content)?;

            let mut options = Vec::new();
            if tutorials.has_back() {
                options.push("[b]ack");
            }
            if tutorials.has_next() {
                options.push("[n]ext");
            }
            options.push("[q]uit");
            let Some(line) = self.prompt(&format!("{} > ", options.join(" "))).await? else {
                break;
            };
            match line.as_str() {
                "n" | "next" => {
                    tutorials.next();
                }
                "b" | "back" => {
                    tutorials.back();
                }
                "q" | "quit" => break,
                _ => writeln!(self.output, "Unknown command: {line}")?,
            }
        }

        tutorials.close();
        writeln!(self.output, "{}", map_topic_line(topic, &tutorials.viewed_flags(topic)))?;
        Ok(())
    }

    pub async fn story(&mut self, stories: &mut StoryService, topic: Topic) -> io::Result<()> {
        if stories.open(topic).is_none() {
            writeln!(self.output, "No story available for {topic}.")?;
            return Ok(());
        }

        loop {
            let (Some(index), Some(total), Some(line)) = (
                stories.current_index(),
                stories.line_count(),
                stories.current_line(),
            ) else {
                break;
            };
            let vm = map_story_line(topic, index, total, line, stories.voice_enabled());
            writeln!(
                self.output,
                "\n{}  [{}]\n{}: {}\n",
                vm.heading, vm.voice, vm.speaker, vm.text
            )?;

            let mut options = Vec::new();
            if stories.has_back() {
                options.push("[b]ack");
            }
            if stories.has_next() {
                options.push("[n]ext");
            }
            options.push("[v]oice");
            options.push("[q]uit");
            let Some(input) = self.prompt(&format!("{} > ", options.join(" "))).await? else {
                break;
            };
            match input.as_str() {
                "n" | "next" => {
                    stories.next();
                }
                "b" | "back" => {
                    stories.back();
                }
                "v" | "voice" => {
                    stories.toggle_voice();
                }
                "q" | "quit" => break,
                _ => writeln!(self.output, "Unknown command: {input}")?,
            }
        }

        stories.close();
        Ok(())
    }

    pub async fn quiz(&mut self, runner: &mut QuizRunner) -> io::Result<()> {
        loop {
            if runner.is_complete() {
                if !self.results(runner).await? {
                    return Ok(());
                }
                continue;
            }

            let view = runner.with_session(|session| {
                session
                    .current_question()
                    .map(|question| map_question(session.progress(), question))
            });
            let Some(view) = view else {
                return Ok(());
            };
            writeln!(self.output, "\n{}\n{}", view.header, view.text)?;
            for choice in &view.choices {
                writeln!(self.output, "  {choice}")?;
            }

            let Some(line) = self.prompt("Answer (number, q to quit) > ").await? else {
                return Ok(());
            };
            if line == "q" {
                return Ok(());
            }
            let Some(choice) = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                writeln!(self.output, "Enter the number of a choice.")?;
                continue;
            };

            match runner.select_answer(choice) {
                Ok(outcome @ AnswerOutcome::Correct { .. }) => {
                    writeln!(self.output, "{}", feedback_message(&outcome))?;
                    runner.settle().await;
                }
                Ok(outcome) => {
                    writeln!(self.output, "{}", feedback_message(&outcome))?;
                    if self.prompt("Press Enter for the next question > ").await?.is_none() {
                        return Ok(());
                    }
                    if let Err(err) = runner.advance() {
                        debug!(%err, "advance failed");
                    }
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Show results. Returns `true` when the user retakes the quiz.
    async fn results(&mut self, runner: &mut QuizRunner) -> io::Result<bool> {
        let results = match runner.results() {
            Ok(results) => results,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(false);
            }
        };
        let vm = QuizResultsVm::from(&results);
        writeln!(self.output, "\n{}\n{}\n{}", vm.title, vm.summary, vm.score)?;
        for missed in &vm.missed {
            writeln!(
                self.output,
                "\n{}\n  {}\n  {}\n  {}",
                missed.heading, missed.your_answer, missed.correct_answer, missed.explanation
            )?;
        }

        let Some(line) = self.prompt("\n[r]etake or [q]uit > ").await? else {
            return Ok(false);
        };
        if matches!(line.as_str(), "r" | "retake") {
            runner.reset();
            return Ok(true);
        }
        Ok(false)
    }

    pub async fn expenses(&mut self, expenses: &mut ExpenseService) -> io::Result<()> {
        let categories: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        writeln!(self.output, "Categories: {}", categories.join(", "))?;
        writeln!(self.output, "Commands: add <amount> <category>, list, clear, quit")?;

        loop {
            let Some(line) = self.prompt("expenses > ").await? else {
                return Ok(());
            };
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("add") => {
                    let amount = parts.next().map(str::parse::<f64>);
                    let category = parts.collect::<Vec<_>>().join(" ");
                    match amount {
                        Some(Ok(amount)) => match expenses.add(amount, &category) {
                            Ok(_) => self.chart(expenses)?,
                            Err(err) => writeln!(self.output, "{err}")?,
                        },
                        _ => writeln!(self.output, "Usage: add <amount> <category>")?,
                    }
                }
                Some("list") => {
                    for row in map_expense_rows(expenses.expenses()) {
                        writeln!(self.output, "  {row}")?;
                    }
                }
                Some("clear") => {
                    expenses.clear();
                    self.chart(expenses)?;
                }
                Some("quit" | "q") => return Ok(()),
                None => {}
                Some(other) => writeln!(self.output, "Unknown command: {other}")?,
            }
        }
    }

    fn chart(&mut self, expenses: &ExpenseService) -> io::Result<()> {
        let rows = map_breakdown(&expenses.breakdown(), CHART_WIDTH);
        if rows.is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
            return Ok(());
        }
        writeln!(self.output, "Expense Breakdown")?;
        for row in rows {
            writeln!(self.output, "  {:<14} {:<30} {}", row.label, row.bar, row.percent)?;
        }
        Ok(())
    }
}

/// Convenience for `main`: a terminal over stdin/stdout.
pub fn stdio() -> Terminal<tokio::io::BufReader<tokio::io::Stdin>, io::Stdout> {
    Terminal::new(tokio::io::BufReader::new(tokio::io::stdin()), io::stdout())
}

/// Services plus per-run state the terminal works against.
pub struct Screens {
    pub services: AppServices,
    pub tutorials: TutorialService,
    pub stories: StoryService,
    pub expenses: ExpenseService,
}

impl Screens {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        let tutorials = services.tutorials();
        let stories = services.stories();
        let expenses = services.expense_tracker();
        Self {
            services,
            tutorials,
            stories,
            expenses,
        }
    }
}
