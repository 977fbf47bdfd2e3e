use std::fmt;
use std::time::Duration;

use finance_core::model::{QuizSettings, QuizSettingsDraft, QuizSettingsError, Topic, TopicError};

pub const ENV_DELAY_MS: &str = "FINLIT_ADVANCE_DELAY_MS";
pub const ENV_RESHUFFLE: &str = "FINLIT_RESHUFFLE_ON_RESET";

#[derive(Debug)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    MissingTopic { command: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDelay { raw: String },
    InvalidBool { name: &'static str, raw: String },
    Topic(TopicError),
    Settings(QuizSettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingTopic { command } => write!(f, "{command} requires a topic"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid delay in milliseconds: {raw}"),
            ArgsError::InvalidBool { name, raw } => write!(f, "invalid {name} value: {raw}"),
            ArgsError::Topic(err) => write!(f, "{err}"),
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Topics,
    Quiz(Topic),
    Tutorial(Topic),
    Story(Topic),
    Expenses,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub settings: QuizSettings,
    pub verbose: bool,
}

/// Parse command-line arguments on top of environment defaults.
///
/// `env` is looked up by variable name so tests need not touch the process
/// environment.
pub fn parse_args(
    args: impl IntoIterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Args, ArgsError> {
    let mut draft = QuizSettingsDraft::new();
    if let Some(raw) = env(ENV_DELAY_MS) {
        draft.auto_advance_delay = Some(parse_delay(&raw)?);
    }
    if let Some(raw) = env(ENV_RESHUFFLE) {
        draft.reshuffle_on_reset = Some(parse_bool(ENV_RESHUFFLE, &raw)?);
    }

    let mut command = None;
    let mut verbose = false;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--delay-ms" => {
                let value = args.next().ok_or(ArgsError::MissingValue { flag: "--delay-ms" })?;
                draft.auto_advance_delay = Some(parse_delay(&value)?);
            }
            "--reshuffle" => draft.reshuffle_on_reset = Some(true),
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => command = Some(Command::Help),
            flag if flag.starts_with('-') => return Err(ArgsError::UnknownArg(arg)),
            _ if command.is_some() => return Err(ArgsError::UnknownArg(arg)),
            "topics" => command = Some(Command::Topics),
            "expenses" => command = Some(Command::Expenses),
            "quiz" => command = Some(Command::Quiz(parse_topic(&mut args, "quiz")?)),
            "tutorial" => command = Some(Command::Tutorial(parse_topic(&mut args, "tutorial")?)),
            "story" => command = Some(Command::Story(parse_topic(&mut args, "story")?)),
            _ => return Err(ArgsError::UnknownCommand(arg)),
        }
    }

    Ok(Args {
        command: command.unwrap_or(Command::Topics),
        settings: draft.validate().map_err(ArgsError::Settings)?,
        verbose,
    })
}

fn parse_topic(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
) -> Result<Topic, ArgsError> {
    let raw = args.next().ok_or(ArgsError::MissingTopic { command })?;
    raw.parse().map_err(ArgsError::Topic)
}

fn parse_delay(raw: &str) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidDelay {
            raw: raw.to_string(),
        })
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ArgsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ArgsError::InvalidBool {
            name,
            raw: raw.to_string(),
        }),
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [options] topics");
    eprintln!("  app [options] tutorial <topic>");
    eprintln!("  app [options] story <topic>");
    eprintln!("  app [options] quiz <topic>");
    eprintln!("  app [options] expenses");
    eprintln!();
    eprintln!("Topics: budgeting, investing, credit-score, saving, spending");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --delay-ms <ms>   pause after a correct answer (default: 1000)");
    eprintln!("  --reshuffle       reshuffle questions on retake");
    eprintln!("  -v, --verbose     debug logging");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_DELAY_MS}, {ENV_RESHUFFLE}, RUST_LOG");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_to_topics_listing() {
        let parsed = parse_args(args(&[]), no_env).unwrap();
        assert_eq!(parsed.command, Command::Topics);
        assert_eq!(parsed.settings, QuizSettings::default());
        assert!(!parsed.verbose);
    }

    #[test]
    fn quiz_with_flags() {
        let parsed = parse_args(
            args(&["--delay-ms", "250", "quiz", "credit-score", "--reshuffle", "-v"]),
            no_env,
        )
        .unwrap();
        assert_eq!(parsed.command, Command::Quiz(Topic::CreditScore));
        assert_eq!(parsed.settings.auto_advance_delay(), Duration::from_millis(250));
        assert!(parsed.settings.reshuffle_on_reset());
        assert!(parsed.verbose);
    }

    #[test]
    fn story_takes_a_topic() {
        let parsed = parse_args(args(&["story", "saving"]), no_env).unwrap();
        assert_eq!(parsed.command, Command::Story(Topic::Saving));
        assert!(matches!(
            parse_args(args(&["story"]), no_env),
            Err(ArgsError::MissingTopic { command: "story" })
        ));
    }

    #[test]
    fn env_values_are_overridden_by_flags() {
        let env = |name: &str| match name {
            ENV_DELAY_MS => Some("5000".to_string()),
            ENV_RESHUFFLE => Some("yes".to_string()),
            _ => None,
        };
        let parsed = parse_args(args(&["--delay-ms", "10", "expenses"]), env).unwrap();
        assert_eq!(parsed.command, Command::Expenses);
        assert_eq!(parsed.settings.auto_advance_delay(), Duration::from_millis(10));
        assert!(parsed.settings.reshuffle_on_reset());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_args(args(&["quiz"]), no_env),
            Err(ArgsError::MissingTopic { command: "quiz" })
        ));
        assert!(matches!(
            parse_args(args(&["quiz", "crypto"]), no_env),
            Err(ArgsError::Topic(_))
        ));
        assert!(matches!(
            parse_args(args(&["--delay-ms", "soon"]), no_env),
            Err(ArgsError::InvalidDelay { .. })
        ));
        assert!(matches!(
            parse_args(args(&["--delay-ms", "60000", "topics"]), no_env),
            Err(ArgsError::Settings(_))
        ));
        assert!(matches!(
            parse_args(args(&["dance"]), no_env),
            Err(ArgsError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse_args(args(&["topics", "extra"]), no_env),
            Err(ArgsError::UnknownArg(_))
        ));
    }
}
