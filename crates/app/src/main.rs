mod config;
mod log;
mod terminal;
mod vm;

use services::{AppServices, Clock};
use tracing::info;

use crate::config::{Command, parse_args, print_usage};
use crate::terminal::Screens;

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(std::env::args().skip(1), |name| std::env::var(name).ok()).map_err(
        |e| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;

    log::init_logging(args.verbose);
    info!(command = ?args.command, settings = ?args.settings, "starting");

    let services = AppServices::with_static_content(args.settings, Clock::system());
    let mut screens = Screens::new(services);
    let mut terminal = terminal::stdio();

    match args.command {
        Command::Help => print_usage(),
        Command::Topics => terminal.topics(&screens.tutorials)?,
        Command::Tutorial(topic) => terminal.tutorial(&mut screens.tutorials, topic).await?,
        Command::Story(topic) => terminal.story(&mut screens.stories, topic).await?,
        Command::Quiz(topic) => {
            let mut runner = screens.services.start_quiz(topic)?;
            terminal.quiz(&mut runner).await?;
        }
        Command::Expenses => terminal.expenses(&mut screens.expenses).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
