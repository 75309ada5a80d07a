use anyhow::{Context, Result};
use clap::Parser;
use hangman::cli::Cli;
use hangman::core::input;
use hangman::games::hangman::HangmanGame;
use hangman::{Engine, TerminalContext};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    input::exit_on_interrupt().context("failed to install Ctrl+C handler")?;

    let engine = Engine::new(
        HangmanGame::default(),
        input::stdin_source(),
        TerminalContext::stdout(),
        cli.rng(),
    );

    // End of input and a raw-mode Ctrl+C both land here as a normal session end.
    let (session, _) = engine.run().context("terminal I/O failed")?;
    let wins = session.rounds.iter().filter(|r| r.won).count();
    info!(rounds = session.rounds.len(), wins, end = ?session.end, "bye");
    Ok(())
}
