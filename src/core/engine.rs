use std::io::{self, Write};

use rand::Rng;
use tracing::{debug, info};

use crate::core::game::{ConsoleGame, RoundEnd};
use crate::core::input::{Abort, LineEvent, LineSource};
use crate::core::terminal::{TerminalColor, TerminalContext};

const REPLAY_PROMPT: &str = "Play again? (Y/N): ";

/// Why the session loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player answered anything but Y to the replay prompt
    Declined,
    Aborted(Abort),
}

/// Everything a session produced
#[derive(Debug)]
pub struct Session<S> {
    pub rounds: Vec<S>,
    pub end: SessionEnd,
}

/// Drives rounds of a game back to back until the player stops.
pub struct Engine<G, L, W, R>
where
    G: ConsoleGame,
    L: LineSource,
    W: Write,
    R: Rng,
{
    game: G,
    input: L,
    ctx: TerminalContext<W>,
    rng: R,
}

impl<G, L, W, R> Engine<G, L, W, R>
where
    G: ConsoleGame,
    L: LineSource,
    W: Write,
    R: Rng,
{
    pub fn new(game: G, input: L, ctx: TerminalContext<W>, rng: R) -> Self {
        Self { game, input, ctx, rng }
    }

    /// Run until the player declines a replay or input goes away.
    pub fn run(mut self) -> io::Result<(Session<G::Summary>, TerminalContext<W>)> {
        info!(game = G::NAME, "session started");
        let mut rounds = Vec::new();

        let end = loop {
            match self.game.play_round(&mut self.ctx, &mut self.input, &mut self.rng)? {
                RoundEnd::Finished(summary) => {
                    info!(round = rounds.len() + 1, ?summary, "round finished");
                    rounds.push(summary);
                }
                RoundEnd::Aborted(reason) => break self.abort(reason)?,
            }

            self.ctx.empty_line()?;
            self.ctx.print_line(&"=".repeat(40))?;
            self.ctx.print(REPLAY_PROMPT)?;
            self.ctx.flush()?;

            match self.input.read_line()? {
                LineEvent::Line(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    debug!("player asked for another round");
                    self.ctx.clear_screen()?;
                }
                LineEvent::Line(_) => {
                    self.ctx.print_line("Thanks for playing! Goodbye.")?;
                    break SessionEnd::Declined;
                }
                LineEvent::Aborted(reason) => break self.abort(reason)?,
            }
        };

        self.ctx.flush()?;
        info!(rounds = rounds.len(), ?end, "session ended");
        Ok((Session { rounds, end }, self.ctx))
    }

    fn abort(&mut self, reason: Abort) -> io::Result<SessionEnd> {
        self.ctx.empty_line()?;
        self.ctx.print_colored_line(reason.notice(), TerminalColor::Yellow)?;
        Ok(SessionEnd::Aborted(reason))
    }
}
