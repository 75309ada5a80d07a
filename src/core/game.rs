/// Core game interface for line-driven console games
use std::io::{self, Write};

use rand::Rng;

use crate::core::input::{Abort, LineSource};
use crate::core::terminal::TerminalContext;

/// How a single round stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEnd<S> {
    /// Played through to a terminal state
    Finished(S),
    /// The player walked away mid-round
    Aborted(Abort),
}

/// Main game trait that all console games implement
pub trait ConsoleGame {
    /// What a finished round reports back to the engine
    type Summary: std::fmt::Debug;

    const NAME: &'static str;

    /// Play one round from a fresh state to a terminal state.
    ///
    /// Each call starts over; nothing carries between rounds.
    fn play_round<W, L, R>(
        &self,
        ctx: &mut TerminalContext<W>,
        input: &mut L,
        rng: &mut R,
    ) -> io::Result<RoundEnd<Self::Summary>>
    where
        W: Write,
        L: LineSource + ?Sized,
        R: Rng + ?Sized;
}
