use std::collections::BTreeSet;
use std::io::{self, Write};

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::core::game::{ConsoleGame, RoundEnd};
use crate::core::input::{Abort, LineEvent, LineSource};
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::renderer::{HangmanRenderer, MAX_MISSES};
use crate::games::hangman::words::Vocabulary;

const GUESS_PROMPT: &str = "Enter your guess (a single letter): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Hit,
    Miss,
}

/// Reasons a line of input is not a usable guess, checked in this order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    #[error("Invalid input. Please enter exactly one letter.")]
    WrongLength,
    #[error("Invalid input. '{0}' is not a letter from A to Z.")]
    NotALetter(char),
    #[error("You already guessed '{0}'. Try a different letter.")]
    AlreadyGuessed(char),
}

/// Result of asking the player for a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRequest {
    Letter(char),
    Aborted(Abort),
}

/// Summary of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub word: String,
    pub won: bool,
    pub misses_used: u8,
    pub guesses: usize,
}

#[derive(Debug, Clone)]
pub struct HangmanState {
    word: String,
    guessed: BTreeSet<char>,
    misses_remaining: u8,
}

impl HangmanState {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_ascii_uppercase(),
            guessed: BTreeSet::new(),
            misses_remaining: MAX_MISSES,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn misses_remaining(&self) -> u8 {
        self.misses_remaining
    }

    pub fn misses_used(&self) -> u8 {
        MAX_MISSES - self.misses_remaining
    }

    pub fn is_revealed(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    /// A revealed word wins even if the last guess used up the final miss.
    pub fn status(&self) -> Status {
        if self.is_revealed() {
            Status::Won
        } else if self.misses_remaining == 0 {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Record a guess that already passed [`parse_guess`].
    pub fn apply_guess(&mut self, letter: char) -> GuessResult {
        self.guessed.insert(letter);
        if self.word.contains(letter) {
            GuessResult::Hit
        } else {
            self.misses_remaining = self.misses_remaining.saturating_sub(1);
            GuessResult::Miss
        }
    }
}

/// Turn a raw input line into a fresh guess.
pub fn parse_guess(raw: &str, already_guessed: &BTreeSet<char>) -> Result<char, GuessRejection> {
    let guess = raw.trim().to_uppercase();
    let mut chars = guess.chars();

    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(GuessRejection::WrongLength),
    };
    if !letter.is_ascii_uppercase() {
        return Err(GuessRejection::NotALetter(letter));
    }
    if already_guessed.contains(&letter) {
        return Err(GuessRejection::AlreadyGuessed(letter));
    }
    Ok(letter)
}

/// Prompt until the player types a usable letter or input goes away.
pub fn request_guess<W, L>(
    ctx: &mut TerminalContext<W>,
    input: &mut L,
    already_guessed: &BTreeSet<char>,
) -> io::Result<GuessRequest>
where
    W: Write,
    L: LineSource + ?Sized,
{
    loop {
        ctx.print(GUESS_PROMPT)?;
        ctx.flush()?;

        let line = match input.read_line()? {
            LineEvent::Line(line) => line,
            LineEvent::Aborted(reason) => return Ok(GuessRequest::Aborted(reason)),
        };

        match parse_guess(&line, already_guessed) {
            Ok(letter) => return Ok(GuessRequest::Letter(letter)),
            Err(rejection) => {
                debug!(input = %line, %rejection, "guess rejected");
                ctx.print_colored_line(&rejection.to_string(), TerminalColor::Yellow)?;
            }
        }
    }
}

/// Play one full round: pick a word and loop until won, lost, or aborted.
pub fn run_game<W, L, R>(
    vocabulary: &Vocabulary,
    ctx: &mut TerminalContext<W>,
    input: &mut L,
    rng: &mut R,
) -> io::Result<RoundEnd<Outcome>>
where
    W: Write,
    L: LineSource + ?Sized,
    R: Rng + ?Sized,
{
    ctx.print_line(&"=".repeat(40))?;
    ctx.print_line("       Welcome to Console Hangman!")?;
    ctx.print_line(&"=".repeat(40))?;

    let mut state = HangmanState::new(vocabulary.pick(rng));
    debug!(word = state.word(), "secret word picked");
    let mut guesses = 0;

    loop {
        HangmanRenderer.render(&state, ctx)?;

        match state.status() {
            Status::Won => {
                ctx.print_colored_line("🎉 CONGRATULATIONS! You guessed the word!", TerminalColor::Green)?;
                break;
            }
            Status::Lost => {
                ctx.print_colored_line("💀 GAME OVER! The man is hanged.", TerminalColor::Red)?;
                ctx.print_line(&format!("The word was: {}", state.word()))?;
                break;
            }
            Status::InProgress => {}
        }

        let letter = match request_guess(ctx, input, state.guessed())? {
            GuessRequest::Letter(letter) => letter,
            GuessRequest::Aborted(reason) => return Ok(RoundEnd::Aborted(reason)),
        };
        guesses += 1;

        let result = state.apply_guess(letter);
        debug!(%letter, ?result, remaining = state.misses_remaining(), "guess applied");
        ctx.empty_line()?;
        match result {
            GuessResult::Hit => ctx.print_colored_line(
                &format!("--- Good guess! '{}' is in the word. ---", letter),
                TerminalColor::Green,
            )?,
            GuessResult::Miss => ctx.print_colored_line(
                &format!("--- Incorrect guess. '{}' is NOT in the word. ---", letter),
                TerminalColor::Red,
            )?,
        }
    }

    ctx.flush()?;
    Ok(RoundEnd::Finished(Outcome {
        won: state.status() == Status::Won,
        misses_used: state.misses_used(),
        word: state.word,
        guesses,
    }))
}

/// Pure game implementation - no terminal or process concerns
#[derive(Debug, Clone, Default)]
pub struct HangmanGame {
    vocabulary: Vocabulary,
}

impl HangmanGame {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }
}

impl ConsoleGame for HangmanGame {
    type Summary = Outcome;

    const NAME: &'static str = "Hangman";

    fn play_round<W, L, R>(
        &self,
        ctx: &mut TerminalContext<W>,
        input: &mut L,
        rng: &mut R,
    ) -> io::Result<RoundEnd<Outcome>>
    where
        W: Write,
        L: LineSource + ?Sized,
        R: Rng + ?Sized,
    {
        run_game(&self.vocabulary, ctx, input, rng)
    }
}
