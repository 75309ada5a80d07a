/// Hangman game module
pub mod game;
pub mod renderer;
pub mod words;

pub use game::{
    parse_guess, request_guess, run_game, GuessRejection, GuessRequest, GuessResult,
    HangmanGame, HangmanState, Outcome, Status,
};
pub use renderer::{render, HangmanRenderer, MAX_MISSES, STAGES};
pub use words::{Vocabulary, VocabularyError};
