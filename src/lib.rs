pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::engine::{Engine, Session, SessionEnd};
pub use crate::core::game::{ConsoleGame, RoundEnd};
pub use crate::core::input::{Abort, LineEvent, LineSource};
pub use crate::core::terminal::TerminalContext;
