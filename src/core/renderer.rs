/// Generic game renderer trait for dependency injection
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

pub trait GameRenderer<State> {
    /// Render game state using terminal context - no manual \r handling!
    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;
}
