/// Terminal output context that handles all the low-level terminal stuff
use crossterm::{QueueableCommand, cursor, terminal, style::{SetForegroundColor, ResetColor, Color}};
use std::io::{self, stdout, Write, Stdout};

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
    styled: bool,
}

impl TerminalContext<Stdout> {
    /// Context over stdout, styled only when stdout is a real terminal
    pub fn stdout() -> Self {
        use std::io::IsTerminal;
        let styled = io::stdout().is_terminal();
        Self { out: stdout(), styled }
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out, styled: true }
    }

    /// No colors, no escape codes - just the text
    pub fn plain(out: W) -> Self {
        Self { out, styled: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the entire screen and position cursor
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if self.styled {
            self.out.queue(cursor::MoveTo(0, 0))?;
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        Ok(())
    }

    /// Print a line with a carriage return so it also lines up in raw mode
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}\r", text)
    }

    /// Print a colored line
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if !self.styled {
            return self.print_line(text);
        }
        self.out.queue(SetForegroundColor(color.into()))?;
        writeln!(self.out, "{}\r", text)?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    /// Print empty line
    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out, "\r")
    }

    /// Print text without newline
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Flush everything queued so far. Call before blocking on input.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
    Default,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Default => Color::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(ctx: TerminalContext<Vec<u8>>) -> String {
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn plain_context_writes_bare_text() {
        let mut ctx = TerminalContext::plain(Vec::new());
        ctx.clear_screen().unwrap();
        ctx.print_colored_line("hello", TerminalColor::Green).unwrap();
        ctx.print("> ").unwrap();
        assert_eq!(text(ctx), "hello\r\n> ");
    }

    #[test]
    fn styled_context_wraps_colored_text_in_escapes() {
        let mut ctx = TerminalContext::new(Vec::new());
        ctx.print_colored_line("boom", TerminalColor::Red).unwrap();
        let out = text(ctx);
        assert!(out.starts_with('\u{1b}'));
        assert!(out.contains("boom\r\n"));
    }

    #[test]
    fn styled_clear_emits_escape_codes() {
        let mut ctx = TerminalContext::new(Vec::new());
        ctx.clear_screen().unwrap();
        assert!(!text(ctx).is_empty());
    }
}
