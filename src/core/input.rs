//! Line-based input for console games.
//!
//! Interactive terminals are read key by key in raw mode so that Ctrl+C and
//! Ctrl+D reach the game as events instead of killing the process. Piped
//! input and tests go through a plain buffered reader.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::debug;

/// Why a prompt stopped without an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abort {
    EndOfInput,
    Interrupted,
}

impl Abort {
    /// Farewell shown when the session is cut short
    pub fn notice(self) -> &'static str {
        match self {
            Abort::EndOfInput => "Exiting game.",
            Abort::Interrupted => "Game interrupted. Exiting.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Line(String),
    Aborted(Abort),
}

/// Anything that can hand the game one line of player input at a time.
pub trait LineSource {
    /// Block until a full line, end of input, or an interrupt.
    fn read_line(&mut self) -> io::Result<LineEvent>;
}

impl<L: LineSource + ?Sized> LineSource for Box<L> {
    fn read_line(&mut self) -> io::Result<LineEvent> {
        (**self).read_line()
    }
}

/// Reads lines from any buffered reader (piped stdin, files, in-memory text).
pub struct BufferedLines<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BufferedLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufferedLines<R> {
    fn read_line(&mut self) -> io::Result<LineEvent> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(LineEvent::Aborted(Abort::EndOfInput));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(LineEvent::Line(line))
    }
}

/// Fold one key press into the line being typed.
///
/// Returns an event once the line is complete or the player bailed out.
pub fn apply_key(buffer: &mut String, key: KeyEvent) -> Option<LineEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(LineEvent::Aborted(Abort::Interrupted)),
        KeyCode::Char('d') if ctrl && buffer.is_empty() => {
            Some(LineEvent::Aborted(Abort::EndOfInput))
        }
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => {
            buffer.push(c);
            None
        }
        KeyCode::Backspace => {
            buffer.pop();
            None
        }
        KeyCode::Enter => Some(LineEvent::Line(std::mem::take(buffer))),
        _ => None,
    }
}

/// Leaves raw mode when dropped, whatever happened while reading.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Key-by-key reader for an interactive terminal, echoing to `echo`.
pub struct RawKeyLines<W: Write> {
    echo: W,
}

impl<W: Write> RawKeyLines<W> {
    pub fn new(echo: W) -> Self {
        Self { echo }
    }
}

impl<W: Write> LineSource for RawKeyLines<W> {
    fn read_line(&mut self) -> io::Result<LineEvent> {
        let _raw = RawModeGuard::enable()?;
        let mut buffer = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let before = buffer.chars().count();

            if let Some(done) = apply_key(&mut buffer, key) {
                write!(self.echo, "\r\n")?;
                self.echo.flush()?;
                if let LineEvent::Aborted(reason) = done {
                    debug!(?reason, "input aborted at terminal");
                }
                return Ok(done);
            }

            let after = buffer.chars().count();
            if after > before {
                if let Some(c) = buffer.chars().last() {
                    write!(self.echo, "{}", c)?;
                }
            } else if after < before {
                write!(self.echo, "\x08 \x08")?;
            }
            self.echo.flush()?;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Buffered,
    RawEcho,
    RawSilent,
}

/// Typed keys are echoed only when stdout is a terminal as well.
fn source_kind(stdin_tty: bool, stdout_tty: bool) -> SourceKind {
    match (stdin_tty, stdout_tty) {
        (false, _) => SourceKind::Buffered,
        (true, true) => SourceKind::RawEcho,
        (true, false) => SourceKind::RawSilent,
    }
}

/// Pick the right reader for this process's stdin.
pub fn stdin_source() -> Box<dyn LineSource> {
    match source_kind(io::stdin().is_terminal(), io::stdout().is_terminal()) {
        SourceKind::Buffered => Box::new(BufferedLines::new(io::stdin().lock())),
        SourceKind::RawEcho => Box::new(RawKeyLines::new(io::stdout())),
        SourceKind::RawSilent => Box::new(RawKeyLines::new(io::sink())),
    }
}

/// Turn a SIGINT that arrives outside a raw-mode read into a clean exit.
///
/// Raw mode swallows Ctrl+C as a key, so this covers piped stdin and the
/// gaps between prompts.
pub fn exit_on_interrupt() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let _ = terminal::disable_raw_mode();
        let mut out = io::stdout();
        let _ = write!(out, "\r\n{}\r\n", Abort::Interrupted.notice());
        let _ = out.flush();
        debug!("interrupted by signal");
        std::process::exit(0);
    })
}
