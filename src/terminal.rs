//! The text front end the game talks to.
//!
//! The engine never touches stdin or stdout itself. It asks a [`Terminal`] for
//! the player's next choice and hands it lines to show.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where choices come from and where text goes.
pub trait Terminal {
    /// Shows `menu` and reads the player's next choice. `None` means the
    /// player has nothing more to say (end of input).
    fn read_choice(&mut self, menu: &str) -> io::Result<Option<char>>;

    /// Shows `prompt` and reads a whole line, without its line ending.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Shows `text` followed by a line break.
    fn display(&mut self, text: &str) -> io::Result<()>;
}

/// A [`Terminal`] over any reader and writer, usually stdin and stdout.
///
/// Choices are read one non-whitespace character at a time. Anything else
/// typed on the same line is kept for the following prompts, so typing `ee`
/// goes left twice.
///
/// # Examples
///
/// ```
/// use detective_quest::terminal::{StdTerminal, Terminal};
///
/// let mut terminal = StdTerminal::new("e d\n".as_bytes(), Vec::new());
///
/// assert_eq!(terminal.read_choice("> ").unwrap(), Some('e'));
/// assert_eq!(terminal.read_choice("> ").unwrap(), Some('d'));
/// assert_eq!(terminal.read_choice("> ").unwrap(), None);
/// ```
pub struct StdTerminal<R, W> {
    input: R,
    output: W,
    pending: VecDeque<char>,
}

impl<R, W> StdTerminal<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Wraps `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Gives back the writer, with everything displayed so far.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Reads one raw line, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}

impl StdTerminal<io::StdinLock<'static>, io::Stdout> {
    /// A terminal on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Terminal for StdTerminal<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_choice(&mut self, menu: &str) -> io::Result<Option<char>> {
        self.prompt(menu)?;

        while self.pending.is_empty() {
            match self.next_line()? {
                Some(line) => self
                    .pending
                    .extend(line.chars().filter(|c| !c.is_whitespace())),
                None => return Ok(None),
            }
        }

        Ok(self.pending.pop_front())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)?;

        if !self.pending.is_empty() {
            return Ok(Some(self.pending.drain(..).collect()));
        }

        Ok(self
            .next_line()?
            .map(|line| line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn display(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}
