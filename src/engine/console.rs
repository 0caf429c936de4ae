use std::io::{self, BufRead, Write};

use crate::engine::output::Output;
use crate::engine::render::render_block;

pub const COMMAND_PROMPT: &str = "> What do you do? ";

/// Where output goes and commands come from. Every loop in the game, however deeply
/// nested, talks to the player through this.
pub trait Terminal {
    /// Render and flush a batch of output.
    fn show(&mut self, out: Output) -> io::Result<()>;

    /// Print `prompt` and block for one line. `None` means the input stream has ended.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn show(&mut self, out: Output) -> io::Result<()> {
        for block in &out.blocks {
            writeln!(self.output, "{}", render_block(block))?;
        }
        self.output.flush()
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(line))
    }
}

/// Trimmed, lowercased form used for command matching.
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Splits a normalized command into its verb and the (possibly empty) rest.
pub fn split_verb(action: &str) -> (&str, &str) {
    match action.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (action, ""),
    }
}
