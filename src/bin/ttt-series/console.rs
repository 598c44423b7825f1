//! Line-oriented terminal I/O.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Reads answers from `input` and writes prompts to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    /// One line without its terminator. Closed input is an error.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask `question` until `parse` accepts the answer, printing `complaint`
    /// after each rejected one.
    pub fn prompt_until_valid<T>(
        &mut self,
        question: &str,
        complaint: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            self.say(question)?;
            let answer = self.read_line()?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.say(complaint)?;
        }
    }

    /// Print `message` and block until Return.
    pub fn wait(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Lowercased first character of an answer, ignoring leading whitespace.
pub fn first_letter(answer: &str) -> Option<char> {
    answer.trim().chars().next().map(|c| c.to_ascii_lowercase())
}
