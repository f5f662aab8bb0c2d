//! Line-oriented operator prompts

use std::io::{self, BufRead, Write};

/// Writes prompts and reads one line of input per prompt
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `label` and read one line
    ///
    /// Returns `None` at end of input. Only the line terminator is stripped;
    /// other whitespace is left for the caller to interpret.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string();
        Ok(Some(answer))
    }

    /// Print a block of text, ending it with a newline if it lacks one
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        if text.ends_with('\n') {
            write!(self.output, "{}", text)?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        self.output.flush()
    }

    /// Release the underlying output
    pub fn into_output(self) -> W {
        self.output
    }
}
