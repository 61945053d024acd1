use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Line-oriented request/response channel to the person at the terminal.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt` (without a newline) and read one line of input.
    ///
    /// The returned line keeps surrounding whitespace; callers trim where
    /// it matters. Returns [`Error::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// `[y/N]` questions: only a leading `y`/`Y` counts.
pub fn is_yes(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

/// `[Y/n]` questions: only a leading `n`/`N` counts as a refusal.
pub fn is_no(answer: &str) -> bool {
    answer.starts_with(['n', 'N'])
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn ask_writes_prompt_and_reads_line() {
        let mut p = Prompter::new(Cursor::new("hello\nworld\n"), Vec::new());

        assert_eq!(p.ask(">> ").unwrap(), "hello\n");
        assert_eq!(p.ask(">> ").unwrap(), "world\n");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), ">> >> ");
    }

    #[test]
    fn ask_at_end_of_input_fails() {
        let mut p = Prompter::new(Cursor::new(""), Vec::new());
        assert!(matches!(p.ask(">> "), Err(Error::InputClosed)));
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut p = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(p.ask(">> ").unwrap(), "\n");
    }

    #[test]
    fn yes_needs_leading_y() {
        assert!(is_yes("y\n"));
        assert!(is_yes("Yes"));
        assert!(!is_yes("\n"));
        assert!(!is_yes(" y"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn no_needs_leading_n() {
        assert!(is_no("n\n"));
        assert!(is_no("Nope"));
        assert!(!is_no("\n"));
        assert!(!is_no("yes"));
        assert!(!is_no("maybe"));
    }
}
