use gradebook::error::{GradebookError, Result};
use std::io::{self, BufRead, Write};

/// Line-based prompting. `None` from [`Prompter::ask`] means input ended.
pub struct Prompter<R: BufRead> {
    input: R,
}

impl Prompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Prints `prompt` without a newline and reads one line of input,
    /// stripped of its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush().map_err(GradebookError::Io)?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(GradebookError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_without_line_endings() {
        let mut prompter = Prompter::new(Cursor::new("Alice\r\nalice@x.com\n"));
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("Alice"));
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("alice@x.com"));
        assert_eq!(prompter.ask("").unwrap(), None);
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mut prompter = Prompter::new(Cursor::new("  Mary Ann \n"));
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("  Mary Ann "));
    }

    #[test]
    fn last_line_without_newline() {
        let mut prompter = Prompter::new(Cursor::new("6"));
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("6"));
        assert_eq!(prompter.ask("").unwrap(), None);
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new("\n"));
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some(""));
    }
}
