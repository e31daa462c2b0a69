use std::io::{self, BufRead, IsTerminal, Write};

use inquire::Text;

use crate::error::AppError;

/// Source of single lines of user input
pub trait LineInput {
    /// Shows `prompt` and reads one line, with surrounding whitespace trimmed
    ///
    /// # Arguments
    /// * `prompt` - Message shown before reading
    /// * `help` - Optional extra hint shown with the prompt
    fn read_line(&mut self, prompt: &str, help: Option<&str>) -> Result<String, AppError>;
}

/// Interactive terminal prompts using `inquire`
pub struct TerminalInput;

impl LineInput for TerminalInput {
    fn read_line(&mut self, prompt: &str, help: Option<&str>) -> Result<String, AppError> {
        let mut text = Text::new(prompt);
        if let Some(help) = help {
            text = text.with_help_message(help);
        }
        Ok(text.prompt()?.trim().to_string())
    }
}

/// Line-by-line input from any buffered reader (piped stdin, scripted tests)
///
/// End of input reads as an empty line.
pub struct ReaderInput<R> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            echo_prompts: false,
        }
    }

    /// Print each prompt to stdout before reading
    pub fn echo_prompts(mut self) -> Self {
        self.echo_prompts = true;
        self
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str, _help: Option<&str>) -> Result<String, AppError> {
        if self.echo_prompts {
            let mut stdout = io::stdout();
            write!(stdout, "{prompt} ")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Picks inquire prompts on a terminal, plain line reads otherwise
pub fn stdin_input() -> Box<dyn LineInput> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        Box::new(TerminalInput)
    } else {
        Box::new(ReaderInput::new(stdin.lock()).echo_prompts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_input_trims_lines() {
        let mut input = ReaderInput::new(Cursor::new("  Jane Doe \n\tjane@corp.com\n"));
        assert_eq!(input.read_line("Name:", None).unwrap(), "Jane Doe");
        assert_eq!(input.read_line("Email:", None).unwrap(), "jane@corp.com");
    }

    #[test]
    fn reader_input_end_of_input_is_empty() {
        let mut input = ReaderInput::new(Cursor::new("only\n"));
        assert_eq!(input.read_line("a", None).unwrap(), "only");
        assert_eq!(input.read_line("b", None).unwrap(), "");
        assert_eq!(input.read_line("c", None).unwrap(), "");
    }
}
