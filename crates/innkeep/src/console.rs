//! The interactive menu loop.
//!
//! [`Console`] reads selections from any `BufRead`, turns them into
//! [`Command`]s, and writes the responses to any `Write`. The binary wires
//! it to stdin/stdout; tests wire it to byte buffers.
//!
//! Input is tokenized on whitespace, so `1 101 1` on one line answers the
//! menu, number and type prompts in turn. A rejected token discards the
//! rest of its line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use innkeep_registry::{RoomKind, RoomNumber, RoomRegistry};

use crate::{handle_command, Command, InnkeepError, MenuChoice, MENU};

const INVALID_INPUT: &str = "Invalid input: expected a number.";
const INVALID_OPTION: &str = "Invalid option.";
const INVALID_KIND: &str = "Invalid room type.";

/// The outcome of a single prompt.
#[derive(Debug, PartialEq, Eq)]
enum Prompt<T> {
    /// The operator entered a usable value.
    Value(T),
    /// The line was rejected; go back to the menu.
    Skip,
    /// Input is exhausted.
    Closed,
}

/// A menu session over a reader and a writer, owning its registry.
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: RoomRegistry,
    /// Tokens read from the current line but not yet consumed.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with an empty, default-configured registry.
    pub fn new(input: R, output: W) -> Self {
        Self::with_registry(input, output, RoomRegistry::new())
    }

    pub fn with_registry(input: R, output: W, registry: RoomRegistry) -> Self {
        Self {
            input,
            output,
            registry,
            pending: VecDeque::new(),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Consumes the console, returning the writer and the registry.
    pub fn into_parts(self) -> (W, RoomRegistry) {
        (self.output, self.registry)
    }

    /// Runs the menu until the operator picks Exit or input ends.
    ///
    /// # Errors
    /// Only I/O failures are returned. Registry errors are printed.
    pub fn run(&mut self) -> Result<(), InnkeepError> {
        tracing::debug!("console session started");

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;

            let selection = match self.prompt_number("Select an option: ")? {
                Prompt::Value(n) => n,
                Prompt::Skip => continue,
                Prompt::Closed => break,
            };

            let Some(choice) = MenuChoice::from_selection(selection) else {
                self.pending.clear();
                writeln!(self.output, "{INVALID_OPTION}")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }

            let command = match self.build_command(choice)? {
                Prompt::Value(command) => command,
                Prompt::Skip => continue,
                Prompt::Closed => break,
            };

            for line in handle_command(&mut self.registry, command) {
                writeln!(self.output, "{line}")?;
            }
        }

        self.output.flush()?;
        tracing::debug!(rooms = self.registry.len(), "console session ended");
        Ok(())
    }

    /// Collects whatever extra input `choice` needs.
    fn build_command(
        &mut self,
        choice: MenuChoice,
    ) -> Result<Prompt<Command>, InnkeepError> {
        let number = match choice.number_prompt() {
            Some(prompt) => match self.prompt_number(prompt)? {
                Prompt::Value(n) => RoomNumber(n),
                Prompt::Skip => return Ok(Prompt::Skip),
                Prompt::Closed => return Ok(Prompt::Closed),
            },
            None => RoomNumber(0),
        };

        let command = match choice {
            MenuChoice::Register => {
                let code = match self.prompt_number(&kind_prompt())? {
                    Prompt::Value(code) => code,
                    Prompt::Skip => return Ok(Prompt::Skip),
                    Prompt::Closed => return Ok(Prompt::Closed),
                };
                let Some(kind) = RoomKind::from_code(code) else {
                    self.pending.clear();
                    writeln!(self.output, "{INVALID_KIND}")?;
                    return Ok(Prompt::Skip);
                };
                Command::Register { number, kind }
            }
            MenuChoice::List => Command::List,
            MenuChoice::Reserve => Command::Reserve(number),
            MenuChoice::Release => Command::Release(number),
            MenuChoice::Status => Command::Status(number),
            MenuChoice::CountOccupied => Command::CountOccupied,
            MenuChoice::CountAvailable => Command::CountAvailable,
            MenuChoice::Exit => return Ok(Prompt::Closed),
        };

        Ok(Prompt::Value(command))
    }

    /// Writes `prompt` and takes the next token as a non-negative integer.
    fn prompt_number(&mut self, prompt: &str) -> Result<Prompt<u32>, InnkeepError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let Some(token) = self.next_token()? else {
            return Ok(Prompt::Closed);
        };

        match token.parse::<u32>() {
            Ok(n) => Ok(Prompt::Value(n)),
            Err(e) => {
                tracing::debug!(input = %token, error = %e, "rejected input");
                self.pending.clear();
                writeln!(self.output)?;
                writeln!(self.output, "{INVALID_INPUT}")?;
                Ok(Prompt::Skip)
            }
        }
    }

    /// Next whitespace-separated token, reading more lines as needed.
    /// Blank lines are skipped. `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>, InnkeepError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// `Enter room type (1=Simple, 2=Double, 3=Suite): `
fn kind_prompt() -> String {
    let codes: Vec<String> = RoomKind::ALL
        .iter()
        .map(|kind| format!("{}={}", kind.code(), kind.label()))
        .collect();
    format!("Enter room type ({}): ", codes.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_prompt_number_parses_trimmed_line() {
        let mut c = console("  42 \n");
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Value(42));
    }

    #[test]
    fn test_prompt_number_rejects_garbage() {
        let mut c = console("abc\n");
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Skip);
        let (out, _) = c.into_parts();
        assert!(String::from_utf8(out).unwrap().contains(INVALID_INPUT));
    }

    #[test]
    fn test_prompt_number_rejects_negative() {
        let mut c = console("-3\n");
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Skip);
    }

    #[test]
    fn test_prompt_number_at_eof() {
        let mut c = console("");
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Closed);
    }

    #[test]
    fn test_several_tokens_on_one_line() {
        let mut c = console("1 101\n\n  3\n");
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Value(1));
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Value(101));
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Value(3));
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Closed);
    }

    #[test]
    fn test_rejected_token_discards_rest_of_line() {
        let mut c = console("x 5 6\n7\n");
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Skip);
        assert_eq!(c.prompt_number("> ").unwrap(), Prompt::Value(7));
    }

    #[test]
    fn test_kind_prompt_lists_every_kind() {
        assert_eq!(
            kind_prompt(),
            "Enter room type (1=Simple, 2=Double, 3=Suite): "
        );
    }

    #[test]
    fn test_invalid_kind_is_discarded() {
        let mut c = console("101\n9\n");
        let result = c.build_command(MenuChoice::Register).unwrap();
        assert_eq!(result, Prompt::Skip);
        assert!(c.registry().is_empty());
    }
}
