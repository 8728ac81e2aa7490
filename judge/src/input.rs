use std::collections::VecDeque;
use std::io::{BufRead, Write};

use nim::{Board, Move};
use tracing::trace;

use crate::error::JudgeError;

/// Where the moves of human players come from.
pub trait MoveInput {
    fn request_move(&mut self, board: &Board) -> anyhow::Result<Move>;
}

/// Prompts on `writer` and reads whitespace-separated numbers from `reader`.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    // Tokens of the last line that have not been consumed yet
    tokens: VecDeque<String>,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            tokens: VecDeque::new(),
            buf: String::new(),
        }
    }

    fn next_token(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Err(JudgeError::InputClosed.into());
            }
            self.tokens
                .extend(self.buf.split_whitespace().map(String::from));
        }
    }

    fn next_number(&mut self) -> anyhow::Result<usize> {
        loop {
            let token = self.next_token()?;
            match token.parse::<usize>() {
                Ok(num) => return Ok(num),
                Err(_) => {
                    trace!(token, "Not a number");
                    writeln!(self.writer, "Please enter a whole number.")?;
                    self.writer.flush()?;
                }
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<usize> {
        writeln!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.next_number()
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    fn request_move(&mut self, board: &Board) -> anyhow::Result<Move> {
        loop {
            match self.ask("Press 1 to display the board. Press 2 to make a move:")? {
                1 => writeln!(self.writer, "{}", board)?,
                2 => break,
                _ => writeln!(self.writer, "Unknown input.")?,
            }
        }
        let row = self.ask("Enter the row number:")?;
        let left = self.ask("Enter the index of the leftmost stick:")?;
        let right = self.ask("Enter the index of the rightmost stick:")?;
        Ok(Move::new(row, left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(script: &str) -> (anyhow::Result<Move>, String) {
        let mut output = Vec::new();
        let result = ConsoleInput::new(script.as_bytes(), &mut output).request_move(&Board::new());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_a_move() {
        let (result, output) = request("2\n4 2 5\n");
        assert_eq!(result.unwrap(), Move::new(4, 2, 5));
        assert_eq!(
            output,
            "Press 1 to display the board. Press 2 to make a move:\n\
             Enter the row number:\n\
             Enter the index of the leftmost stick:\n\
             Enter the index of the rightmost stick:\n"
        );
    }

    #[test]
    fn displays_board_and_rejects_unknown_choices() {
        let (result, output) = request("1\n7\n2\n1\n1\n1\n");
        assert_eq!(result.unwrap(), Move::single(1, 1));
        assert!(output.contains("4: | | | | | | |\n"));
        assert!(output.contains("Unknown input.\n"));
        assert_eq!(
            output
                .matches("Press 1 to display the board. Press 2 to make a move:")
                .count(),
            3
        );
    }

    #[test]
    fn asks_again_for_non_numbers() {
        let (result, output) = request("2 three 3 1 x 2\n");
        assert_eq!(result.unwrap(), Move::new(3, 1, 2));
        assert_eq!(output.matches("Please enter a whole number.").count(), 2);
    }

    #[test]
    fn end_of_input() {
        let (result, _) = request("2\n4\n");
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<JudgeError>(),
            Some(&JudgeError::InputClosed)
        );
    }
}
