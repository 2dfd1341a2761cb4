use std::{
    io::{
        BufRead,
        Write,
    },
    num::ParseIntError,
};
use tic_tac_toe::Move;
use tracing::debug;

/// Failed to parse a [`Move`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    /// There were not exactly 2 comma separated parts.
    #[error("expected 2 coordinates, got {0}")]
    WrongCount(usize),

    /// A part was not an integer.
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String, #[source] ParseIntError),
}

/// Parse a move from `x,y`.
///
/// Whitespace around each coordinate is ignored.
/// Coordinates are not range checked.
pub fn parse_move(s: &str) -> Result<Move, ParseMoveError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y] = parts[..] else {
        return Err(ParseMoveError::WrongCount(parts.len()));
    };

    let parse = |part: &str| {
        part.parse::<i32>()
            .map_err(|e| ParseMoveError::InvalidCoordinate(part.to_string(), e))
    };

    Ok(Move::new(parse(x)?, parse(y)?))
}

/// Failed to read a move.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input ended before a move was read.
    #[error("input closed")]
    Closed,

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Prompts for and reads moves from line based input.
#[derive(Debug)]
pub struct MoveReader<R> {
    input: R,
    line: Vec<u8>,
}

impl<R> MoveReader<R>
where
    R: BufRead,
{
    /// Make a new [`MoveReader`].
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::new(),
        }
    }

    /// Prompt until a well-formed move is entered.
    ///
    /// Malformed lines are reported to `output` and retried.
    /// The move may still be illegal on the board.
    pub fn read_move<W>(&mut self, output: &mut W) -> Result<Move, InputError>
    where
        W: Write,
    {
        loop {
            write!(output, "Enter the coordinates for your move (x,y): ")?;
            output.flush()?;

            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Err(InputError::Closed);
            }

            let line = match std::str::from_utf8(&self.line) {
                Ok(line) => line.trim(),
                Err(e) => {
                    debug!("rejected input: {e}");
                    let line = String::from_utf8_lossy(&self.line);
                    writeln!(
                        output,
                        "Your input needs to be two integers separated by a comma, not '{}'.",
                        line.trim()
                    )?;
                    continue;
                }
            };

            match parse_move(line) {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    debug!("rejected input: {e}");
                    writeln!(
                        output,
                        "Your input needs to be two integers separated by a comma, not '{line}'."
                    )?;
                }
            }
        }
    }
}
