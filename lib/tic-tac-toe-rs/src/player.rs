/// Failed to parse a [`Player`] from a [`char`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid Tic-Tac-Toe player")]
pub struct InvalidCharError(pub char);

/// Failed to parse a [`Player`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStrError {
    /// The string is the wrong length. It must contain exactly one ascii char.
    ///
    /// The length is in bytes.
    #[error("a Tic-Tac-Toe player cannot be made from inputs of length {0}")]
    InvalidLength(usize),

    /// The char is not valid.
    #[error(transparent)]
    InvalidChar(#[from] InvalidCharError),
}

/// A Tic-Tac-Toe player.
///
/// This is also the mark a player leaves on a tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, plays X.
    One,
    /// Moves second, plays O.
    Two,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The mark of this player.
    pub fn as_char(self) -> char {
        match self {
            Self::One => 'X',
            Self::Two => 'O',
        }
    }

    /// Try to parse a [`Player`] from a [`char`].
    ///
    /// Accepts the mark (either case) or the player number.
    pub fn from_char(c: char) -> Result<Self, InvalidCharError> {
        match c {
            'x' | 'X' | '1' => Ok(Self::One),
            'o' | 'O' | '2' => Ok(Self::Two),
            c => Err(InvalidCharError(c)),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = InvalidStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // This may be in bytes but this only works if the first char is ascii.
        // Therefore, this is fine.
        if s.len() != 1 {
            return Err(InvalidStrError::InvalidLength(s.len()));
        }

        let c = s.chars().next().ok_or(InvalidStrError::InvalidLength(0))?;
        Ok(Self::from_char(c)?)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
