use crate::{
    Move,
    Player,
};

/// A move that cannot be played on a board.
///
/// This is recoverable; ask for another move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveError {
    /// A coordinate is outside of `0..3`.
    #[error("{0} is out of bounds")]
    OutOfBounds(Move),

    /// The tile already has a mark.
    #[error("{mv} is already occupied by {player}")]
    Occupied { mv: Move, player: Player },
}

/// The engine was asked to move on a board that has no move to make.
///
/// This is a bug in the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStateError {
    /// The board already has a winner.
    #[error("the game was already won by {0}")]
    AlreadyWon(Player),

    /// Every tile is taken.
    #[error("there are no legal moves left")]
    NoLegalMoves,
}

/// A numeric tile value that is not `0`, `1` or `2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tile {index} has invalid value {value}")]
pub struct InvalidCellError {
    pub index: u8,
    pub value: u8,
}
