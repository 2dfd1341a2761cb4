//! Tic-Tac-Toe on a 3x3 board, with a minimax opponent.
//!
//! [`Board`] holds the game state and answers rule queries.
//! [`choose_move`] searches the full game tree for the best reply.

mod board;
mod error;
mod minimax;
mod player;

pub use crate::{
    board::{
        Board,
        ChildrenIter,
        GameOutcome,
        Move,
        WinType,
        WinnerInfo,
    },
    error::{
        InvalidCellError,
        InvalidMoveError,
        InvalidStateError,
    },
    minimax::{
        choose_move,
        Minimax,
        WIN_SCORE,
    },
    player::{
        InvalidCharError,
        InvalidStrError,
        Player,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;

/// The # of tiles along each side of the board
pub const BOARD_SIZE: u8 = 3;
