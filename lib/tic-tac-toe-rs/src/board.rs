use crate::{
    InvalidCellError,
    InvalidMoveError,
    Player,
    BOARD_SIZE,
    NUM_TILES,
};

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl std::fmt::Display for WinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
            Self::AntiDiagonal => "anti-diagonal",
        };
        f.write_str(name)
    }
}

/// A line of 3 tiles that wins the game if one player holds all of it.
struct Line {
    mask: u16,
    tile_indexes: [u8; 3],
    win_type: WinType,
}

// Bit `i` is tile `i`, so the top row is the lowest 3 bits and each
// group of 3 below reads right to left.
// Allow unusual_byte_groupings as we group by 3 to visualize the board.
#[allow(clippy::unusual_byte_groupings)]
const LINES: [Line; 8] = [
    // Rows, top to bottom
    Line {
        mask: 0b000_000_111,
        tile_indexes: [0, 1, 2],
        win_type: WinType::Horizontal,
    },
    Line {
        mask: 0b000_111_000,
        tile_indexes: [3, 4, 5],
        win_type: WinType::Horizontal,
    },
    Line {
        mask: 0b111_000_000,
        tile_indexes: [6, 7, 8],
        win_type: WinType::Horizontal,
    },
    // Columns, left to right
    Line {
        mask: 0b001_001_001,
        tile_indexes: [0, 3, 6],
        win_type: WinType::Vertical,
    },
    Line {
        mask: 0b010_010_010,
        tile_indexes: [1, 4, 7],
        win_type: WinType::Vertical,
    },
    Line {
        mask: 0b100_100_100,
        tile_indexes: [2, 5, 8],
        win_type: WinType::Vertical,
    },
    // Top left to bottom right
    Line {
        mask: 0b100_010_001,
        tile_indexes: [0, 4, 8],
        win_type: WinType::Diagonal,
    },
    // Top right to bottom left
    Line {
        mask: 0b001_010_100,
        tile_indexes: [2, 4, 6],
        win_type: WinType::AntiDiagonal,
    },
];

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning player
    pub player: Player,

    /// The tile_indexes that are part of the win.
    ///
    /// Sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,
}

impl WinnerInfo {
    /// Get the least tile index
    pub fn start_tile_index(&self) -> u8 {
        self.tile_indexes[0]
    }

    /// Get the highest tile index
    pub fn end_tile_index(&self) -> u8 {
        self.tile_indexes[2]
    }
}

/// The state of a game, derived from a [`Board`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

/// A target tile, as `x` (column) and `y` (row) from the top left.
///
/// Coordinates are not checked here, so user input can be carried as-is.
/// Use [`Board::is_valid_move`] before playing it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: i32,
    pub y: i32,
}

impl Move {
    /// Make a new [`Move`].
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Make a [`Move`] from a row-major tile index.
    ///
    /// Returns `None` if the index >= 9.
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= NUM_TILES {
            return None;
        }

        Some(Self::new(
            i32::from(index % BOARD_SIZE),
            i32::from(index / BOARD_SIZE),
        ))
    }

    /// Get the row-major tile index, `x + 3 * y`.
    ///
    /// Returns `None` if either coordinate is out of bounds.
    pub fn index(self) -> Option<u8> {
        let x = u8::try_from(self.x).ok().filter(|x| *x < BOARD_SIZE)?;
        let y = u8::try_from(self.y).ok().filter(|y| *y < BOARD_SIZE)?;
        Some(x + BOARD_SIZE * y)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A Tic Tac Toe board
///
/// Tiles are indexed in row-major order, `x + 3 * y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // the bitboard
    // 9 tiles, so it cannot fit in a u8 but can fit in a u16
    one_state: u16,
    two_state: u16,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Board {
            one_state: 0,
            two_state: 0,
        }
    }

    fn state(self, player: Player) -> u16 {
        match player {
            Player::One => self.one_state,
            Player::Two => self.two_state,
        }
    }

    fn occupied(self) -> u16 {
        self.one_state | self.two_state
    }

    /// Get the number of marks a player has on the board.
    pub fn count(self, player: Player) -> u32 {
        self.state(player).count_ones()
    }

    /// Returns true if every tile is taken.
    ///
    /// This does not check for wins.
    pub fn is_full(self) -> bool {
        self.occupied().count_ones() >= u32::from(NUM_TILES)
    }

    /// Returns true if every tile is taken and nobody won.
    pub fn is_draw(self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Get the winner if they exist
    pub fn winner(self) -> Option<Player> {
        self.winner_info().map(|info| info.player)
    }

    /// Get the winner info, if there is a winner.
    ///
    /// Rows are checked top to bottom, then columns left to right, then the diagonals.
    pub fn winner_info(self) -> Option<WinnerInfo> {
        LINES.iter().find_map(|line| {
            let player = [Player::One, Player::Two]
                .into_iter()
                .find(|player| (self.state(*player) & line.mask) == line.mask)?;

            Some(WinnerInfo {
                player,
                tile_indexes: line.tile_indexes,
                win_type: line.win_type,
            })
        })
    }

    /// Get the [`GameOutcome`] of this board.
    pub fn outcome(self) -> GameOutcome {
        match self.winner() {
            Some(player) => GameOutcome::Win(player),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    /// Get the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    pub fn get(self, index: u8) -> Option<Player> {
        assert!(index < NUM_TILES);
        if self.one_state & (1 << index) != 0 {
            Some(Player::One)
        } else if self.two_state & (1 << index) != 0 {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Get the tile a move targets.
    ///
    /// Returns `None` for empty tiles and out of bounds moves.
    pub fn at(self, mv: Move) -> Option<Player> {
        self.get(mv.index()?)
    }

    /// Set the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    #[must_use]
    fn set(mut self, index: u8, player: Player) -> Self {
        assert!(index < NUM_TILES);
        match player {
            Player::One => self.one_state |= 1 << index,
            Player::Two => self.two_state |= 1 << index,
        }
        self
    }

    /// Check a move, returning the tile index it targets.
    pub fn check_move(self, mv: Move) -> Result<u8, InvalidMoveError> {
        let index = mv.index().ok_or(InvalidMoveError::OutOfBounds(mv))?;
        match self.get(index) {
            Some(player) => Err(InvalidMoveError::Occupied { mv, player }),
            None => Ok(index),
        }
    }

    /// Returns true if the move is in bounds and targets an empty tile.
    pub fn is_valid_move(self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Place a player's mark.
    ///
    /// The board is left untouched if the move is invalid.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<(), InvalidMoveError> {
        let index = self.check_move(mv)?;
        *self = self.set(index, player);
        Ok(())
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at 0 at the top left and ends at 8 at the bottom right.
    ///
    /// # Returns
    /// Returns a tuple pair, where the first element is the index and the second is the tile value.
    pub fn iter(self) -> impl Iterator<Item = (u8, Option<Player>)> {
        (0..NUM_TILES).map(move |index| (index, self.get(index)))
    }

    /// Get an iterator over the legal moves, in row-major order.
    pub fn legal_moves(self) -> impl Iterator<Item = Move> {
        self.iter()
            .filter(|(_, tile)| tile.is_none())
            .filter_map(|(index, _)| Move::from_index(index))
    }

    /// Get an iterator over child board states.
    ///
    /// # Returns
    /// Returns an Iterator where Items are tuples.
    /// The first item is the move that was played.
    /// The second is the resulting board state.
    pub fn iter_children(self, player: Player) -> ChildrenIter {
        ChildrenIter::new(self, player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[u8; 9]> for Board {
    type Error = InvalidCellError;

    /// `0` is empty, `1` is [`Player::One`] and `2` is [`Player::Two`].
    fn try_from(tiles: [u8; 9]) -> Result<Self, Self::Error> {
        let mut board = Self::new();
        for (index, value) in (0..NUM_TILES).zip(tiles) {
            board = match value {
                0 => board,
                1 => board.set(index, Player::One),
                2 => board.set(index, Player::Two),
                value => return Err(InvalidCellError { index, value }),
            };
        }
        Ok(board)
    }
}

#[derive(Debug)]
pub struct ChildrenIter {
    board: Board,
    player: Player,
    index: u8,
}

impl ChildrenIter {
    fn new(board: Board, player: Player) -> Self {
        Self {
            board,
            player,
            index: 0,
        }
    }
}

impl Iterator for ChildrenIter {
    type Item = (Move, Board);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NUM_TILES {
            let index = self.index;
            self.index += 1;

            if (self.board.occupied() & (1 << index)) != 0 {
                continue;
            }

            let mv = Move::from_index(index)?;
            return Some((mv, self.board.set(index, self.player)));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(NUM_TILES - self.index)))
    }
}

impl std::iter::FusedIterator for ChildrenIter {}
