use crate::{
    Board,
    InvalidStateError,
    Move,
    Player,
};
use tracing::debug;

/// The score of a won game, before depth adjustment.
pub const WIN_SCORE: i8 = 10;

/// Exhaustive minimax search settings.
///
/// The search always runs to full depth. The tree is at most 9 plies deep, so no pruning is done.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Minimax {
    depth_adjusted: bool,
}

impl Minimax {
    /// Make a new [`Minimax`] with depth adjustment enabled.
    pub fn new() -> Self {
        Self {
            depth_adjusted: true,
        }
    }

    /// Set whether scores are adjusted by depth.
    ///
    /// When enabled, a win scores `10 - depth` and a loss `depth - 10`,
    /// so faster wins and slower losses are preferred.
    /// When disabled, all wins score `10` and all losses `-10`.
    #[must_use]
    pub fn depth_adjusted(mut self, depth_adjusted: bool) -> Self {
        self.depth_adjusted = depth_adjusted;
        self
    }

    /// Choose the best move for `player`.
    ///
    /// Ties go to the first move in row-major order.
    ///
    /// # Errors
    /// Returns an error if the board already has a winner or is full.
    pub fn choose_move(self, board: Board, player: Player) -> Result<Move, InvalidStateError> {
        if let Some(winner) = board.winner() {
            return Err(InvalidStateError::AlreadyWon(winner));
        }

        let mut best: Option<(Move, i8)> = None;
        for (mv, child) in board.iter_children(player) {
            let score = self.score(child, player.opponent(), player, 1);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(InvalidStateError::NoLegalMoves)?;
        debug!(%player, %mv, score, "chose move");

        Ok(mv)
    }

    /// Score `board` for `maximizer`, with `to_move` playing next.
    ///
    /// `depth` is the number of plies played since the root.
    fn score(self, board: Board, to_move: Player, maximizer: Player, depth: i8) -> i8 {
        if let Some(winner) = board.winner() {
            let penalty = if self.depth_adjusted { depth } else { 0 };
            return if winner == maximizer {
                WIN_SCORE - penalty
            } else {
                penalty - WIN_SCORE
            };
        }

        let scores = board
            .iter_children(to_move)
            .map(|(_, child)| self.score(child, to_move.opponent(), maximizer, depth + 1));

        let best = if to_move == maximizer {
            scores.max()
        } else {
            scores.min()
        };

        // No children means the board is full, a draw.
        best.unwrap_or(0)
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

/// Choose the best move for `player` with the default [`Minimax`] settings.
///
/// # Errors
/// Returns an error if the board already has a winner or is full.
pub fn choose_move(board: Board, player: Player) -> Result<Move, InvalidStateError> {
    Minimax::new().choose_move(board, player)
}
