use crate::{
    input::MoveReader,
    renderer::BoardDisplay,
};
use anyhow::Context;
use std::io::{
    BufRead,
    Write,
};
use tic_tac_toe::{
    Board,
    GameOutcome,
    Minimax,
    Move,
    Player,
};
use tracing::{
    debug,
    info,
};

/// Who picks the moves for a side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GamePlayer {
    Human,
    Computer,
}

/// Game settings
#[derive(Debug, Copy, Clone)]
pub struct GameOptions {
    /// The player the human controls, or `None` if the computer plays itself.
    pub human: Option<Player>,

    /// The computer's search settings.
    pub minimax: Minimax,
}

impl GameOptions {
    /// Get who picks the moves for `player`.
    pub fn get_game_player(self, player: Player) -> GamePlayer {
        if self.human == Some(player) {
            GamePlayer::Human
        } else {
            GamePlayer::Computer
        }
    }
}

/// Play a game to the end.
///
/// X moves first. Human moves are read from `input`; everything the players see is written to `output`.
///
/// # Errors
/// Returns an error if the input closes or fails, the output fails,
/// or the computer cannot make a valid move.
pub fn run<R, W>(options: GameOptions, input: R, mut output: W) -> anyhow::Result<GameOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut reader = MoveReader::new(input);
    let mut board = Board::new();
    let mut player = Player::One;

    write!(output, "{}", BoardDisplay(board))?;

    loop {
        let mv = match options.get_game_player(player) {
            GamePlayer::Human => read_legal_move(&mut reader, &mut output, board)?,
            GamePlayer::Computer => {
                let mv = options
                    .minimax
                    .choose_move(board, player)
                    .context("the computer failed to choose a move")?;
                writeln!(output, "{player} plays {mv}")?;
                mv
            }
        };

        board
            .apply_move(mv, player)
            .with_context(|| format!("{player} tried to play an invalid move"))?;
        info!(%player, %mv, "move played");

        write!(output, "{}", BoardDisplay(board))?;

        let outcome = board.outcome();
        match outcome {
            GameOutcome::Win(winner) => {
                if let Some(winner_info) = board.winner_info() {
                    info!(
                        %winner,
                        win_type = %winner_info.win_type,
                        start_tile = winner_info.start_tile_index(),
                        end_tile = winner_info.end_tile_index(),
                        "game won"
                    );
                }
                writeln!(output, "{winner} won!")?;
                return Ok(outcome);
            }
            GameOutcome::Draw => {
                info!("game drawn");
                writeln!(output, "Draw!")?;
                return Ok(outcome);
            }
            GameOutcome::InProgress => {}
        }

        player = player.opponent();
    }
}

/// Read moves until one can be played on `board`.
fn read_legal_move<R, W>(
    reader: &mut MoveReader<R>,
    output: &mut W,
    board: Board,
) -> anyhow::Result<Move>
where
    R: BufRead,
    W: Write,
{
    loop {
        let mv = reader.read_move(output).context("failed to read a move")?;
        match board.check_move(mv) {
            Ok(_) => return Ok(mv),
            Err(e) => {
                debug!("rejected move: {e}");
                writeln!(
                    output,
                    "{mv} is an invalid move, the square is probably occupied by another piece."
                )?;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::InputError;
    use std::io::Cursor;

    fn play(human: Option<Player>, input: &str) -> (anyhow::Result<GameOutcome>, String) {
        let options = GameOptions {
            human,
            minimax: Minimax::new(),
        };
        let mut output = Vec::new();
        let outcome = run(options, Cursor::new(input), &mut output);
        let output = String::from_utf8(output).expect("output is not utf8");
        (outcome, output)
    }

    #[test]
    fn computer_vs_computer_draws() {
        let (outcome, output) = play(None, "");
        assert_eq!(outcome.expect("game failed"), GameOutcome::Draw);
        assert!(output.ends_with("Draw!\n"));
        assert_eq!(output.matches(" plays ").count(), 9);
    }

    #[test]
    fn human_x_retries_bad_input() {
        let input = "1,1\noops\n1,1\n1,0\n5,5\n2,0\n0,1\n";
        let (outcome, output) = play(Some(Player::One), input);
        assert_eq!(outcome.expect("game failed"), GameOutcome::Win(Player::Two));

        assert!(output.contains("O plays (0, 0)"));
        assert!(output.contains("not 'oops'."));
        assert!(output.contains(
            "(1, 1) is an invalid move, the square is probably occupied by another piece."
        ));
        assert!(output.contains(
            "(5, 5) is an invalid move, the square is probably occupied by another piece."
        ));
        assert!(output.contains("2|O O O |"));
        assert!(output.ends_with("O won!\n"));
    }

    #[test]
    fn human_o_moves_second() {
        let (outcome, output) = play(Some(Player::Two), "1,0\n2,0\n");
        assert_eq!(outcome.expect("game failed"), GameOutcome::Win(Player::One));
        assert!(output.contains("X plays (0, 0)"));
        assert!(output.ends_with("X won!\n"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (outcome, _output) = play(Some(Player::One), "1,1\n");
        let error = outcome.expect_err("game should fail");
        assert!(matches!(
            error.downcast_ref::<InputError>(),
            Some(InputError::Closed)
        ));
    }
}
