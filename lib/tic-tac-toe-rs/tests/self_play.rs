use std::collections::HashSet;
use tic_tac_toe::{
    choose_move,
    Board,
    GameOutcome,
    Minimax,
    Player,
};

fn self_play(minimax: Minimax) -> (Board, GameOutcome) {
    let mut board = Board::new();
    let mut player = Player::One;
    loop {
        let mv = minimax
            .choose_move(board, player)
            .expect("engine failed on a live board");
        board.apply_move(mv, player).expect("engine chose an invalid move");

        let outcome = board.outcome();
        if outcome != GameOutcome::InProgress {
            return (board, outcome);
        }
        player = player.opponent();
    }
}

#[test]
fn self_play_is_a_draw() {
    let (board, outcome) = self_play(Minimax::new());
    assert_eq!(outcome, GameOutcome::Draw);
    assert!(board.is_draw());
}

#[test]
fn self_play_without_depth_adjustment_is_a_draw() {
    let (_, outcome) = self_play(Minimax::new().depth_adjusted(false));
    assert_eq!(outcome, GameOutcome::Draw);
}

#[test]
fn self_play_is_reproducible() {
    assert_eq!(self_play(Minimax::new()), self_play(Minimax::new()));
}

/// Walk every board reachable from the empty board with alternating turns.
fn reachable_live_boards() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Player::One)];
    let mut live = Vec::new();

    while let Some((board, player)) = stack.pop() {
        if !seen.insert(board) || board.outcome() != GameOutcome::InProgress {
            continue;
        }

        live.push((board, player));
        for (_, child) in board.iter_children(player) {
            stack.push((child, player.opponent()));
        }
    }

    live
}

#[test]
fn engine_only_chooses_valid_moves() {
    let boards = reachable_live_boards();
    assert_eq!(boards.len(), 4520);

    for (board, player) in boards {
        let mv = choose_move(board, player).expect("engine failed on a live board");
        assert!(board.is_valid_move(mv), "{mv} is invalid on {board:?}");
    }
}

#[test]
fn engine_never_loses_to_any_reply() {
    // The engine plays O against every possible X line.
    fn explore(board: Board) {
        for (_, after_x) in board.iter_children(Player::One) {
            match after_x.outcome() {
                GameOutcome::Win(Player::One) => panic!("engine lost on {after_x:?}"),
                GameOutcome::Win(Player::Two) => unreachable!(),
                GameOutcome::Draw => continue,
                GameOutcome::InProgress => {}
            }

            let mv = choose_move(after_x, Player::Two).expect("engine failed on a live board");
            let mut after_o = after_x;
            after_o
                .apply_move(mv, Player::Two)
                .expect("engine chose an invalid move");

            if after_o.outcome() == GameOutcome::InProgress {
                explore(after_o);
            }
        }
    }

    explore(Board::new());
}
