use tic_tac_toe::{
    Board,
    GameOutcome,
    Move,
    Player,
};

/// Every assignment of the 3 tile values to the 9 tiles, legal or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut n| {
        let mut tiles = [0; 9];
        for tile in tiles.iter_mut() {
            *tile = (n % 3) as u8;
            n /= 3;
        }
        Board::try_from(tiles).expect("invalid board")
    })
}

fn marks(board: Board) -> u32 {
    board.count(Player::One) + board.count(Player::Two)
}

#[test]
fn full_board_is_draw_iff_no_winner() {
    for board in all_boards().filter(|board| board.is_full()) {
        assert_eq!(board.is_draw(), board.winner().is_none(), "{board:?}");
    }
}

#[test]
fn no_winner_with_fewer_than_3_marks() {
    for board in all_boards().filter(|board| marks(*board) < 3) {
        assert_eq!(board.winner(), None, "{board:?}");
    }
}

#[test]
fn outcome_matches_queries() {
    for board in all_boards() {
        let expected = match board.winner() {
            Some(player) => GameOutcome::Win(player),
            None if board.is_draw() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        };
        assert_eq!(board.outcome(), expected, "{board:?}");
    }
}

#[test]
fn every_line_wins() {
    let lines = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for player in [Player::One, Player::Two] {
        for line in lines {
            let mut board = Board::new();
            for index in line {
                let mv = Move::from_index(index).expect("invalid index");
                board.apply_move(mv, player).expect("invalid move");
            }

            let info = board.winner_info().expect("missing winner");
            assert_eq!(info.player, player);
            assert_eq!(info.tile_indexes, line);
        }
    }
}

#[test]
fn legal_moves_are_valid_and_row_major() {
    for board in all_boards().filter(|board| marks(*board) <= 4) {
        let moves: Vec<_> = board.legal_moves().collect();
        assert_eq!(moves.len(), 9 - marks(board) as usize);

        let indexes: Vec<_> = moves.iter().filter_map(|mv| mv.index()).collect();
        assert!(indexes.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(moves.iter().all(|mv| board.is_valid_move(*mv)));
    }
}
