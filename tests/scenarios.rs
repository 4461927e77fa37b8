use gomoku::{AIEngine, Board, Game, GameError, GameOutcome, GameStatus, Pos, Stone};

fn place_all(board: &mut Board, stones: &[(u8, u8)], side: Stone) {
    for &(x, y) in stones {
        board.place_stone(Pos::new(x, y), side).unwrap();
    }
}

#[test]
fn engine_replies_next_to_lone_stone() {
    let mut game = Game::new(AIEngine::with_depth(2));
    let turn = game.play(7, 7).unwrap();

    let reply = turn.ai_move.unwrap();
    assert_ne!(reply, Pos::new(7, 7));
    assert!((i32::from(reply.x) - 7).abs() <= 1);
    assert!((i32::from(reply.y) - 7).abs() <= 1);
    assert_eq!(game.board().get(reply), Stone::Ai);
}

/// Human four, engine stones, and the single cell that stops five.
struct BlockCase {
    name: &'static str,
    four: [(u8, u8); 4],
    closed_by: Option<(u8, u8)>,
    block: (u8, u8),
}

const BLOCK_CASES: [BlockCase; 7] = [
    BlockCase {
        name: "east open",
        four: [(3, 5), (4, 5), (5, 5), (6, 5)],
        closed_by: Some((2, 5)),
        block: (7, 5),
    },
    BlockCase {
        name: "west open",
        four: [(3, 5), (4, 5), (5, 5), (6, 5)],
        closed_by: Some((7, 5)),
        block: (2, 5),
    },
    BlockCase {
        name: "north open",
        four: [(9, 3), (9, 4), (9, 5), (9, 6)],
        closed_by: Some((9, 7)),
        block: (9, 2),
    },
    BlockCase {
        name: "diagonal",
        four: [(4, 4), (5, 5), (6, 6), (7, 7)],
        closed_by: Some((3, 3)),
        block: (8, 8),
    },
    BlockCase {
        name: "anti-diagonal",
        four: [(11, 4), (10, 5), (9, 6), (8, 7)],
        closed_by: Some((12, 3)),
        block: (7, 8),
    },
    BlockCase {
        name: "east edge",
        four: [(12, 5), (13, 5), (14, 5), (15, 5)],
        closed_by: None,
        block: (11, 5),
    },
    BlockCase {
        name: "north edge",
        four: [(6, 0), (6, 1), (6, 2), (6, 3)],
        closed_by: None,
        block: (6, 4),
    },
];

#[test]
fn engine_blocks_open_end_of_four() {
    for case in &BLOCK_CASES {
        for depth in 1..=4 {
            let mut board = Board::new();
            place_all(&mut board, &case.four, Stone::Player);
            if let Some(closed) = case.closed_by {
                place_all(&mut board, &[closed], Stone::Ai);
            }

            let mut engine = AIEngine::with_depth(depth);
            assert_eq!(
                engine.get_move(&mut board),
                Some(Pos::new(case.block.0, case.block.1)),
                "{} at depth {depth}",
                case.name
            );
        }
    }
}

/// Every four with exactly one open end, on every axis and at every
/// placement, with the closed end held by an engine stone or the border.
#[test]
fn engine_blocks_every_half_open_four_at_depth_one() {
    let size: i32 = 16;
    let mut engine = AIEngine::with_depth(1);
    let mut checked = 0;

    for (dx, dy) in [(1, 0), (1, 1), (0, 1), (-1, 1)] {
        for y in 0..size {
            for x in 0..size {
                let cell = |i: i32| {
                    let (cx, cy) = (x + i * dx, y + i * dy);
                    ((0..size).contains(&cx) && (0..size).contains(&cy))
                        .then(|| Pos::new(cx as u8, cy as u8))
                };
                let four: Option<Vec<Pos>> = (0..4).map(cell).collect();
                let Some(four) = four else { continue };

                for (open, closed) in [(cell(4), cell(-1)), (cell(-1), cell(4))] {
                    let Some(open) = open else { continue };
                    let mut board = Board::new();
                    for &pos in &four {
                        board.place_stone(pos, Stone::Player).unwrap();
                    }
                    if let Some(closed) = closed {
                        board.place_stone(closed, Stone::Ai).unwrap();
                    }

                    assert_eq!(
                        engine.get_move(&mut board),
                        Some(open),
                        "four from ({x}, {y}) along ({dx}, {dy})"
                    );
                    checked += 1;
                }
            }
        }
    }
    assert!(checked > 1000);
}

#[test]
fn engine_completes_own_four() {
    for depth in 1..=4 {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 2), (9, 3), (9, 4), (9, 5)], Stone::Ai);
        place_all(&mut board, &[(9, 1), (3, 12)], Stone::Player);

        let mut engine = AIEngine::with_depth(depth);
        let best = engine.get_move(&mut board);
        assert_eq!(best, Some(Pos::new(9, 6)), "depth {depth}");

        board.place_stone(Pos::new(9, 6), Stone::Ai).unwrap();
        assert_eq!(engine.check_win(&board), GameOutcome::AiWin);
    }
}

#[test]
fn human_five_ends_game_before_engine_moves() {
    let mut game = Game::new(AIEngine::with_depth(1));
    let mut status = GameStatus::InProgress;
    let mut turns = 0;

    // The engine is free to block, so steer around its stones.
    for x in 0..16 {
        if !game.board().is_empty(Pos::new(x, 12)) {
            continue;
        }
        let turn = game.play(i32::from(x), 12).unwrap();
        turns += 1;
        status = turn.status;
        if status.is_over() {
            assert_eq!(turn.ai_move, None);
            break;
        }
    }

    if status == GameStatus::PlayerWon {
        assert!(turns >= 5);
        assert_eq!(
            game.play(0, 0).unwrap_err(),
            GameError::GameOver(GameStatus::PlayerWon)
        );
    } else {
        // The engine blocked every run on the row; it must still be alive.
        assert!(matches!(status, GameStatus::InProgress | GameStatus::AiWon));
    }
}

#[test]
fn invalid_moves_leave_game_untouched() {
    let mut game = Game::new(AIEngine::with_depth(1));
    game.play(7, 7).unwrap();
    let before = game.board().clone();

    assert!(game.play(16, 0).is_err());
    assert!(game.play(0, -3).is_err());
    assert!(game.play(7, 7).is_err());
    assert_eq!(game.board(), &before);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn full_board_is_stalemate() {
    let mut board = Board::with_size(5);
    for y in 0..5u8 {
        for x in 0..5u8 {
            // Stripes of two avoid any five in a row or column.
            let side = if (x / 2 + y) % 2 == 0 { Stone::Player } else { Stone::Ai };
            board.place_stone(Pos::new(x, y), side).unwrap();
        }
    }
    assert!(board.is_full());

    let mut engine = AIEngine::with_depth(2);
    let result = engine.get_move_with_stats(&mut board);
    assert_eq!(result.best_move, None);
}
