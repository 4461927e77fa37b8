//! Win condition checking
//!
//! A side wins with five or more stones in a row along any axis. The
//! engine-facing check reuses the evaluator: a stone that anchors a five
//! scores the win sentinel. [`find_five`] is a direct line scan used to
//! report the winning line, and [`completes_five`] tests a single empty
//! cell before a stone is placed there.

use crate::board::{Board, Pos, Stone, NEIGHBOURS};
use crate::eval::Evaluator;

/// Result of a win query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    NoWin,
    PlayerWin,
    AiWin,
}

impl GameOutcome {
    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameOutcome::NoWin => None,
            GameOutcome::PlayerWin => Some(Stone::Player),
            GameOutcome::AiWin => Some(Stone::Ai),
        }
    }
}

/// First stone, in board order, that scores the win sentinel.
pub fn winning_stone(board: &Board, evaluator: &Evaluator) -> Option<Pos> {
    board
        .stones()
        .iter()
        .copied()
        .find(|&pos| evaluator.is_win_score(evaluator.evaluate_stone(board, pos)))
}

/// Check for a winner. Pure query.
pub fn check_win(board: &Board, evaluator: &Evaluator) -> GameOutcome {
    match winning_stone(board, evaluator).map(|pos| board.get(pos)) {
        Some(Stone::Player) => GameOutcome::PlayerWin,
        Some(Stone::Ai) => GameOutcome::AiWin,
        _ => GameOutcome::NoWin,
    }
}

/// Find five consecutive stones of `side`, scanning from the start of each
/// run so every line is visited once.
pub fn find_five(board: &Board, side: Stone) -> Option<[Pos; 5]> {
    for &pos in board.stones() {
        if board.get(pos) != side {
            continue;
        }
        for &(dx, dy) in &NEIGHBOURS[..4] {
            let starts_run = pos
                .offset(-dx, -dy)
                .map_or(true, |prev| board.get(prev) != side);
            if !starts_run {
                continue;
            }

            let mut line = [pos; 5];
            let mut len = 1;
            let mut cur = pos;
            while len < 5 {
                match cur.offset(dx, dy) {
                    Some(next) if board.in_bounds(next) && board.get(next) == side => {
                        line[len] = next;
                        len += 1;
                        cur = next;
                    }
                    _ => break,
                }
            }
            if len == 5 {
                return Some(line);
            }
        }
    }
    None
}

/// Whether a `side` stone on `pos` would sit in five or more in a row.
///
/// Counts outward from `pos` along each axis; the cell itself is not read.
pub fn completes_five(board: &Board, pos: Pos, side: Stone) -> bool {
    NEIGHBOURS[..4].iter().any(|&(dx, dy)| {
        1 + run_length(board, pos, dx, dy, side) + run_length(board, pos, -dx, -dy, side) >= 5
    })
}

fn run_length(board: &Board, from: Pos, dx: i32, dy: i32, side: Stone) -> usize {
    let mut len = 0;
    let mut cur = from;
    while let Some(next) = cur.offset(dx, dy) {
        if !board.in_bounds(next) || board.get(next) != side {
            break;
        }
        len += 1;
        cur = next;
    }
    len
}
