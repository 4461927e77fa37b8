//! Heuristic evaluation function for Gomoku board positions
//!
//! Every stone is scored by reading a pattern window along each sampled
//! direction and taking the best table score; a win window short-circuits
//! to the win score. Board scores are per-side sums, and the position score
//! weights the human side's total more heavily so the search prefers
//! blocking over building.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone, NEIGHBOURS};

use super::patterns::{PatternTable, Symbol, Window, WINDOW_LEN};
use super::Score;

/// Weight applied to the human side's board score
pub const DEFAULT_DEFENSE_WEIGHT: f64 = 1.5;

/// Directions sampled per stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionSet {
    /// One direction per axis: E, SE, S, SW. A four whose only open end
    /// points west or north reads as a dead window from this side.
    Forward,
    /// All 8 directions, so each axis is read from both ends. Scores are
    /// invariant under board rotation and reflection.
    #[default]
    Symmetric,
}

impl DirectionSet {
    #[inline]
    pub fn directions(self) -> &'static [(i32, i32)] {
        match self {
            DirectionSet::Forward => &NEIGHBOURS[..4],
            DirectionSet::Symmetric => &NEIGHBOURS,
        }
    }
}

/// Per-side board totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardScores {
    pub player: Score,
    pub ai: Score,
}

/// Static evaluator over a shared [`PatternTable`]
#[derive(Debug, Clone)]
pub struct Evaluator {
    table: Arc<PatternTable>,
    directions: DirectionSet,
    defense_weight: f64,
}

impl Evaluator {
    /// Standard table, default directions and defense weight.
    pub fn new() -> Self {
        Self::with_table(
            PatternTable::standard(),
            DirectionSet::default(),
            DEFAULT_DEFENSE_WEIGHT,
        )
    }

    pub fn with_table(table: Arc<PatternTable>, directions: DirectionSet, defense_weight: f64) -> Self {
        Self {
            table,
            directions,
            defense_weight,
        }
    }

    #[inline]
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    #[inline]
    pub fn win_score(&self) -> Score {
        self.table.win_score()
    }

    #[inline]
    pub fn defense_weight(&self) -> f64 {
        self.defense_weight
    }

    #[inline]
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Base-3 code of the window read from `side`'s point of view, starting
    /// one cell behind `pos`. Off-board cells read as blocked.
    #[inline]
    fn window_code(board: &Board, pos: Pos, side: Stone, (dx, dy): (i32, i32)) -> usize {
        let (x, y) = (i32::from(pos.x), i32::from(pos.y));
        let mut code = 0;
        for i in -1..(WINDOW_LEN as i32 - 1) {
            let symbol = match board.get_xy(x + dx * i, y + dy * i) {
                Some(Stone::Empty) => Symbol::Empty,
                Some(s) if s == side => Symbol::Own,
                _ => Symbol::Blocked,
            };
            code = code * 3 + symbol as usize;
        }
        code
    }

    /// The window the evaluator reads for the stone at `pos` in direction
    /// `dir`.
    pub fn window(&self, board: &Board, pos: Pos, dir: (i32, i32)) -> Window {
        Window::from_code(Self::window_code(board, pos, board.get(pos), dir))
    }

    /// Score the stone at `pos`: the best pattern over the sampled
    /// directions, or the win score as soon as one window completes five.
    /// Empty cells score 0.
    pub fn evaluate_stone(&self, board: &Board, pos: Pos) -> Score {
        let side = board.get(pos);
        if side == Stone::Empty {
            return 0;
        }

        let mut best = 0;
        for &dir in self.directions.directions() {
            let code = Self::window_code(board, pos, side, dir);
            if self.table.is_win(code) {
                return self.table.win_score();
            }
            best = best.max(self.table.score(code));
        }
        best
    }

    #[inline]
    pub fn is_win_score(&self, score: Score) -> bool {
        score >= self.table.win_score()
    }

    /// Sum stone scores per side.
    pub fn evaluate_board(&self, board: &Board) -> BoardScores {
        let mut scores = BoardScores::default();
        for &pos in board.stones() {
            let score = self.evaluate_stone(board, pos);
            match board.get(pos) {
                Stone::Player => scores.player += score,
                Stone::Ai => scores.ai += score,
                Stone::Empty => {}
            }
        }
        scores
    }

    /// Position score from the engine's point of view:
    /// `ai - player * defense_weight`.
    pub fn evaluate_position(&self, board: &Board) -> Score {
        let scores = self.evaluate_board(board);
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let weighted = (scores.player as f64 * self.defense_weight).round() as Score;
        scores.ai - weighted
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
