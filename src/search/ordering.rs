//! One-ply move ordering
//!
//! Each candidate is scored by placing the mover's stone, evaluating that
//! single stone, and taking it back. Ordering only affects how much the
//! alpha-beta search can prune, never the value it returns.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::eval::{Evaluator, Score};

/// Sort direction per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Ascending when maximizing, descending when minimizing.
    // TODO: measure cutoffs against BestFirst on recorded games before
    // changing the default; ascending puts the engine's weakest replies first.
    #[default]
    Mirrored,
    /// Highest one-ply score first for both sides.
    BestFirst,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveOrderer {
    policy: OrderingPolicy,
}

impl MoveOrderer {
    pub fn new(policy: OrderingPolicy) -> Self {
        Self { policy }
    }

    #[inline]
    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// One-ply score of `pos` for `side`. The board is left unchanged.
    pub fn score_move(board: &mut Board, evaluator: &Evaluator, pos: Pos, side: Stone) -> Score {
        let placed = board.place_scoped(pos, side);
        evaluator.evaluate_stone(&placed, pos)
    }

    /// Order candidates for the side to move: the engine when `maximizing`,
    /// the human otherwise. Equal scores keep their input order.
    #[must_use]
    pub fn order_moves(
        &self,
        board: &mut Board,
        evaluator: &Evaluator,
        moves: Vec<Pos>,
        maximizing: bool,
    ) -> Vec<Pos> {
        let side = if maximizing { Stone::Ai } else { Stone::Player };
        let mut scored: Vec<(Pos, Score)> = moves
            .into_iter()
            .map(|pos| (pos, Self::score_move(board, evaluator, pos, side)))
            .collect();

        let ascending = match self.policy {
            OrderingPolicy::Mirrored => maximizing,
            OrderingPolicy::BestFirst => false,
        };
        if ascending {
            scored.sort_by_key(|&(_, score)| score);
        } else {
            scored.sort_by_key(|&(_, score)| Reverse(score));
        }

        scored.into_iter().map(|(pos, _)| pos).collect()
    }
}
