//! Candidate move generation
//!
//! Only empty cells touching an existing stone (king-move distance 1) are
//! considered, which keeps the branching factor small enough for a
//! fixed-depth search.

use std::collections::BTreeSet;

use crate::board::{Board, Pos, NEIGHBOURS};

/// Empty cells adjacent to any stone, in row-major order.
///
/// Expects at least one stone on the board; an empty board has no
/// candidates and yields an empty list.
#[must_use]
pub fn generate_moves(board: &Board) -> Vec<Pos> {
    let mut moves = BTreeSet::new();
    for &pos in board.stones() {
        for &(dx, dy) in &NEIGHBOURS {
            if let Some(next) = pos.offset(dx, dy) {
                if board.is_empty(next) {
                    moves.insert(next);
                }
            }
        }
    }
    moves.into_iter().collect()
}
