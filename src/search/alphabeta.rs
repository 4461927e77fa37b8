//! Depth-limited alpha-beta search
//!
//! The engine is always the maximizing side and the human the minimizing
//! side, with separate code paths for each. Every node fully recomputes from
//! the board: no transposition table, no iterative deepening.
//!
//! Moves are tried on the caller's board through scoped placements, so each
//! stone is taken back when its branch returns or is cut off and the board
//! is unchanged once the search returns.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Player).unwrap();
//!
//! let mut searcher = Searcher::default();
//! let result = searcher.search(&mut board, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::{Evaluator, Score};

use super::{generate_moves, MoveOrderer};

/// Initial alpha-beta bound. Far outside any reachable evaluation, so the
/// first searched move always replaces it.
pub const SCORE_BOUND: Score = 1_000_000_000_000_000;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 4;

/// Deepest search the engine accepts
pub const MAX_DEPTH: u8 = 8;

/// What a search node chose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMove {
    /// Depth exhausted; the score is a static evaluation.
    Leaf,
    /// No candidate moves; the score is the initial bound.
    NoCandidates,
    Chosen(Pos),
}

impl NodeMove {
    #[inline]
    pub fn pos(self) -> Option<Pos> {
        match self {
            NodeMove::Chosen(pos) => Some(pos),
            NodeMove::Leaf | NodeMove::NoCandidates => None,
        }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Static evaluations at depth 0
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when there is no legal move
    pub best_move: Option<Pos>,
    /// Minimax value of the root
    pub score: Score,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Alpha-beta searcher over a caller-owned board
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    evaluator: Evaluator,
    orderer: MoveOrderer,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(evaluator: Evaluator, orderer: MoveOrderer) -> Self {
        Self {
            evaluator,
            orderer,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    #[inline]
    pub fn orderer(&self) -> &MoveOrderer {
        &self.orderer
    }

    /// Search `depth` plies with the engine to move. The root always
    /// searches at least one ply, so `best_move` is `None` only when there
    /// is no candidate (stalemate, or an empty board).
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;
        self.stats = SearchStats::default();
        let start = Instant::now();

        let (score, node_move) = self.alpha_beta(board, depth, -SCORE_BOUND, SCORE_BOUND, true);
        debug_assert!(board.is_consistent(), "search left the board inconsistent");

        debug!(
            "searched depth {} in {:?}: {} nodes, {} leaves, {} cutoffs, score {}, move {:?}",
            depth,
            start.elapsed(),
            self.nodes,
            self.stats.leaves,
            self.stats.cutoffs,
            score,
            node_move
        );

        SearchResult {
            best_move: node_move.pos(),
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Root call: the chosen move only. `None` means no legal move.
    #[must_use]
    pub fn find_best_move(&mut self, board: &mut Board, depth: u8) -> Option<Pos> {
        self.search(board, depth).best_move
    }

    /// Recursive alpha-beta. The engine places when `maximizing`, the
    /// human otherwise.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Score, NodeMove) {
        self.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return (self.evaluator.evaluate_position(board), NodeMove::Leaf);
        }

        let candidates = generate_moves(board);
        let moves = self
            .orderer
            .order_moves(board, &self.evaluator, candidates, maximizing);

        if maximizing {
            let mut best_score = -SCORE_BOUND;
            let mut best_move = NodeMove::NoCandidates;
            for mov in moves {
                let score = {
                    let mut child = board.place_scoped(mov, Stone::Ai);
                    self.alpha_beta(&mut child, depth - 1, alpha, beta, false).0
                };
                // The first move is taken even at the bound
                if score > best_score || best_move == NodeMove::NoCandidates {
                    best_score = score;
                    best_move = NodeMove::Chosen(mov);
                }
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best_score, best_move)
        } else {
            let mut best_score = SCORE_BOUND;
            let mut best_move = NodeMove::NoCandidates;
            for mov in moves {
                let score = {
                    let mut child = board.place_scoped(mov, Stone::Player);
                    self.alpha_beta(&mut child, depth - 1, alpha, beta, true).0
                };
                if score < best_score || best_move == NodeMove::NoCandidates {
                    best_score = score;
                    best_move = NodeMove::Chosen(mov);
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best_score, best_move)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::eval::{DirectionSet, PatternConfig, PatternScore, PatternTable};

    fn place_all(board: &mut Board, stones: &[(u8, u8)], side: Stone) {
        for &(x, y) in stones {
            board.place_stone(Pos::new(x, y), side).unwrap();
        }
    }

    #[test]
    fn test_search_empty_board_has_no_move() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -SCORE_BOUND);
    }

    #[test]
    fn test_depth_zero_is_leaf() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Player).unwrap();

        let (score, node_move) = searcher.alpha_beta(&mut board, 0, -SCORE_BOUND, SCORE_BOUND, true);
        assert_eq!(node_move, NodeMove::Leaf);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_depth_zero_root_still_moves() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Player).unwrap();

        let result = searcher.search(&mut board, 0);
        assert_eq!(result.depth, 1);
        assert_eq!(result.nodes, 9);
        assert!(result.best_move.is_some());
        assert!(searcher.find_best_move(&mut board, 0).is_some());
    }

    #[test]
    fn test_scores_at_bound_still_choose_a_move() {
        // Every leaf falls below the initial bound
        let table = PatternTable::new(&PatternConfig {
            win_score: SCORE_BOUND,
            ..PatternConfig::default()
        });
        let evaluator = Evaluator::with_table(Arc::new(table), DirectionSet::Symmetric, 1.0);
        let mut searcher = Searcher::new(evaluator, MoveOrderer::default());

        let mut board = Board::new();
        place_all(&mut board, &[(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)], Stone::Player);

        let result = searcher.search(&mut board, 1);
        assert!(result.score < -SCORE_BOUND);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_full_board_reports_no_candidates() {
        let mut searcher = Searcher::default();
        let mut board = Board::with_size(5);
        for y in 0..5u8 {
            for x in 0..5u8 {
                let side = if (x / 2 + y) % 2 == 0 { Stone::Player } else { Stone::Ai };
                board.place_stone(Pos::new(x, y), side).unwrap();
            }
        }

        let (score, node_move) = searcher.alpha_beta(&mut board, 3, -SCORE_BOUND, SCORE_BOUND, false);
        assert_eq!(node_move, NodeMove::NoCandidates);
        assert_eq!(score, SCORE_BOUND);
        assert_eq!(searcher.find_best_move(&mut board, 3), None);
    }

    #[test]
    fn test_search_reply_is_adjacent() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Player).unwrap();

        let best = searcher.find_best_move(&mut board, 2).unwrap();
        assert!((i32::from(best.x) - 7).abs() <= 1);
        assert!((i32::from(best.y) - 7).abs() <= 1);
        assert_ne!(best, Pos::new(7, 7));
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();
        place_all(&mut board, &[(3, 5), (4, 5), (5, 5), (6, 5)], Stone::Ai);
        place_all(&mut board, &[(2, 5), (9, 9)], Stone::Player);

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 5)));
        assert!(result.score >= PatternScore::WIN);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();
        place_all(&mut board, &[(3, 5), (4, 5), (5, 5), (6, 5)], Stone::Player);
        place_all(&mut board, &[(2, 5)], Stone::Ai);

        let result = searcher.search(&mut board, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 5)));
    }

    #[test]
    fn test_search_restores_board() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (8, 8)], Stone::Player);
        place_all(&mut board, &[(7, 8)], Stone::Ai);
        let before = board.clone();

        let result = searcher.search(&mut board, 3);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_node_count_grows_with_depth() {
        let mut searcher = Searcher::default();
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Player).unwrap();

        let shallow = searcher.search(&mut board, 1).nodes;
        let deeper = searcher.search(&mut board, 2).nodes;
        assert_eq!(shallow, 9);
        assert!(deeper > shallow);
    }
}
