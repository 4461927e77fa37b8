//! Main AI engine integrating all search components
//!
//! `AIEngine` owns the configuration and the searcher, and is what a
//! presentation layer talks to: it picks the engine's reply on the shared
//! board and answers win queries.
//!
//! # Search Priority
//!
//! 1. **Immediate win**: complete an AI five if one is available
//! 2. **Defense**: block the cell that would complete a human five
//! 3. **Alpha-beta**: depth-limited search for everything else
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::with_depth(2);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Player).unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, info, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::eval::{Evaluator, Score};
use crate::rules::{check_win, completes_five, GameOutcome};
use crate::search::{generate_moves, SearchResult, Searcher, MAX_DEPTH};

/// How the engine chose its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes an AI five
    ImmediateWin,
    /// Takes the cell that would complete a human five
    Defense,
    /// Depth-limited alpha-beta
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` when there is no legal move
    pub best_move: Option<Pos>,
    /// Minimax value from the engine's point of view
    pub score: Score,
    /// Depth searched
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Which stage produced the move
    pub search_type: SearchType,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms,
            search_type: SearchType::AlphaBeta,
        }
    }
}

/// The automated opponent
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            searcher: config.searcher(),
            config,
        }
    }

    /// Engine with a validated custom configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            searcher: config.searcher(),
            config,
        })
    }

    /// Default configuration at a different depth.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        let mut engine = Self::new();
        engine.set_depth(depth);
        engine
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn evaluator(&self) -> &Evaluator {
        self.searcher.evaluator()
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    /// Set the search depth, clamped to `1..=MAX_DEPTH`.
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth.clamp(1, MAX_DEPTH);
    }

    /// Best move at the configured depth. `None` means no legal move.
    ///
    /// The board must hold at least one stone. It is used as scratch space
    /// during the search and is unchanged when this returns.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Best move at an explicit depth, clamped like [`Self::set_depth`].
    #[must_use]
    pub fn find_best_move(&mut self, board: &mut Board, depth: u8) -> Option<Pos> {
        self.search_timed(board, depth.clamp(1, MAX_DEPTH)).best_move
    }

    /// Best move at the configured depth, with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        self.search_timed(board, self.config.depth)
    }

    fn search_timed(&mut self, board: &mut Board, depth: u8) -> MoveResult {
        let start = Instant::now();
        let mut result = match self.forced_move(board, depth) {
            Some(forced) => forced,
            None => MoveResult::from_search(self.searcher.search(board, depth), 0),
        };
        #[allow(clippy::cast_possible_truncation)]
        let time_ms = start.elapsed().as_millis() as u64;
        result.time_ms = time_ms;

        match result.best_move {
            Some(pos) => info!(
                "engine plays {} ({:?}, score {}, depth {}, {} nodes, {}ms)",
                pos, result.search_type, result.score, result.depth, result.nodes, time_ms
            ),
            None => warn!("no legal move at depth {} ({} stones)", depth, board.stone_count()),
        }

        result
    }

    /// A move that needs no search: an AI five, or else the cell that
    /// would give the human five.
    ///
    /// The static evaluation cannot tell an open four from a dead one near
    /// the edge, so a shallow search may not see that it must block.
    fn forced_move(&self, board: &mut Board, depth: u8) -> Option<MoveResult> {
        let view: &Board = board;
        let candidates = generate_moves(view);
        let (pos, search_type) = completion(view, &candidates, Stone::Ai)
            .map(|pos| (pos, SearchType::ImmediateWin))
            .or_else(|| {
                completion(view, &candidates, Stone::Player).map(|pos| (pos, SearchType::Defense))
            })?;
        debug!("{search_type:?} at {pos} before search");

        let score = {
            let child = board.place_scoped(pos, Stone::Ai);
            self.evaluator().evaluate_position(&child)
        };
        Some(MoveResult {
            best_move: Some(pos),
            score,
            depth,
            nodes: 1,
            cutoffs: 0,
            time_ms: 0,
            search_type,
        })
    }

    /// Check for five in a row.
    #[must_use]
    pub fn check_win(&self, board: &Board) -> GameOutcome {
        check_win(board, self.evaluator())
    }
}

/// First candidate, in row-major order, that gives `side` five.
fn completion(board: &Board, candidates: &[Pos], side: Stone) -> Option<Pos> {
    candidates
        .iter()
        .copied()
        .find(|&pos| completes_five(board, pos, side))
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
