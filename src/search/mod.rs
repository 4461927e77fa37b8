//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - One-ply move ordering
//! - Depth-limited alpha-beta search

pub mod alphabeta;
pub mod movegen;
pub mod ordering;

pub use alphabeta::{
    NodeMove, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, MAX_DEPTH, SCORE_BOUND,
};
pub use movegen::generate_moves;
pub use ordering::{MoveOrderer, OrderingPolicy};
