//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers:
//! - Line patterns (twos, threes, fours) looked up in a precomputed table
//! - Five-in-a-row as a dominating win score
//! - Defensive weighting of the human side's patterns

pub mod heuristic;
pub mod patterns;

/// Evaluation score. Positive favours the engine.
pub type Score = i64;

pub use heuristic::{BoardScores, DirectionSet, Evaluator, DEFAULT_DEFENSE_WEIGHT};
pub use patterns::{Motif, PatternConfig, PatternScore, PatternTable, Symbol, Window};
