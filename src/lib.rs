//! Gomoku AI engine: freestyle five-in-a-row against a minimax opponent
//!
//! - Square board, 16x16 by default
//! - Five or more in a row wins
//! - The human (`Stone::Player`) always moves first, the engine
//!   (`Stone::Ai`) replies
//!
//! # Architecture
//!
//! - [`board`]: Grid plus the ordered set of occupied cells, with scoped placements
//! - [`eval`]: Pattern table over 6-cell line windows and the static evaluator
//! - [`search`]: Candidate generation, move ordering and alpha-beta
//! - [`rules`]: Win detection
//! - [`engine`]: Engine facade with timing and statistics
//! - [`session`]: Human-versus-engine turn loop
//! - [`config`]: TOML-loadable engine configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, GameStatus, AIEngine};
//!
//! let mut game = Game::new(AIEngine::with_depth(2));
//! let turn = game.play(7, 7).unwrap();
//!
//! if let Some(pos) = turn.ai_move {
//!     println!("AI plays at {pos}");
//! }
//! assert_eq!(turn.status, GameStatus::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError, GameError};
pub use rules::GameOutcome;
pub use session::{Game, GameStatus, Turn};
