//! Game rules for Gomoku
//!
//! Freestyle five-in-a-row: five or more stones in a line wins.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, completes_five, find_five, winning_stone, GameOutcome};
