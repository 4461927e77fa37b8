//! Game session: the human-versus-engine turn loop without rendering
//!
//! A session owns the board and the engine. Each human placement is
//! validated and applied, the engine replies on the same board, and the
//! status is updated after both stones.

use log::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{ConfigError, GameError};
use crate::rules::GameOutcome;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    PlayerWon,
    AiWon,
    /// The engine had no legal reply
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl From<GameOutcome> for GameStatus {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::NoWin => GameStatus::InProgress,
            GameOutcome::PlayerWin => GameStatus::PlayerWon,
            GameOutcome::AiWin => GameStatus::AiWon,
        }
    }
}

/// What happened in one call to [`Game::play`]
#[derive(Debug, Clone)]
pub struct Turn {
    /// The engine's reply, if it moved
    pub ai_move: Option<Pos>,
    pub status: GameStatus,
    /// Search statistics when the engine searched
    pub result: Option<MoveResult>,
}

/// Human (Player) versus engine (Ai); the human always moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    engine: AIEngine,
    last_ai_move: Option<Pos>,
    status: GameStatus,
}

impl Game {
    /// New game on a board sized from the engine's configuration.
    pub fn new(engine: AIEngine) -> Self {
        Self {
            board: Board::with_size(engine.config().board_size),
            engine,
            last_ai_move: None,
            status: GameStatus::InProgress,
        }
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(AIEngine::with_config(config)?))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    /// The engine's most recent stone
    #[inline]
    pub fn last_ai_move(&self) -> Option<Pos> {
        self.last_ai_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Play a human stone at `(x, y)` and let the engine reply.
    ///
    /// Out-of-bounds or occupied coordinates are rejected without changing
    /// the game. A human five ends the game before the engine moves.
    pub fn play(&mut self, x: i32, y: i32) -> Result<Turn, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let pos = self.board.pos(x, y)?;
        self.board.place_stone(pos, Stone::Player)?;
        debug!("player plays {pos}");

        self.status = self.engine.check_win(&self.board).into();
        if self.status.is_over() {
            info!("game over after player move: {:?}", self.status);
            return Ok(Turn {
                ai_move: None,
                status: self.status,
                result: None,
            });
        }

        let result = self.engine.get_move_with_stats(&mut self.board);
        let Some(ai_move) = result.best_move else {
            self.status = GameStatus::Stalemate;
            info!("game over: engine has no legal move");
            return Ok(Turn {
                ai_move: None,
                status: self.status,
                result: Some(result),
            });
        };

        self.board.place_stone(ai_move, Stone::Ai)?;
        self.last_ai_move = Some(ai_move);
        self.status = self.engine.check_win(&self.board).into();
        if self.status.is_over() {
            info!("game over after engine move: {:?}", self.status);
        }

        Ok(Turn {
            ai_move: Some(ai_move),
            status: self.status,
            result: Some(result),
        })
    }

    /// Start over with an empty board.
    pub fn reset(&mut self) {
        self.board.clear();
        self.last_ai_move = None;
        self.status = GameStatus::InProgress;
    }
}
