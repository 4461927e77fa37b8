//! Pattern table for Gomoku evaluation
//!
//! A pattern window is 6 cells read along one direction, starting one cell
//! behind the stone being scored. Each cell is one of three symbols, so a
//! window encodes to a base-3 integer below 3^6 and the table is a flat
//! array indexed by that code.
//!
//! Compact notation used throughout: `o` own stone, `x` blocked (opponent
//! stone or off the board), `.` empty.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Score;

/// Number of cells in a pattern window
pub const WINDOW_LEN: usize = 6;

/// Number of distinct windows (3^6)
pub const TABLE_SIZE: usize = 729;

/// Windows that complete five in a row
const WIN_WINDOWS: [&str; 4] = [".ooooo", "ooooo.", "xooooo", "ooooox"];

/// Default pattern scores
pub struct PatternScore;

impl PatternScore {
    /// Five in a row. Dominates any sum of regular pattern scores.
    pub const WIN: Score = 100_000_000;

    /// `oooo`
    pub const FOUR: Score = 1_200;
    /// `ooo`
    pub const THREE: Score = 900;
    /// `oo`
    pub const TWO: Score = 400;

    /// Subtracted for a motif broken by one empty cell
    pub const GAP_PENALTY: Score = 100;
    /// Subtracted for a motif closed on one side
    pub const BLOCKED_PENALTY: Score = 200;
}

/// One cell of a pattern window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    Empty = 0,
    Own = 1,
    Blocked = 2,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '.' => Some(Symbol::Empty),
            'o' => Some(Symbol::Own),
            'x' => Some(Symbol::Blocked),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::Empty => '.',
            Symbol::Own => 'o',
            Symbol::Blocked => 'x',
        }
    }

    #[inline]
    fn from_digit(d: usize) -> Symbol {
        match d {
            0 => Symbol::Empty,
            1 => Symbol::Own,
            _ => Symbol::Blocked,
        }
    }
}

/// A fixed-width pattern window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window([Symbol; WINDOW_LEN]);

impl Window {
    pub fn new(symbols: [Symbol; WINDOW_LEN]) -> Self {
        Self(symbols)
    }

    /// Right-pad `symbols` with empty cells. `None` if longer than a window.
    pub fn padded(symbols: &[Symbol]) -> Option<Window> {
        if symbols.len() > WINDOW_LEN {
            return None;
        }
        let mut cells = [Symbol::Empty; WINDOW_LEN];
        cells[..symbols.len()].copy_from_slice(symbols);
        Some(Window(cells))
    }

    /// Parse compact notation, right-padding short input with `.`
    pub fn parse(s: &str) -> Option<Window> {
        let symbols = s.chars().map(Symbol::from_char).collect::<Option<Vec<_>>>()?;
        Self::padded(&symbols)
    }

    /// Base-3 code, first cell most significant
    #[inline]
    pub fn code(&self) -> usize {
        self.0.iter().fold(0, |acc, &s| acc * 3 + s as usize)
    }

    pub fn from_code(mut code: usize) -> Window {
        let mut cells = [Symbol::Empty; WINDOW_LEN];
        for cell in cells.iter_mut().rev() {
            *cell = Symbol::from_digit(code % 3);
            code /= 3;
        }
        Window(cells)
    }

    pub fn symbols(&self) -> &[Symbol; WINDOW_LEN] {
        &self.0
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s.to_char()))
    }
}

/// A base motif: a run of own stones with its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motif {
    pub shape: String,
    pub score: Score,
}

impl Motif {
    pub fn new(shape: &str, score: Score) -> Self {
        Self {
            shape: shape.to_string(),
            score,
        }
    }
}

/// Inputs to [`PatternTable::new`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub motifs: Vec<Motif>,
    pub gap_penalty: Score,
    pub blocked_penalty: Score,
    pub win_score: Score,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            motifs: vec![
                Motif::new("oooo", PatternScore::FOUR),
                Motif::new("ooo", PatternScore::THREE),
                Motif::new("oo", PatternScore::TWO),
            ],
            gap_penalty: PatternScore::GAP_PENALTY,
            blocked_penalty: PatternScore::BLOCKED_PENALTY,
            win_score: PatternScore::WIN,
        }
    }
}

impl PatternConfig {
    /// Check the score ordering: verbatim > gapped > blocked > 0, all below
    /// the win score. Returns a description of the first violation.
    pub fn check(&self) -> Result<(), String> {
        if self.motifs.is_empty() {
            return Err("patterns.motifs must not be empty".into());
        }
        if self.gap_penalty <= 0 || self.blocked_penalty <= self.gap_penalty {
            return Err("patterns require 0 < gap_penalty < blocked_penalty".into());
        }
        for motif in &self.motifs {
            let len = motif.shape.chars().count();
            if !(1..=WINDOW_LEN - 2).contains(&len) || motif.shape.chars().any(|c| c != 'o') {
                return Err(format!(
                    "motif '{}' must be 1 to {} 'o' characters",
                    motif.shape,
                    WINDOW_LEN - 2
                ));
            }
            if motif.score <= self.blocked_penalty {
                return Err(format!(
                    "motif '{}' score {} must exceed blocked_penalty {}",
                    motif.shape, motif.score, self.blocked_penalty
                ));
            }
            if motif.score >= self.win_score {
                return Err(format!(
                    "motif '{}' score {} must be below win_score {}",
                    motif.shape, motif.score, self.win_score
                ));
            }
        }
        Ok(())
    }
}

/// Direct-indexed window → score table
#[derive(Debug, Clone)]
pub struct PatternTable {
    scores: [Score; TABLE_SIZE],
    wins: [bool; TABLE_SIZE],
    win_score: Score,
}

static STANDARD: Lazy<Arc<PatternTable>> =
    Lazy::new(|| Arc::new(PatternTable::new(&PatternConfig::default())));

impl PatternTable {
    /// Build the table from base motifs.
    ///
    /// Each motif is registered verbatim, with one empty cell inserted at
    /// every position, and closed by a blocked cell on either side (or
    /// behind an empty-then-blocked pair). Colliding windows keep the
    /// highest score. Win windows are registered last.
    pub fn new(config: &PatternConfig) -> Self {
        let mut table = Self {
            scores: [0; TABLE_SIZE],
            wins: [false; TABLE_SIZE],
            win_score: config.win_score,
        };

        for motif in &config.motifs {
            let shape: Vec<Symbol> = motif.shape.chars().filter_map(Symbol::from_char).collect();
            let base = motif.score;

            table.register(&shape, base);

            for i in 0..=shape.len() {
                let mut gapped = shape.clone();
                gapped.insert(i, Symbol::Empty);
                table.register(&gapped, base - config.gap_penalty);
            }

            let blocked = base - config.blocked_penalty;
            let mut closed_after = shape.clone();
            closed_after.push(Symbol::Blocked);
            table.register(&closed_after, blocked);

            let mut closed_before = vec![Symbol::Blocked];
            closed_before.extend_from_slice(&shape);
            table.register(&closed_before, blocked);

            let mut closed_behind_gap = vec![Symbol::Empty, Symbol::Blocked];
            closed_behind_gap.extend_from_slice(&shape);
            table.register(&closed_behind_gap, blocked);
        }

        for win in WIN_WINDOWS {
            if let Some(window) = Window::parse(win) {
                let code = window.code();
                table.wins[code] = true;
                table.scores[code] = config.win_score;
            }
        }

        table
    }

    /// The default table, built on first use and shared afterwards.
    pub fn standard() -> Arc<PatternTable> {
        Arc::clone(&STANDARD)
    }

    fn register(&mut self, symbols: &[Symbol], score: Score) {
        // Longer than a window can never match
        let Some(window) = Window::padded(symbols) else {
            return;
        };
        let code = window.code();
        self.scores[code] = self.scores[code].max(score);
    }

    #[inline]
    pub fn score(&self, code: usize) -> Score {
        self.scores[code]
    }

    #[inline]
    pub fn is_win(&self, code: usize) -> bool {
        self.wins[code]
    }

    #[inline]
    pub fn win_score(&self) -> Score {
        self.win_score
    }

    pub fn lookup(&self, window: &Window) -> Score {
        self.score(window.code())
    }

    /// Number of windows with a non-zero score, wins included
    pub fn len(&self) -> usize {
        self.scores.iter().filter(|&&s| s != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
