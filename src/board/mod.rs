//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::{Board, Placement};

/// Default board side length (coordinates 0..=15)
pub const DEFAULT_BOARD_SIZE: u8 = 16;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    /// Human side
    Player,
    /// Engine side
    Ai,
}

impl Stone {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Player => Stone::Ai,
            Stone::Ai => Stone::Player,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Neighbour at a signed offset, `None` if it would leave the u8 range.
    /// Board bounds are checked by [`Board::in_bounds`].
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        let x = u8::try_from(i32::from(self.x) + dx).ok()?;
        let y = u8::try_from(i32::from(self.y) + dy).ok()?;
        Some(Pos { x, y })
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major board order
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// The 8 king-move offsets
pub const NEIGHBOURS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
