//! Board structure with occupied-cell tracking

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::error::BoardError;

/// Game board: a square grid plus the ordered set of occupied cells.
///
/// A position is in `stones` iff its cell is not [`Stone::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Stone>,
    stones: BTreeSet<Pos>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    pub fn with_size(size: u8) -> Self {
        let n = usize::from(size);
        Self {
            size,
            cells: vec![Stone::Empty; n * n],
            stones: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.y) * usize::from(self.size) + usize::from(pos.x)
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Validate signed caller coordinates.
    pub fn pos(&self, x: i32, y: i32) -> Result<Pos, BoardError> {
        let out_of_bounds = || BoardError::OutOfBounds { x, y, size: self.size };
        let px = u8::try_from(x).map_err(|_| out_of_bounds())?;
        let py = u8::try_from(y).map_err(|_| out_of_bounds())?;
        let pos = Pos::new(px, py);
        if self.in_bounds(pos) {
            Ok(pos)
        } else {
            Err(out_of_bounds())
        }
    }

    /// Get stone at position. Out-of-bounds positions read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.in_bounds(pos) {
            self.cells[self.index(pos)]
        } else {
            Stone::Empty
        }
    }

    /// Get stone at signed coordinates, `None` when off the board.
    #[inline]
    pub fn get_xy(&self, x: i32, y: i32) -> Option<Stone> {
        let size = i32::from(self.size);
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        #[allow(clippy::cast_sign_loss)]
        let idx = y as usize * usize::from(self.size) + x as usize;
        Some(self.cells[idx])
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[self.index(pos)] == Stone::Empty
    }

    /// Place a stone for `side`.
    ///
    /// Rejects out-of-bounds or occupied positions and [`Stone::Empty`].
    pub fn place_stone(&mut self, pos: Pos, side: Stone) -> Result<(), BoardError> {
        if side == Stone::Empty {
            return Err(BoardError::EmptyStone);
        }
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds {
                x: i32::from(pos.x),
                y: i32::from(pos.y),
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.set(pos, side);
        Ok(())
    }

    /// Remove a stone. No-op on empty or out-of-bounds positions.
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.cells[idx] = Stone::Empty;
            self.stones.remove(&pos);
        }
    }

    /// Place a stone that is removed again when the returned guard drops.
    ///
    /// # Panics
    ///
    /// If `pos` is not an empty in-bounds cell or `side` is
    /// [`Stone::Empty`]. Search only passes cells from move generation.
    #[inline]
    pub fn place_scoped(&mut self, pos: Pos, side: Stone) -> Placement<'_> {
        assert!(self.is_empty(pos), "scoped placement on {pos} which is not empty");
        assert!(side != Stone::Empty, "scoped placement of an empty stone");
        self.set(pos, side);
        Placement { board: self, pos }
    }

    #[inline]
    fn set(&mut self, pos: Pos, side: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = side;
        self.stones.insert(pos);
    }

    /// Occupied positions in row-major order
    #[inline]
    pub fn stones(&self) -> &BTreeSet<Pos> {
        &self.stones
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones.len() == self.cells.len()
    }

    /// Occupied set and grid agree.
    pub fn is_consistent(&self) -> bool {
        let occupied = self.cells.iter().filter(|&&s| s != Stone::Empty).count();
        occupied == self.stones.len()
            && self
                .stones
                .iter()
                .all(|&p| self.in_bounds(p) && self.cells[self.index(p)] != Stone::Empty)
    }

    /// Clear all stones, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.stones.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A stone placed for the lifetime of the guard.
///
/// Derefs to the board so recursion can keep mutating it; the stone is
/// removed on drop, whichever way the scope is left.
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placement<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}
