//! Fixed 3x3 board

use super::{Cell, CellIndex, Player, TOTAL_CELLS};

/// Game board, row-major: index = row * 3 + col
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Get cell contents
    #[inline]
    pub fn get(&self, idx: CellIndex) -> Cell {
        self.cells[idx.get()]
    }

    /// Check if the square is empty
    #[inline]
    pub fn is_empty(&self, idx: CellIndex) -> bool {
        self.get(idx).is_empty()
    }

    /// Copy of this board with `player` placed at `idx`.
    /// The caller checks occupancy first; `with_move` overwrites.
    #[inline]
    pub fn with_move(&self, idx: CellIndex, player: Player) -> Board {
        let mut next = *self;
        next.cells[idx.get()] = Cell::from(player);
        next
    }

    /// Raw cells in index order
    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Number of occupied squares
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if the board is full
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == TOTAL_CELLS
    }

    /// Check if no square is occupied
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }
}

impl From<[Cell; TOTAL_CELLS]> for Board {
    fn from(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }
}
