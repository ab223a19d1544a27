//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds the
//! color of a locked block. Uses a flat array so that every row always has
//! exactly `BOARD_WIDTH` cells and the dimensions can never change.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row-major 2D view of the board, as handed to renderers.
pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Indices of rows removed by one clear pass, sorted bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from a row-major grid.
    pub fn from_grid(grid: BoardGrid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells. `y` must be below `BOARD_HEIGHT`.
    pub fn row(&self, y: usize) -> &[Cell] {
        debug_assert!(y < BOARD_HEIGHT as usize, "row {} out of range", y);
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells on the whole board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write the piece's color into every in-bounds filled sub-cell.
    ///
    /// Sub-cells that resolve outside the board (typically above row 0 right
    /// after a spawn) are dropped. Returns how many cells were written.
    pub fn lock_piece(&mut self, piece: &Tetromino) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, Some(piece.color)) {
                written += 1;
            }
        }
        written
    }

    /// Copy of this board with `piece` merged in.
    pub fn merged(&self, piece: &Tetromino) -> Board {
        let mut board = self.clone();
        board.lock_piece(piece);
        board
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Remaining rows keep their order and settle at the bottom; the same
    /// number of empty rows appear at the top. Uses a two-pointer pass with
    /// zero allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Copy of this board with every full row removed, plus the number removed.
    pub fn cleared(&self) -> (Board, usize) {
        let mut board = self.clone();
        let lines = board.clear_full_rows().len();
        (board, lines)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to a row-major grid (for snapshots and tests).
    pub fn to_grid(&self) -> BoardGrid {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
