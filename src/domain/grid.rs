use super::Cell;
use crate::error::{Error, Result};
use std::mem;

/// Smallest side length that still leaves an interior cell.
pub const MIN_SIDE: usize = 3;

/// Coordinates of a single cell, `(x, y)`.
pub type CellCoord = (usize, usize);

/// GridBuffer stores a width×height grid of cells in row-major order.
///
/// Only the interior `[1, width-2] × [1, height-2]` is writable through
/// [`GridBuffer::set`]; the outer ring is a frozen boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridBuffer {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(Error::GridTooSmall { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(Error::GridTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Build a grid cell by cell, border included.
    pub fn from_fn(width: usize, height: usize, f: impl FnMut(usize, usize) -> Cell) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        grid.fill_with(f);
        Ok(grid)
    }

    /// Overwrite every cell, border included.
    ///
    /// `f` is called in row-major order, which keeps seeding reproducible
    /// for a given random source.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> Cell) {
        let width = self.width;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(idx % width, idx / width);
        }
    }

    /// An all-dead grid with the same dimensions
    pub fn dead_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Dead; self.cells.len()],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether `(x, y)` lies strictly inside the border
    pub const fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.width && y + 1 < self.height
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set an interior cell.
    ///
    /// Border and out-of-range targets are ignored; returns whether the
    /// cell was written.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if !self.is_interior(x, y) {
            return false;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Exchange contents with `other` without touching any cell
    pub fn swap(&mut self, other: &mut GridBuffer) {
        mem::swap(self, other);
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Kill every cell on the outer ring.
    pub fn clear_border(&mut self) {
        let (w, h) = (self.width, self.height);
        self.cells[..w].fill(Cell::Dead);
        self.cells[(h - 1) * w..].fill(Cell::Dead);
        for y in 1..h - 1 {
            self.cells[y * w] = Cell::Dead;
            self.cells[y * w + w - 1] = Cell::Dead;
        }
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, row-major
    pub fn live_cells(&self) -> Vec<CellCoord> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// One row of cells
    #[inline]
    pub fn row(&self, y: usize) -> &[Cell] {
        debug_assert!(y < self.height, "row {y} is outside the grid");
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Whole backing slice, row-major, for row sharding
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
