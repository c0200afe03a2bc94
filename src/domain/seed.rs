//! Initial and reset grids.
//!
//! Seeding fills a centered rectangle of the grid, inset from every edge by
//! a barrier margin. The margin is `side * barrier_percent / 200`, so a
//! barrier of 100% leaves at most a single row or column to fill.

use super::{Cell, GridBuffer};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// How cells inside the barrier are filled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Each cell alive with probability 1/2
    #[default]
    Random,
    /// Every cell alive
    Rectangle,
}

impl FillMode {
    pub const fn name(self) -> &'static str {
        match self {
            FillMode::Random => "random",
            FillMode::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(FillMode::Random),
            "rectangle" | "rect" => Ok(FillMode::Rectangle),
            _ => Err(Error::UnknownFillMode(s.to_owned())),
        }
    }
}

/// Fill mode plus barrier margin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SeedPolicy {
    fill_mode: FillMode,
    barrier_percent: u8,
}

impl SeedPolicy {
    pub fn new(fill_mode: FillMode, barrier_percent: u32) -> Result<Self> {
        if barrier_percent > 100 {
            return Err(Error::BarrierOutOfRange(barrier_percent));
        }
        Ok(Self {
            fill_mode,
            barrier_percent: barrier_percent as u8,
        })
    }

    pub const fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub const fn barrier_percent(&self) -> u8 {
        self.barrier_percent
    }

    /// Same barrier, different fill mode
    pub const fn with_fill_mode(self, fill_mode: FillMode) -> Self {
        Self { fill_mode, ..self }
    }

    /// Inset from the left/right and top/bottom edges
    pub const fn margins(&self, width: usize, height: usize) -> (usize, usize) {
        let percent = self.barrier_percent as usize;
        (width * percent / 200, height * percent / 200)
    }
}

/// Produces seeded grids from a [`SeedPolicy`].
pub struct SeedGenerator {
    rng: StdRng,
}

impl SeedGenerator {
    /// Generator backed by OS entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Build a grid according to `policy`.
    pub fn generate(&mut self, width: usize, height: usize, policy: SeedPolicy) -> Result<GridBuffer> {
        let mut grid = GridBuffer::new(width, height)?;
        self.fill(&mut grid, policy);
        Ok(grid)
    }

    /// Reseed an existing grid in place. Border cells are seeded like any
    /// other cell if they fall inside the margin.
    pub fn fill(&mut self, grid: &mut GridBuffer, policy: SeedPolicy) {
        let (width, height) = grid.dimensions();
        let (margin_x, margin_y) = policy.margins(width, height);
        let inside = |i: usize, j: usize| {
            margin_x <= i && i + margin_x < width && margin_y <= j && j + margin_y < height
        };

        let rng = &mut self.rng;
        grid.fill_with(|i, j| {
            if !inside(i, j) {
                return Cell::Dead;
            }
            match policy.fill_mode() {
                FillMode::Random => Cell::from(rng.random_bool(0.5)),
                FillMode::Rectangle => Cell::Alive,
            }
        });
    }
}

impl Default for SeedGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
