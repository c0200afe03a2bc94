//! Parsing command-line arguments.

use crate::application::{AutomatonConfig, FrameRate};
use crate::domain::{Algorithm, CountSet, FillMode, RuleSet, SeedPolicy, Topology};
use crate::error::{Error, Result};
use clap::Parser;

/// A two-dimensional cellular automaton with selectable neighborhoods.
///
/// Keys: P pause, -/= slower/faster, M unlimited speed, C clear, R reseed,
/// F fill rectangle, 1/2/3 moore/cross/diagonal, N next rule.
/// Hold the left mouse button to paint.
#[derive(Clone, Debug, Parser)]
#[command(name = "life_automaton", version)]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1400)]
    pub window_width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 700)]
    pub window_height: u32,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = 20)]
    pub pixel_size: u32,

    /// Generations per second
    #[arg(long, default_value_t = 20)]
    pub fps: u32,

    /// How the initial grid is filled: random or rectangle
    #[arg(long, default_value = "random")]
    pub fill: FillMode,

    /// Margin kept dead on each edge when seeding, in percent
    #[arg(long, default_value_t = 10)]
    pub barrier: u32,

    /// Neighborhood: moore, cross, diagonal (or 8, 4c, 4d)
    #[arg(short, long, default_value = "moore")]
    pub topology: Topology,

    /// Neighbor counts that bring a dead cell to life, e.g. 3 or 3,6
    #[arg(short = 'B', long, default_value = "3")]
    pub birth: CountSet,

    /// Neighbor counts that keep a live cell alive, e.g. 23
    #[arg(short = 'S', long, default_value = "23")]
    pub survival: CountSet,

    /// Rule in B/S notation, overrides --birth and --survival
    #[arg(short, long)]
    pub rule: Option<RuleSet>,

    /// Seed for the random fill, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Execution strategy: serial, parallel or auto
    #[arg(long, default_value = "auto")]
    pub algorithm: Algorithm,
}

impl Args {
    /// Grid size in cells, from the window size
    pub fn grid_size(&self) -> Result<(usize, usize)> {
        if self.pixel_size == 0 {
            return Err(Error::InvalidPixelSize);
        }
        Ok((
            (self.window_width / self.pixel_size) as usize,
            (self.window_height / self.pixel_size) as usize,
        ))
    }

    pub fn rules(&self) -> RuleSet {
        match self.rule {
            Some(rule) => rule.with_topology(self.topology),
            None => RuleSet::new(self.topology, self.birth, self.survival),
        }
    }

    pub fn automaton_config(&self) -> Result<AutomatonConfig> {
        let (width, height) = self.grid_size()?;
        let config = AutomatonConfig::new(width, height)
            .with_rules(self.rules())
            .with_seed_policy(SeedPolicy::new(self.fill, self.barrier)?)
            .with_algorithm(self.algorithm);

        Ok(match self.seed {
            Some(seed) => config.with_rng_seed(seed),
            None => config,
        })
    }

    pub fn frame_rate(&self) -> FrameRate {
        FrameRate::new(self.fps)
    }
}
