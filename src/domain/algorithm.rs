//! Algorithm enum for selecting how a generation pass is executed.
//!
//! Every strategy produces the same next generation; they only differ in
//! how the interior rows are scheduled.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Grids with at least this many cells are sharded across threads in
/// [`Algorithm::Auto`]. Below it, rayon's scheduling costs more than the
/// pass itself.
pub const PARALLEL_THRESHOLD: usize = 100 * 100;

/// Available execution strategies for a generation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row-major nested loops on the calling thread
    Serial,
    /// Interior rows sharded over the rayon pool
    Parallel,
    /// Serial for small grids, parallel for large ones
    #[default]
    Auto,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel, Algorithm::Auto]
    }

    /// Display name, also accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
            Algorithm::Auto => "auto",
        }
    }

    /// Short description for logs
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "one thread, row-major",
            Algorithm::Parallel => "interior rows split across threads",
            Algorithm::Auto => "parallel from 100x100 cells upwards",
        }
    }

    /// Whether a grid of `cells` cells is evaluated in parallel
    pub fn is_parallel_for(&self, cells: usize) -> bool {
        match self {
            Algorithm::Serial => false,
            Algorithm::Parallel => true,
            Algorithm::Auto => cells >= PARALLEL_THRESHOLD,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::all()
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}
