//! Errors reported while configuring an automaton.

use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every variant is a configuration error: once an [`Automaton`](crate::Automaton)
/// exists, stepping and painting never fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Topology tag is not one of the recognized neighborhoods.
    #[error("unknown topology `{0}`, expected one of: moore, cross, diagonal")]
    UnknownTopology(String),

    /// Fill mode is not one of the recognized seed policies.
    #[error("unknown fill mode `{0}`, expected one of: random, rectangle")]
    UnknownFillMode(String),

    /// Evolution strategy name is not recognized.
    #[error("unknown algorithm `{0}`, expected one of: serial, parallel, auto")]
    UnknownAlgorithm(String),

    /// A neighbor count can never exceed the 8 cells of a Moore block.
    #[error("neighbor count {0} is out of range 0..=8")]
    CountOutOfRange(u32),

    /// Birth or survival set could not be parsed.
    #[error("malformed neighbor count set `{0}`")]
    MalformedCountSet(String),

    /// Rule string is not in `B../S..` notation.
    #[error("malformed rule `{0}`, expected notation like B3/S23")]
    MalformedRule(String),

    /// Barrier margin is a percentage.
    #[error("barrier percent {0} is out of range 0..=100")]
    BarrierOutOfRange(u32),

    /// The grid has no interior region.
    #[error("grid of {width}x{height} cells is too small, both sides must be at least 3")]
    GridTooSmall {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// The cell count does not fit in memory addressing.
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// Cells must be at least one pixel wide.
    #[error("pixel size must be positive")]
    InvalidPixelSize,
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
