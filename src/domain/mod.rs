mod cell;
mod grid;
mod rules;
mod seed;
mod algorithm;
pub mod neighborhood;

pub use cell::Cell;
pub use grid::{GridBuffer, CellCoord, MIN_SIDE};
pub use rules::{Topology, CountSet, RuleSet, all_rules};
pub use seed::{FillMode, SeedPolicy, SeedGenerator};
pub use algorithm::{Algorithm, PARALLEL_THRESHOLD};
