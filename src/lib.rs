// Domain layer - grid, rules, seeding and the generation transition
pub mod domain;

// Application layer - automaton orchestration and the driver session
pub mod application;

// Errors and configuration
pub mod error;
pub mod config;

// Infrastructure layer - rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, CellCoord, CountSet, FillMode, GridBuffer, RuleSet, SeedGenerator, SeedPolicy, Topology};
pub use application::{Automaton, AutomatonConfig, FrameRate, Session};
pub use error::{Error, Result};
