// Domain layer - sparse engine, cell rule, pattern catalog
pub mod domain;

// Application layer - run loop, menu scenarios, viewer state
pub mod application;

// Infrastructure layer - terminal and window output, window input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coord, Pattern, PatternError, Simulation, presets};
pub use application::{Camera, GameState, RunConfig, RunOutcome, Scenario, Speed};
