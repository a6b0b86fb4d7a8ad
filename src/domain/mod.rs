mod cell;
mod coord;
mod patterns;
pub mod simulation;

pub use cell::Cell;
pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use patterns::{Pattern, PatternError, PatternKind, presets};
pub use simulation::{Simulation, ALIVE_MARKERS};
