pub mod camera;
pub mod driver;
pub mod game_state;
pub mod scenarios;

pub use camera::Camera;
pub use driver::{RunConfig, RunOutcome, Speed, run};
pub use game_state::GameState;
pub use scenarios::{MenuChoice, Scenario};
