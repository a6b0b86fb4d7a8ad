use crate::domain::Simulation;

pub const MIN_SPEED: f32 = 1.0;
pub const MAX_SPEED: f32 = 60.0;
pub const RANDOM_DENSITY: f64 = 0.3;

/// GameState drives the windowed viewer.
/// Owns the simulation plus the play/pause and pacing state around it.
pub struct GameState {
    pub sim: Simulation,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
}

impl GameState {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_evolution_time_ms: 0.0,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Kill every cell, reset the generation counter and pause
    pub fn clear(mut self) -> Self {
        self.sim.clear();
        self.is_running = false;
        self
    }

    /// Refill the advisory rectangle and pause
    pub fn randomize(mut self) -> Self {
        self.sim.randomize(RANDOM_DENSITY);
        self.is_running = false;
        self
    }

    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Advance exactly one generation, timing it
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.sim.advance();
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }

    /// Per-frame update: advances once whenever a full update interval has
    /// accumulated while running
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= 1.0 / self.updates_per_second {
            self.update_timer = 0.0;
            self = self.step();
        }
        self
    }
}
