use std::time::Duration;

use crate::application::driver::RunConfig;
use crate::domain::{Simulation, presets};

pub const MENU_WIDTH: usize = 70;
pub const MENU_HEIGHT: usize = 30;
pub const MENU_GENERATIONS: u64 = 500;
pub const MENU_DELAY: Duration = Duration::from_millis(100);

/// Density used when the menu input is not recognized
pub const FALLBACK_DENSITY: f64 = 0.3;

/// Demo setups offered by the interactive menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scenario {
    GliderGun,
    RandomSoup(f64),
    Pulsar,
    Acorn,
    RPentomino,
    SpaceshipFleet,
    PatternZoo,
}

/// What the user picked at the menu prompt
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuChoice {
    Run(Scenario),
    Quit,
    Unrecognized,
}

impl Scenario {
    /// Menu entries in display order; entry `i` is selected with key `i + 1`
    pub const MENU: [Scenario; 7] = [
        Scenario::GliderGun,
        Scenario::RandomSoup(0.35),
        Scenario::Pulsar,
        Scenario::Acorn,
        Scenario::RPentomino,
        Scenario::SpaceshipFleet,
        Scenario::PatternZoo,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Scenario::GliderGun => "Glider Gun (infinite gliders!)",
            Scenario::RandomSoup(_) => "Random Soup (chaotic life)",
            Scenario::Pulsar => "Pulsar (beautiful oscillator)",
            Scenario::Acorn => "Acorn (small seed, huge growth)",
            Scenario::RPentomino => "R-pentomino (legendary chaos)",
            Scenario::SpaceshipFleet => "Spaceship Fleet",
            Scenario::PatternZoo => "Pattern Zoo (multiple patterns)",
        }
    }

    /// Set up a fresh menu-sized simulation
    pub fn build(&self) -> Simulation {
        let mut sim = Simulation::new(MENU_WIDTH, MENU_HEIGHT);
        match *self {
            Scenario::GliderGun => presets::GLIDER_GUN.place_on(&mut sim, 2, 2),
            Scenario::RandomSoup(density) => sim.randomize(density),
            Scenario::Pulsar => presets::PULSAR.place_on(&mut sim, 8, 28),
            Scenario::Acorn => presets::ACORN.place_on(&mut sim, 15, 35),
            Scenario::RPentomino => presets::R_PENTOMINO.place_on(&mut sim, 15, 35),
            Scenario::SpaceshipFleet => {
                for i in 0..5 {
                    presets::LIGHTWEIGHT_SPACESHIP.place_on(&mut sim, 3 + i * 5, 5);
                    presets::GLIDER.place_on(&mut sim, 5 + i * 5, 50);
                }
            }
            Scenario::PatternZoo => {
                presets::GLIDER.place_on(&mut sim, 2, 5);
                presets::BLINKER.place_on(&mut sim, 5, 20);
                presets::TOAD.place_on(&mut sim, 10, 5);
                presets::BEACON.place_on(&mut sim, 10, 20);
                presets::PULSAR.place_on(&mut sim, 15, 30);
                presets::BLOCK.place_on(&mut sim, 3, 60);
                presets::BEEHIVE.place_on(&mut sim, 8, 55);
                presets::LOAF.place_on(&mut sim, 12, 60);
            }
        }
        log::debug!("built {:?} with population {}", self, sim.population());
        sim
    }
}

impl MenuChoice {
    /// Interpret one line of menu input
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        if input == "q" {
            return MenuChoice::Quit;
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Scenario::MENU.get(i).copied())
            .map_or(MenuChoice::Unrecognized, MenuChoice::Run)
    }
}

/// Driver settings for a scenario picked at the menu
pub fn menu_run_config(use_color: bool) -> RunConfig {
    RunConfig {
        generations: MENU_GENERATIONS,
        delay: MENU_DELAY,
        use_color,
    }
}
