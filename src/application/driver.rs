//! Terminal run loop: render, wait, advance, repeat until a stop condition.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use clap::ValueEnum;

use crate::domain::Simulation;
use crate::rendering::terminal::{self, CLEAR_SCREEN, DIM, MAGENTA, Style};

/// Named pacing presets for the terminal driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
    Ludicrous,
}

impl Speed {
    /// Pause between generations
    pub const fn delay(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(300),
            Speed::Normal => Duration::from_millis(150),
            Speed::Fast => Duration::from_millis(80),
            Speed::Ludicrous => Duration::from_millis(20),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    /// Maximum number of generations to advance
    pub generations: u64,
    pub delay: Duration,
    pub use_color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 500,
            delay: Speed::default().delay(),
            use_color: true,
        }
    }
}

/// Why a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The generation budget was used up
    Completed,
    /// Population reached zero
    Extinct,
    /// The stop flag was raised
    Interrupted,
}

/// Drive `sim` for up to `config.generations` generations, writing one frame
/// per generation to `out`. The stop flag is polled around every wait, so a
/// raised flag never lets another `advance` through.
pub fn run<W: Write>(
    sim: &mut Simulation,
    config: &RunConfig,
    stop: &AtomicBool,
    out: &mut W,
) -> io::Result<RunOutcome> {
    let style = Style::new(config.use_color);
    log::info!(
        "running up to {} generations, {:?} per frame, population {}",
        config.generations,
        config.delay,
        sim.population()
    );

    for _ in 0..config.generations {
        if stop.load(Ordering::SeqCst) {
            return interrupted(sim, config, out);
        }

        write!(out, "{CLEAR_SCREEN}")?;
        writeln!(out, "{}", terminal::render(sim, config.use_color))?;
        writeln!(out, "\n{}", style.paint(DIM, "Press Ctrl+C to stop"))?;
        out.flush()?;

        if !config.delay.is_zero() {
            thread::sleep(config.delay);
        }
        if stop.load(Ordering::SeqCst) {
            return interrupted(sim, config, out);
        }

        sim.advance();
        log::debug!("generation {} population {}", sim.generation(), sim.population());

        if sim.population() == 0 {
            let msg = if config.use_color {
                "\n💀 All cells have died! Game over."
            } else {
                "\nAll cells have died! Game over."
            };
            writeln!(out, "{msg}")?;
            log::info!("population died out at generation {}", sim.generation());
            return Ok(RunOutcome::Extinct);
        }
    }

    log::info!(
        "finished at generation {} with population {}",
        sim.generation(),
        sim.population()
    );
    Ok(RunOutcome::Completed)
}

fn interrupted<W: Write>(sim: &Simulation, config: &RunConfig, out: &mut W) -> io::Result<RunOutcome> {
    let msg = if config.use_color {
        Style::new(true).paint(MAGENTA, "\n\n👋 Simulation stopped!")
    } else {
        "\n\nSimulation stopped!".to_owned()
    };
    writeln!(out, "{msg}")?;
    log::info!("stopped by user at generation {}", sim.generation());
    Ok(RunOutcome::Interrupted)
}
