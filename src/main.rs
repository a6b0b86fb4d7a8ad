use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use sparse_life::{
    Pattern, RunConfig, RunOutcome, Scenario, Simulation, Speed,
    application::{self, MenuChoice, scenarios},
    presets,
    rendering::terminal::{BOLD, CLEAR_SCREEN, CYAN, DIM, GREEN, HEADER, MAGENTA, Style, YELLOW},
};

/// Conway's Game of Life - a cellular automaton simulation
#[derive(Debug, Parser)]
#[command(name = "life", version, about, after_help = "Example: life --pattern glider_gun --speed fast")]
struct Args {
    /// Pattern to simulate, centered on the grid
    #[arg(short, long, value_name = "NAME", value_parser = presets::by_name)]
    pattern: Option<&'static Pattern>,

    /// Start with random cells (takes precedence over --pattern)
    #[arg(short, long)]
    random: bool,

    /// Density for random fill, 0.0 to 1.0
    #[arg(short, long, default_value_t = 0.3, value_parser = parse_density)]
    density: f64,

    /// Simulation speed
    #[arg(short, long, value_enum, default_value_t = Speed::Normal)]
    speed: Speed,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 500)]
    generations: u64,

    /// Grid width
    #[arg(short = 'W', long, default_value_t = 70, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Grid height
    #[arg(short = 'H', long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// List available patterns and exit
    #[arg(short, long)]
    list_patterns: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Run the interactive menu
    #[arg(short, long)]
    interactive: bool,
}

fn parse_density(value: &str) -> Result<f64, String> {
    let density: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density must be between 0.0 and 1.0, got {density}"))
    }
}

fn list_patterns(style: Style) {
    println!("\n{}\n", style.paint(&format!("{HEADER}{BOLD}"), "Available Patterns:"));
    for pattern in presets::all_patterns() {
        println!(
            "  {} ({}x{}) [{}] - {}",
            style.paint(GREEN, &format!("{:22}", pattern.name)),
            pattern.width(),
            pattern.height(),
            pattern.kind.label(),
            pattern.description
        );
    }
    println!("\n{}\n", style.paint(DIM, "Use --pattern <name> to run a specific pattern"));
}

/// Show the menu, read one choice and run it. Returns `None` on quit.
fn interactive_menu(use_color: bool) -> Result<Option<RunOutcome>> {
    let style = Style::new(use_color);
    print!("{CLEAR_SCREEN}");
    println!("{}", style.paint(CYAN, "Conway's Game of Life - A Mathematical Universe"));
    println!("\n{}\n", style.paint(HEADER, "Select a demo:"));
    for (i, scenario) in Scenario::MENU.iter().enumerate() {
        println!("  {} {}", style.paint(GREEN, &format!("{}.", i + 1)), scenario.label());
    }
    println!("  {} Quit", style.paint(GREEN, "q."));

    print!("\n{}", style.paint(CYAN, "Enter choice (1-7 or q): "));
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read menu choice")?;

    let scenario = match MenuChoice::parse(&line) {
        MenuChoice::Run(scenario) => scenario,
        MenuChoice::Quit => {
            println!("\n{}\n", style.paint(MAGENTA, "Thanks for playing! Life finds a way..."));
            return Ok(None);
        }
        MenuChoice::Unrecognized => {
            println!("\n{}", style.paint(YELLOW, "Invalid choice. Running random soup!"));
            Scenario::RandomSoup(scenarios::FALLBACK_DENSITY)
        }
    };
    log::info!("menu selected {scenario:?}");

    let mut sim = scenario.build();
    let config = scenarios::menu_run_config(use_color);
    let stop = install_stop_handler()?;
    let outcome = application::run(&mut sim, &config, &stop, &mut io::stdout().lock())
        .context("failed to write frame")?;
    Ok(Some(outcome))
}

/// Ctrl-C raises the returned flag instead of killing the process, so the
/// run loop can finish the current frame and print a farewell
fn install_stop_handler() -> Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;
    Ok(stop)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let style = Style::new(!args.no_color);

    if args.list_patterns {
        list_patterns(style);
        return Ok(());
    }

    if args.interactive || (!args.random && args.pattern.is_none()) {
        let outcome = interactive_menu(!args.no_color)?;
        log::debug!("menu run ended: {outcome:?}");
        return Ok(());
    }

    let (width, height) = (usize::from(args.width), usize::from(args.height));
    let mut sim = Simulation::new(width, height);
    if args.random {
        sim.randomize(args.density);
    } else if let Some(pattern) = args.pattern {
        let (row, col) = pattern.centered_offset(width, height);
        pattern.place_on(&mut sim, row, col);
    }

    let config = RunConfig {
        generations: args.generations,
        delay: args.speed.delay(),
        use_color: !args.no_color,
    };
    let stop = install_stop_handler()?;
    let outcome = application::run(&mut sim, &config, &stop, &mut io::stdout().lock())
        .context("failed to write frame")?;
    log::debug!("run ended: {outcome:?}");
    Ok(())
}
