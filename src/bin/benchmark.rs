//! Throughput of `Simulation::advance` on growing and chaotic patterns

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use sparse_life::{Pattern, Simulation, presets};

/// Average milliseconds per generation over `iterations` advances
fn time_advance(sim: &mut Simulation, iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        sim.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_pattern(pattern: &Pattern, warmup: u32, iterations: u32) -> (f64, usize) {
    let mut sim = Simulation::new(200, 200);
    pattern.place_on(&mut sim, 100, 100);
    for _ in 0..warmup {
        sim.advance();
    }
    let ms = time_advance(&mut sim, iterations);
    (ms, sim.population())
}

fn benchmark_soup(size: usize, iterations: u32) -> (f64, usize) {
    let mut sim = Simulation::new(size, size);
    sim.randomize_with(0.3, &mut StdRng::seed_from_u64(0x5EED));
    let ms = time_advance(&mut sim, iterations);
    (ms, sim.population())
}

fn print_row(label: &str, ms: f64, population: usize) {
    let cells_per_sec = population as f64 / (ms / 1000.0);
    println!(
        "{:>24} {:>12.3} {:>12} {:>14.1}",
        label,
        ms,
        population,
        cells_per_sec / 1_000_000.0
    );
}

fn main() {
    env_logger::init();
    println!("=== Sparse Life Benchmark ===\n");
    println!("{:>24} {:>12} {:>12} {:>14}", "Workload", "ms/gen", "Population", "M cells/sec");
    println!("{:-<65}", "");

    let iterations = 100;
    for (pattern, warmup) in [
        (&presets::GLIDER_GUN, 0),
        (&presets::GLIDER_GUN, 1000),
        (&presets::ACORN, 0),
        (&presets::ACORN, 2000),
        (&presets::R_PENTOMINO, 500),
    ] {
        let (ms, population) = benchmark_pattern(pattern, warmup, iterations);
        print_row(&format!("{} @{}", pattern.name, warmup), ms, population);
    }

    for size in [100, 250, 500, 1000] {
        let (ms, population) = benchmark_soup(size, iterations / 4);
        print_row(&format!("soup {size}x{size}"), ms, population);
    }
}
