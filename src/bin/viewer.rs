//! Windowed viewer: the same sparse simulation on a pannable, zoomable canvas

use clap::Parser;
use macroquad::prelude::*;
use sparse_life::{
    Camera, GameState, Pattern, Simulation,
    input, presets,
    rendering::window::{self, CELL_SIZE},
};

/// Watch a Game of Life pattern evolve in a window
#[derive(Debug, Parser)]
#[command(name = "viewer", version, about)]
struct ViewerArgs {
    /// Starting pattern, centered in the advisory rectangle
    #[arg(short, long, value_name = "NAME", default_value = "glider_gun", value_parser = presets::by_name)]
    pattern: &'static Pattern,

    /// Start from a random fill instead of a pattern
    #[arg(short, long)]
    random: bool,

    /// Density for random fill
    #[arg(short, long, default_value_t = 0.3)]
    density: f64,

    /// Width of the advisory rectangle in cells
    #[arg(short = 'W', long, default_value_t = 80)]
    width: usize,

    /// Height of the advisory rectangle in cells
    #[arg(short = 'H', long, default_value_t = 60)]
    height: usize,

    /// Start running immediately
    #[arg(long)]
    play: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life - Sparse Viewer".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn initial_simulation(args: &ViewerArgs) -> Simulation {
    let mut sim = Simulation::new(args.width, args.height);
    if args.random {
        sim.randomize(args.density);
    } else {
        let (row, col) = args.pattern.centered_offset(args.width, args.height);
        args.pattern.place_on(&mut sim, row, col);
    }
    sim
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = ViewerArgs::parse();
    let mut state = GameState::new(initial_simulation(&args)).with_running(args.play);
    let mut camera = Camera::new();
    log::info!(
        "viewer started with {} cells in a {}x{} window",
        state.sim.population(),
        args.width,
        args.height
    );

    loop {
        let mouse_pos = mouse_position();

        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos);
        input::handle_mouse_paint(&mut state, &camera, mouse_pos);
        state = input::process_keyboard_input(state, &mut camera);

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        window::draw_world(&state.sim, &camera);
        window::draw_panel(&state, &camera);

        // Cursor cell readout, handy once the pattern has wandered off
        if mouse_pos.0 < window::grid_area_width() {
            let cell = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, CELL_SIZE);
            draw_text(
                &format!("({}, {})", cell.row, cell.col),
                8.0,
                screen_height() - 10.0,
                16.0,
                GRAY,
            );
        }

        next_frame().await;
    }
}
