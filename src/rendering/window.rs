use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{Coord, Simulation};

pub const PANEL_WIDTH: f32 = 180.0;
pub const CELL_SIZE: f32 = 10.0;

/// X position where the side panel starts
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Format large numbers with K/M suffixes
pub fn format_number(n: usize) -> String {
    match n {
        n if n >= 1_000_000 => format!("{:.1}M", n as f64 / 1_000_000.0),
        n if n >= 10_000 => format!("{:.1}K", n as f64 / 1_000.0),
        n => n.to_string(),
    }
}

/// Draw the alive cells that fall inside the viewport, plus the outline of
/// the advisory rectangle. Cells outside that rectangle are drawn too.
pub fn draw_world(sim: &Simulation, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let area_width = grid_area_width();
    let area_height = grid_area_height();
    let (min, max) = camera.visible_bounds(area_width, area_height, CELL_SIZE);

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let bounds_color = Color::from_rgba(60, 90, 160, 255);

    if camera.zoom > 0.5 && cell_size >= 6.0 {
        for col in min.col..=max.col + 1 {
            let (x, _) = camera.grid_to_screen(Coord::new(0, col), CELL_SIZE);
            draw_line(x, 0.0, x, area_height, 1.0, grid_line_color);
        }
        for row in min.row..=max.row + 1 {
            let (_, y) = camera.grid_to_screen(Coord::new(row, 0), CELL_SIZE);
            draw_line(0.0, y, area_width, y, 1.0, grid_line_color);
        }
    }

    let (width, height) = sim.dimensions();
    let (bx, by) = camera.grid_to_screen(Coord::new(0, 0), CELL_SIZE);
    draw_rectangle_lines(
        bx,
        by,
        width as f32 * cell_size,
        height as f32 * cell_size,
        2.0,
        bounds_color,
    );

    sim.alive_cells()
        .iter()
        .filter(|c| (min.row..=max.row).contains(&c.row) && (min.col..=max.col).contains(&c.col))
        .for_each(|&c| {
            let (x, y) = camera.grid_to_screen(c, CELL_SIZE);
            draw_rectangle(x, y, cell_size, cell_size, alive_color);
        });
}

/// Draw the side panel: controls help and simulation stats
pub fn draw_panel(state: &GameState, camera: &Camera) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let help = [
        ("Controls:", 20.0, 16.0, WHITE),
        ("Space: Play/Pause", 40.0, 13.0, GRAY),
        ("N: Step", 55.0, 13.0, GRAY),
        ("C: Clear  R: Random", 70.0, 13.0, GRAY),
        ("Up/Down: Speed", 85.0, 13.0, GRAY),
        ("H: Find cells", 100.0, 13.0, GRAY),
        ("LMB: Paint  RMB: Erase", 115.0, 13.0, GRAY),
        ("Wheel: Zoom", 130.0, 13.0, GRAY),
        ("Mid-drag: Pan", 145.0, 13.0, GRAY),
    ];
    help.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px + 8.0, *y, *size, *color);
    });

    let highlight = Color::from_rgba(0, 255, 150, 255);
    let muted = Color::from_rgba(180, 180, 180, 255);
    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let (width, height) = state.sim.dimensions();

    let labels = [
        ("Generation:".to_owned(), 200.0, 16.0, WHITE),
        (state.sim.generation().to_string(), 220.0, 20.0, highlight),
        ("Population:".to_owned(), 250.0, 16.0, WHITE),
        (format_number(state.sim.population()), 270.0, 20.0, highlight),
        ("Speed:".to_owned(), 300.0, 16.0, WHITE),
        (format!("{:.0} gen/s", state.updates_per_second), 318.0, 14.0, muted),
        ("Status:".to_owned(), 348.0, 16.0, WHITE),
        (
            if state.is_running { "Running" } else { "Paused" }.to_owned(),
            366.0,
            16.0,
            status_color,
        ),
        (format!("Zoom: {:.1}x", camera.zoom), 396.0, 14.0, muted),
        (format!("Window: {width}x{height}"), 414.0, 14.0, muted),
        (format!("Evolve: {:.2}ms", state.last_evolution_time_ms), 432.0, 14.0, muted),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px + 8.0, *y, *size, *color);
    });
}
