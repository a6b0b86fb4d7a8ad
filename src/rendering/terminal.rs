//! Text rendering of the advisory window for ANSI terminals.

use crate::domain::Simulation;

/// Erase the screen and home the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const CYAN: &str = "\x1b[96m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const MAGENTA: &str = "\x1b[95m";
pub const WHITE: &str = "\x1b[97m";
pub const HEADER: &str = "\x1b[94m";
pub const DIM: &str = "\x1b[90m";

const TITLE: &str = "Conway's Game of Life";

/// Glyph and color picked by (row + col) so neighboring cells vary
const CELL_GLYPHS: [char; 5] = ['█', '▓', '●', '◆', '★'];
const CELL_COLORS: [&str; 5] = [CYAN, GREEN, YELLOW, MAGENTA, WHITE];

/// Wraps text in ANSI codes, or passes it through untouched
#[derive(Clone, Copy, Debug)]
pub struct Style {
    color: bool,
}

impl Style {
    pub const fn new(use_color: bool) -> Self {
        Self { color: use_color }
    }

    pub fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }
}

fn border(left: char, right: char, inner: usize) -> String {
    format!("{left}{}{right}", "═".repeat(inner))
}

/// Render rows `0..height` and columns `0..width` with a box frame and a
/// generation/population footer. Cells outside the window are not shown.
pub fn render(sim: &Simulation, use_color: bool) -> String {
    let style = Style::new(use_color);
    let (width, height) = sim.dimensions();
    let frame = |s: &str| style.paint(HEADER, s);
    let edge = frame("║");

    let mut lines = Vec::with_capacity(height + 6);
    lines.push(style.paint(&format!("{HEADER}{BOLD}"), &border('╔', '╗', width + 2)));
    lines.push(format!(
        "{edge} {}{} {edge}",
        style.paint(CYAN, TITLE),
        " ".repeat(width.saturating_sub(TITLE.len()))
    ));
    lines.push(frame(&border('╠', '╣', width + 2)));

    for row in 0..height as i64 {
        let cells: String = (0..width as i64)
            .map(|col| render_cell(sim, row, col, style, use_color))
            .collect();
        lines.push(format!("{edge} {cells} {edge}"));
    }

    lines.push(frame(&border('╠', '╣', width + 2)));
    let separator = if use_color { '│' } else { '|' };
    let stats = format!(
        "Generation: {:5} {separator} Population: {:5}",
        sim.generation(),
        sim.population()
    );
    let padding = " ".repeat(width.saturating_sub(stats.chars().count()));
    lines.push(format!("{edge} {}{padding} {edge}", style.paint(GREEN, &stats)));
    lines.push(frame(&border('╚', '╝', width + 2)));

    lines.join("\n")
}

fn render_cell(sim: &Simulation, row: i64, col: i64, style: Style, use_color: bool) -> String {
    if sim.is_alive(row, col) {
        let idx = (row + col).rem_euclid(CELL_GLYPHS.len() as i64) as usize;
        style.paint(CELL_COLORS[idx], &CELL_GLYPHS[idx].to_string())
    } else if use_color {
        style.paint(DIM, "·")
    } else {
        " ".to_owned()
    }
}
