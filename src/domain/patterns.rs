use thiserror::Error;

use super::{Simulation, simulation::ALIVE_MARKERS};

/// Broad family a catalog pattern belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    StillLife,
    Oscillator,
    Spaceship,
    Methuselah,
    Gun,
}

impl PatternKind {
    pub const fn label(self) -> &'static str {
        match self {
            PatternKind::StillLife => "Still Life",
            PatternKind::Oscillator => "Oscillator",
            PatternKind::Spaceship => "Spaceship",
            PatternKind::Methuselah => "Methuselah",
            PatternKind::Gun => "Gun",
        }
    }
}

/// A named, immutable starting configuration.
/// Rows are text; `O`, `#` or `*` is a live cell, anything else is dead.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: PatternKind,
    pub rows: &'static [&'static str],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown pattern '{name}' (run with --list-patterns to see the catalog)")]
    Unknown { name: String },
}

impl Pattern {
    /// Width of the longest row, in characters
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Relative (row, col) offsets of the live cells
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, ch)| ALIVE_MARKERS.contains(ch))
                .map(move |(c, _)| (r as i64, c as i64))
        })
    }

    /// Overlay this pattern with its top-left corner at (row, col)
    pub fn place_on(&self, sim: &mut Simulation, row: i64, col: i64) {
        sim.add_pattern(self.rows, row, col);
        log::debug!("placed {} at ({}, {})", self.name, row, col);
    }

    /// Offset that centers the pattern in a width x height window, clamped at 0
    pub fn centered_offset(&self, width: usize, height: usize) -> (i64, i64) {
        let row = height.saturating_sub(self.height()) / 2;
        let col = width.saturating_sub(self.width()) / 2;
        (row as i64, col as i64)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell diagonally every 4 generations
    pub const GLIDER: Pattern = Pattern {
        name: "glider",
        description: "The famous glider - a spaceship that travels diagonally",
        kind: PatternKind::Spaceship,
        rows: &[
            ".O.",
            "..O",
            "OOO",
        ],
    };

    pub const BLINKER: Pattern = Pattern {
        name: "blinker",
        description: "Simplest oscillator - period 2",
        kind: PatternKind::Oscillator,
        rows: &["OOO"],
    };

    pub const TOAD: Pattern = Pattern {
        name: "toad",
        description: "Period 2 oscillator",
        kind: PatternKind::Oscillator,
        rows: &[
            ".OOO",
            "OOO.",
        ],
    };

    pub const BEACON: Pattern = Pattern {
        name: "beacon",
        description: "Period 2 oscillator with a flashing effect",
        kind: PatternKind::Oscillator,
        rows: &[
            "OO..",
            "OO..",
            "..OO",
            "..OO",
        ],
    };

    pub const PULSAR: Pattern = Pattern {
        name: "pulsar",
        description: "Period 3 oscillator with fourfold symmetry",
        kind: PatternKind::Oscillator,
        rows: &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    };

    /// Gosper glider gun - emits a glider every 30 generations
    pub const GLIDER_GUN: Pattern = Pattern {
        name: "glider_gun",
        description: "Gosper's glider gun - creates infinite gliders",
        kind: PatternKind::Gun,
        rows: &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    };

    pub const LIGHTWEIGHT_SPACESHIP: Pattern = Pattern {
        name: "lightweight_spaceship",
        description: "A small spaceship (LWSS) that travels horizontally",
        kind: PatternKind::Spaceship,
        rows: &[
            ".OOOO",
            "O...O",
            "....O",
            "O..O.",
        ],
    };

    pub const R_PENTOMINO: Pattern = Pattern {
        name: "r_pentomino",
        description: "Small but chaotic - evolves for 1103 generations",
        kind: PatternKind::Methuselah,
        rows: &[
            ".OO",
            "OO.",
            ".O.",
        ],
    };

    pub const DIEHARD: Pattern = Pattern {
        name: "diehard",
        description: "Disappears after exactly 130 generations",
        kind: PatternKind::Methuselah,
        rows: &[
            "......O.",
            "OO......",
            ".O...OOO",
        ],
    };

    pub const ACORN: Pattern = Pattern {
        name: "acorn",
        description: "Tiny pattern that grows for 5206 generations",
        kind: PatternKind::Methuselah,
        rows: &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ],
    };

    pub const BLOCK: Pattern = Pattern {
        name: "block",
        description: "Simplest still life - completely stable",
        kind: PatternKind::StillLife,
        rows: &[
            "OO",
            "OO",
        ],
    };

    pub const BEEHIVE: Pattern = Pattern {
        name: "beehive",
        description: "Common still life",
        kind: PatternKind::StillLife,
        rows: &[
            ".OO.",
            "O..O",
            ".OO.",
        ],
    };

    pub const LOAF: Pattern = Pattern {
        name: "loaf",
        description: "Another common still life",
        kind: PatternKind::StillLife,
        rows: &[
            ".OO.",
            "O..O",
            ".O.O",
            "..O.",
        ],
    };

    static CATALOG: [Pattern; 13] = [
        GLIDER,
        BLINKER,
        TOAD,
        BEACON,
        PULSAR,
        GLIDER_GUN,
        LIGHTWEIGHT_SPACESHIP,
        R_PENTOMINO,
        DIEHARD,
        ACORN,
        BLOCK,
        BEEHIVE,
        LOAF,
    ];

    /// Every catalog pattern, in listing order
    pub fn all_patterns() -> &'static [Pattern] {
        &CATALOG
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|p| p.name)
    }

    /// Look a pattern up by its catalog name
    pub fn by_name(name: &str) -> Result<&'static Pattern, PatternError> {
        CATALOG
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PatternError::Unknown { name: name.to_owned() })
    }
}
