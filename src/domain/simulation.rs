//! Sparse Game of Life engine.
//!
//! The plane is unbounded: state is the set of alive coordinates, and each
//! generation only visits alive cells and their neighbors. Width and height
//! are advisory, used by random fill and by callers that center patterns or
//! draw a fixed window.

use std::collections::HashSet;

use rand::Rng;

use super::{Cell, Coord};

/// Characters that mark a live cell in a pattern row
pub const ALIVE_MARKERS: [char; 3] = ['O', '#', '*'];

pub const DEFAULT_WIDTH: usize = 60;
pub const DEFAULT_HEIGHT: usize = 30;

/// Simulation owns the alive-cell set and the generation counter.
#[derive(Clone, Debug)]
pub struct Simulation {
    width: usize,
    height: usize,
    alive: HashSet<Coord>,
    generation: u64,
}

impl Simulation {
    /// Create an empty simulation with advisory dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alive: HashSet::new(),
            generation: 0,
        }
    }

    /// Advisory dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Read-only view of the alive set
    pub fn alive_cells(&self) -> &HashSet<Coord> {
        &self.alive
    }

    pub fn add_cell(&mut self, row: i64, col: i64) {
        self.alive.insert(Coord::new(row, col));
    }

    /// Kill a cell; killing a dead cell does nothing
    pub fn remove_cell(&mut self, row: i64, col: i64) {
        self.alive.remove(&Coord::new(row, col));
    }

    pub fn is_alive(&self, row: i64, col: i64) -> bool {
        self.alive.contains(&Coord::new(row, col))
    }

    /// Count alive cells among the eight neighbors of (row, col)
    pub fn count_neighbors(&self, row: i64, col: i64) -> u8 {
        self.live_neighbors(Coord::new(row, col))
    }

    fn live_neighbors(&self, at: Coord) -> u8 {
        at.neighbors()
            .filter(|n| self.alive.contains(n))
            .count() as u8
    }

    fn cell_at(&self, at: Coord) -> Cell {
        Cell::from_alive(self.alive.contains(&at))
    }

    /// Compute the next generation and bump the generation counter.
    ///
    /// Only alive cells and their neighbors can change state: a cell outside
    /// that set has no alive neighbor and stays dead. The new set replaces
    /// the old one in a single assignment.
    pub fn advance(&mut self) {
        let candidates: HashSet<Coord> = self
            .alive
            .iter()
            .flat_map(|c| c.with_neighbors())
            .collect();

        let next: HashSet<Coord> = candidates
            .iter()
            .copied()
            .filter(|&c| self.cell_at(c).evolve(self.live_neighbors(c)).is_alive())
            .collect();

        log::trace!(
            "generation {} -> {}: {} candidates, population {} -> {}",
            self.generation,
            self.generation + 1,
            candidates.len(),
            self.alive.len(),
            next.len()
        );

        self.alive = next;
        self.generation += 1;
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.alive.clear();
        self.generation = 0;
    }

    /// Clear, then fill the advisory rectangle at the given density
    pub fn randomize(&mut self, density: f64) {
        self.randomize_with(density, &mut rand::rng());
    }

    /// Same as [`Simulation::randomize`] with a caller-supplied random source.
    /// Each cell in `[0, height) x [0, width)` is alive iff a uniform sample
    /// from `[0, 1)` falls below `density`.
    pub fn randomize_with<R: Rng>(&mut self, density: f64, rng: &mut R) {
        self.clear();
        for row in 0..self.height as i64 {
            for col in 0..self.width as i64 {
                if rng.random::<f64>() < density {
                    self.add_cell(row, col);
                }
            }
        }
        log::info!(
            "randomized {}x{} at density {:.2}: population {}",
            self.width,
            self.height,
            density,
            self.population()
        );
    }

    /// Overlay pattern rows with their top-left corner at the offset.
    /// Dead markers leave existing cells untouched; live markers that would
    /// land past the edge of `i64` are dropped.
    pub fn add_pattern<S: AsRef<str>>(&mut self, rows: &[S], offset_row: i64, offset_col: i64) {
        let origin = Coord::new(offset_row, offset_col);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.as_ref().chars().enumerate() {
                if !ALIVE_MARKERS.contains(&ch) {
                    continue;
                }
                if let Some(at) = origin.checked_offset(r as i64, c as i64) {
                    self.alive.insert(at);
                }
            }
        }
    }

    /// Smallest rectangle containing every alive cell as (top-left, bottom-right)
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        let mut cells = self.alive.iter();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(min, max), c| {
            (
                Coord::new(min.row.min(c.row), min.col.min(c.col)),
                Coord::new(max.row.max(c.row), max.col.max(c.col)),
            )
        }))
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn cells(coords: &[(i64, i64)]) -> HashSet<Coord> {
        coords.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let sim = Simulation::new(10, 10);
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.dimensions(), (10, 10));
    }

    #[test]
    fn test_add_cell_is_idempotent() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(5, 5);
        sim.add_cell(5, 5);
        assert!(sim.is_alive(5, 5));
        assert_eq!(sim.population(), 1);
    }

    #[test]
    fn test_add_cell_outside_advisory_bounds() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(-3, 200);
        assert!(sim.is_alive(-3, 200));
        assert_eq!(sim.population(), 1);
    }

    #[test]
    fn test_remove_cell() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(5, 5);
        sim.remove_cell(5, 5);
        assert!(!sim.is_alive(5, 5));
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_remove_absent_cell_changes_nothing() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(1, 1);
        let before = sim.alive_cells().clone();
        sim.remove_cell(5, 5);
        assert_eq!(sim.alive_cells(), &before);
        assert_eq!(sim.population(), 1);
    }

    #[test]
    fn test_count_neighbors() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(4, 4);
        sim.add_cell(4, 5);
        sim.add_cell(5, 6);
        assert_eq!(sim.count_neighbors(5, 5), 3);
    }

    #[test]
    fn test_count_neighbors_all_eight() {
        let mut sim = Simulation::new(10, 10);
        for c in Coord::new(5, 5).neighbors() {
            sim.add_cell(c.row, c.col);
        }
        assert_eq!(sim.count_neighbors(5, 5), 8);
        // The cell itself is never counted
        sim.add_cell(5, 5);
        assert_eq!(sim.count_neighbors(5, 5), 8);
    }

    #[test]
    fn test_count_neighbors_across_negative_coordinates() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(-1, -1);
        sim.add_cell(-1, 0);
        sim.add_cell(0, -1);
        assert_eq!(sim.count_neighbors(0, 0), 3);
        assert_eq!(sim.count_neighbors(-2, -2), 1);
    }

    #[test]
    fn test_count_neighbors_at_i64_edges() {
        let mut sim = Simulation::new(10, 10);
        assert_eq!(sim.count_neighbors(i64::MAX, 0), 0);
        assert_eq!(sim.count_neighbors(i64::MIN, i64::MAX), 0);

        sim.add_cell(i64::MAX - 1, 0);
        sim.add_cell(i64::MAX, 1);
        assert_eq!(sim.count_neighbors(i64::MAX, 0), 2);
    }

    #[test]
    fn test_advance_at_i64_edges() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(i64::MIN, 0);
        sim.advance();
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 1);

        // A blinker hugging the top edge: the half that would sit beyond
        // i64::MIN is never born, leaving two cells on the edge row
        sim.add_pattern(&["OOO"], i64::MIN, 4);
        sim.advance();
        assert_eq!(
            sim.alive_cells(),
            &cells(&[(i64::MIN, 5), (i64::MIN + 1, 5)])
        );

        // A block in the far corner is still a still life
        sim.clear();
        sim.add_pattern(&["OO", "OO"], i64::MAX - 1, i64::MAX - 1);
        let block = sim.alive_cells().clone();
        sim.advance();
        assert_eq!(sim.alive_cells(), &block);
    }

    #[test]
    fn test_add_pattern_drops_cells_past_i64_edge() {
        let mut sim = Simulation::new(10, 10);
        sim.add_pattern(&["OO", "OO"], i64::MAX, i64::MAX);
        assert_eq!(sim.alive_cells(), &cells(&[(i64::MAX, i64::MAX)]));
    }

    #[test]
    fn test_lonely_cells_die() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(5, 5);
        sim.add_cell(5, 6);
        sim.advance();
        assert!(!sim.is_alive(5, 5));
        assert!(!sim.is_alive(5, 6));
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_cell_survives_with_two_neighbors() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(5, 4);
        sim.add_cell(5, 5);
        sim.add_cell(5, 6);
        sim.advance();
        assert!(sim.is_alive(5, 5));
    }

    #[test]
    fn test_cell_survives_with_three_neighbors() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(5, 5);
        sim.add_cell(4, 5);
        sim.add_cell(5, 4);
        sim.add_cell(4, 4);
        sim.advance();
        assert!(sim.is_alive(5, 5));
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(5, 5);
        sim.add_cell(4, 4);
        sim.add_cell(4, 5);
        sim.add_cell(4, 6);
        sim.add_cell(5, 4);
        assert_eq!(sim.count_neighbors(5, 5), 4);
        sim.advance();
        assert!(!sim.is_alive(5, 5));
    }

    #[test]
    fn test_l_tromino_birth() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(4, 4);
        sim.add_cell(4, 5);
        sim.add_cell(5, 4);
        assert!(!sim.is_alive(5, 5));
        assert_eq!(sim.count_neighbors(5, 5), 3);
        sim.advance();
        assert!(sim.is_alive(5, 5));
    }

    #[test]
    fn test_advance_matches_rule_for_every_candidate() {
        let mut sim = Simulation::new(12, 12);
        sim.randomize_with(0.4, &mut StdRng::seed_from_u64(7));
        let before = sim.clone();
        sim.advance();

        for row in -2..14 {
            for col in -2..14 {
                let n = before.count_neighbors(row, col);
                let expected = match (before.is_alive(row, col), n) {
                    (true, 2 | 3) | (false, 3) => true,
                    _ => false,
                };
                assert_eq!(sim.is_alive(row, col), expected, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_advance_on_empty_increments_generation() {
        let mut sim = Simulation::new(10, 10);
        sim.advance();
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_generation_increments() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(5, 5);
        assert_eq!(sim.generation(), 0);
        sim.advance();
        assert_eq!(sim.generation(), 1);
        sim.advance();
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(1, 1);
        sim.add_cell(2, 2);
        sim.advance();
        sim.advance();
        sim.clear();
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut sim = Simulation::new(10, 10);
        sim.add_pattern(&["OOO"], 5, 4);
        let horizontal = cells(&[(5, 4), (5, 5), (5, 6)]);
        assert_eq!(sim.alive_cells(), &horizontal);

        sim.advance();
        assert_eq!(sim.alive_cells(), &cells(&[(4, 5), (5, 5), (6, 5)]));

        sim.advance();
        assert_eq!(sim.alive_cells(), &horizontal);
    }

    #[test]
    fn test_block_is_still() {
        let mut sim = Simulation::new(10, 10);
        sim.add_pattern(&["OO", "OO"], 5, 5);
        let initial = sim.alive_cells().clone();
        for _ in 0..10 {
            sim.advance();
            assert_eq!(sim.alive_cells(), &initial);
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut sim = Simulation::new(20, 20);
        sim.add_pattern(&[".O.", "..O", "OOO"], 5, 5);
        let start = sim.alive_cells().clone();

        for _ in 0..4 {
            sim.advance();
            assert_eq!(sim.population(), 5);
        }

        let shifted: HashSet<Coord> = start.iter().map(|c| Coord::new(c.row + 1, c.col + 1)).collect();
        assert_eq!(sim.alive_cells(), &shifted);
    }

    #[test]
    fn test_glider_leaves_advisory_bounds() {
        let mut sim = Simulation::new(8, 8);
        sim.add_pattern(&[".O.", "..O", "OOO"], 4, 4);
        for _ in 0..40 {
            sim.advance();
        }
        assert_eq!(sim.population(), 5);
        let (min, _) = sim.bounding_box().unwrap();
        assert!(min.row >= 8 && min.col >= 8, "glider stayed at {min:?}");
    }

    #[test]
    fn test_randomize_zero_density() {
        let mut sim = Simulation::new(50, 50);
        sim.randomize(0.0);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_randomize_full_density() {
        let mut sim = Simulation::new(10, 7);
        sim.randomize(1.0);
        assert_eq!(sim.population(), 70);
    }

    #[test]
    fn test_randomize_out_of_range_density() {
        let mut sim = Simulation::new(6, 4);
        sim.randomize(-0.5);
        assert_eq!(sim.population(), 0);
        sim.randomize(3.0);
        assert_eq!(sim.population(), 24);
    }

    #[test]
    fn test_randomize_stays_in_rectangle_and_resets() {
        let mut sim = Simulation::new(50, 40);
        sim.add_cell(-10, -10);
        sim.advance();
        sim.randomize_with(0.3, &mut StdRng::seed_from_u64(42));

        assert_eq!(sim.generation(), 0);
        assert!(!sim.is_alive(-10, -10));
        assert!(sim.alive_cells().iter().all(|c| {
            (0..40).contains(&c.row) && (0..50).contains(&c.col)
        }));
        // 30% of 2000 cells
        assert!((450..750).contains(&sim.population()), "got {}", sim.population());
    }

    #[test]
    fn test_add_pattern_reads_markers() {
        let mut sim = Simulation::new(10, 10);
        sim.add_pattern(&[".O.", "..#", "*O*"], 0, 0);
        assert!(sim.is_alive(0, 1));
        assert!(sim.is_alive(1, 2));
        assert!(sim.is_alive(2, 0));
        assert!(sim.is_alive(2, 1));
        assert!(sim.is_alive(2, 2));
        assert!(!sim.is_alive(0, 0));
        assert_eq!(sim.population(), 5);
    }

    #[test]
    fn test_add_pattern_with_offset() {
        let mut sim = Simulation::new(20, 20);
        sim.add_pattern(&["OO", "OO"], 5, 10);
        assert_eq!(sim.alive_cells(), &cells(&[(5, 10), (5, 11), (6, 10), (6, 11)]));
    }

    #[test]
    fn test_add_pattern_is_additive() {
        let mut sim = Simulation::new(10, 10);
        sim.add_cell(0, 0);
        sim.add_cell(9, 9);
        sim.add_pattern(&["...", ".O."], 0, 0);
        assert!(sim.is_alive(0, 0));
        assert!(sim.is_alive(9, 9));
        assert!(sim.is_alive(1, 1));
        assert_eq!(sim.population(), 3);
    }

    #[test]
    fn test_add_empty_pattern() {
        let mut sim = Simulation::new(10, 10);
        let empty: [&str; 0] = [];
        sim.add_pattern(&empty, 3, 3);
        sim.add_pattern(&["", "...."], 3, 3);
        assert_eq!(sim.population(), 0);
    }

    #[test]
    fn test_bounding_box() {
        let mut sim = Simulation::new(10, 10);
        assert_eq!(sim.bounding_box(), None);
        sim.add_cell(2, -5);
        sim.add_cell(-1, 3);
        sim.add_cell(7, 0);
        assert_eq!(
            sim.bounding_box(),
            Some((Coord::new(-1, -5), Coord::new(7, 3)))
        );
    }
}
