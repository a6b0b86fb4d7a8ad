/// A cell position on the unbounded plane.
/// Rows grow downward, columns grow to the right; both may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

/// Offsets of the eight cells surrounding a coordinate
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Shift by a row/column delta, or `None` past the edge of `i64`
    pub fn checked_offset(self, dr: i64, dc: i64) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// The surrounding coordinates (Moore neighborhood).
    /// Neighbors that would fall outside the `i64` range do not exist, so a
    /// cell on that edge has fewer than eight.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| self.checked_offset(dr, dc))
    }

    /// Cell halfway between two coordinates, rounded toward zero
    pub fn midpoint(self, other: Coord) -> Coord {
        let half = |a: i64, b: i64| ((a as i128 + b as i128) / 2) as i64;
        Self::new(half(self.row, other.row), half(self.col, other.col))
    }

    /// The cell itself followed by its eight neighbors
    pub fn with_neighbors(self) -> impl Iterator<Item = Coord> {
        std::iter::once(self).chain(self.neighbors())
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_exclude_self() {
        let c = Coord::new(0, 0);
        let around: Vec<_> = c.neighbors().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&c));
        assert!(around.contains(&Coord::new(-1, -1)));
        assert!(around.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_with_neighbors_covers_3x3_block() {
        let block: Vec<_> = Coord::new(10, -4).with_neighbors().collect();
        assert_eq!(block.len(), 9);
        for dr in -1..=1 {
            for dc in -1..=1 {
                assert!(block.contains(&Coord::new(10 + dr, -4 + dc)));
            }
        }
    }

    #[test]
    fn test_neighbors_stop_at_i64_edges() {
        let corner = Coord::new(i64::MAX, i64::MIN);
        let around: Vec<_> = corner.neighbors().collect();
        assert_eq!(around.len(), 3);
        assert!(around.contains(&Coord::new(i64::MAX - 1, i64::MIN)));
        assert!(around.contains(&Coord::new(i64::MAX - 1, i64::MIN + 1)));
        assert!(around.contains(&Coord::new(i64::MAX, i64::MIN + 1)));

        assert_eq!(Coord::new(i64::MIN, 0).neighbors().count(), 5);
        assert_eq!(Coord::new(0, 0).checked_offset(1, -1), Some(Coord::new(1, -1)));
        assert_eq!(Coord::new(0, i64::MAX).checked_offset(0, 1), None);
    }

    #[test]
    fn test_midpoint_spans_full_range() {
        assert_eq!(Coord::new(0, -4).midpoint(Coord::new(10, 4)), Coord::new(5, 0));
        let far = Coord::new(i64::MIN, i64::MAX).midpoint(Coord::new(i64::MAX, i64::MAX));
        assert_eq!(far, Coord::new(0, i64::MAX));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Coord::from((3, -7)), Coord { row: 3, col: -7 });
    }
}
