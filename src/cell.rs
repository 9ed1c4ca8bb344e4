use core::fmt;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood in expansion order: east, west, south, north. Every strategy
/// sees neighbours in this order, which fixes DFS exploration and priority tie-breaks.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A grid coordinate. Ordered by `x` first, then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Sum of absolute coordinate differences. Admissible and consistent on a unit-cost
    /// 4-connected grid.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The four orthogonal neighbours in [NEUMANN_OFFSETS] order, without bounds checks.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(dx, dy)| Cell::new(self.x + dx, self.y + dy))
            .collect()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
