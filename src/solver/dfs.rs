use crate::frontier::LifoFrontier;
use crate::solver::GridSolver;

/// Depth-first search. Always continues from the most recently discovered cell; the path it
/// returns is the first one found, not necessarily a short one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = LifoFrontier<u32>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::solver::tests::open_grid;

    #[test]
    fn dives_south_before_east() {
        let grid = open_grid(3, 3);
        let result = DfsSolver.search(&grid, grid.start(), grid.goal(), |_| {});
        assert_eq!(
            result.path,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2)
            ]
        );
        assert_eq!(result.visited, 5);
    }

    /// The goal two steps east is only found after sweeping the whole grid.
    #[test]
    fn path_is_not_shortest() {
        let grid = open_grid(3, 3);
        let goal = Cell::new(2, 0);
        let result = DfsSolver.search(&grid, grid.start(), goal, |_| {});
        assert_eq!(result.path_len(), 6);
        assert_eq!(result.visited, 7);
    }

    #[test]
    fn each_cell_is_discovered_once() {
        let grid = open_grid(5, 5);
        let mut seen = Vec::new();
        DfsSolver.search(&grid, grid.start(), Cell::new(4, 0), |cell| seen.push(cell));
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), seen.len());
    }
}
