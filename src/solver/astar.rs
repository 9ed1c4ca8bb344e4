use crate::cell::Cell;
use crate::frontier::PriorityFrontier;
use crate::solver::GridSolver;

/// A* with the Manhattan distance as heuristic. A discovered cell is re-opened whenever a
/// strictly shorter route to it turns up. Since the heuristic is consistent on a unit-cost
/// 4-grid, the path found is a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier<u32>;
    const RELAXES: bool = true;

    /// `f = g + h`.
    fn priority(&self, cell: &Cell, cost: u32, goal: &Cell) -> u32 {
        cost + cell.manhattan_distance(goal)
    }
}
