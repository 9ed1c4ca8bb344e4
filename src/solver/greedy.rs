use crate::cell::Cell;
use crate::frontier::PriorityFrontier;
use crate::solver::GridSolver;

/// Greedy best-first search. Always expands the discovered cell closest to the goal by
/// Manhattan distance, ignoring how far it is from the start. Ties favour the deeper cell, i.e.
/// the one discovered further along its path. The first predecessor a cell gets is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    type Frontier = PriorityFrontier<u32>;

    fn priority(&self, cell: &Cell, _cost: u32, goal: &Cell) -> u32 {
        cell.manhattan_distance(goal)
    }
}
