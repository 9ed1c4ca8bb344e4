use crate::frontier::FifoFrontier;
use crate::solver::GridSolver;

/// Breadth-first search. Expands cells in order of edge distance from the start, so the first
/// path to the goal is a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier<u32>;
}
