use fxhash::FxHashMap;
use log::{debug, warn};
use num_traits::{One, Zero};
use std::collections::hash_map::Entry::{Occupied, Vacant};

use crate::cell::Cell;
use crate::frontier::{Candidate, Frontier};
use crate::grid::SearchGrid;
use crate::path::PredecessorMap;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;

/// Outcome of a single search. `path` runs from the cell after the start up to and including
/// the goal and is empty when the goal is unreachable or equal to the start. `visited` counts
/// expansions, i.e. cells popped from the frontier. Entries made stale when A* finds a cheaper
/// route to a queued cell are discarded on pop and not counted, so an unreachable goal yields
/// exactly the number of cells reachable from the start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Vec<Cell>,
    pub visited: usize,
}

impl SearchResult {
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// A search strategy on a [SearchGrid]. Strategies differ only in the frontier they expand from,
/// the priority they give to discovered cells and whether a cheaper route may re-open a cell.
pub trait GridSolver {
    type Frontier: Frontier<u32> + Default;

    /// Whether a strictly cheaper route to an already discovered cell replaces its predecessor
    /// and puts it back on the frontier.
    const RELAXES: bool = false;

    /// Priority of a cell discovered at path cost `cost`. Lower is expanded first; FIFO and LIFO
    /// frontiers ignore it.
    fn priority(&self, _cell: &Cell, _cost: u32, _goal: &Cell) -> u32 {
        0
    }

    /// Searches from `start` to `goal`, calling `on_expand` once for every cell the first time
    /// it receives a predecessor. The start itself is never reported.
    fn search<F>(&self, grid: &SearchGrid, start: Cell, goal: Cell, on_expand: F) -> SearchResult
    where
        F: FnMut(Cell),
    {
        explore(
            grid,
            start,
            goal,
            Self::Frontier::default(),
            Self::RELAXES,
            |cell, cost| self.priority(cell, cost, &goal),
            on_expand,
        )
    }
}

/// The exploration loop shared by all strategies. Stops as soon as `goal` is popped or the
/// frontier runs dry.
pub fn explore<C, Q, FP, FO>(
    grid: &SearchGrid,
    start: Cell,
    goal: Cell,
    mut frontier: Q,
    relax: bool,
    mut priority: FP,
    mut on_expand: FO,
) -> SearchResult
where
    C: Zero + One + Ord + Copy,
    Q: Frontier<C>,
    FP: FnMut(&Cell, C) -> C,
    FO: FnMut(Cell),
{
    let mut predecessors = PredecessorMap::new(start);
    let mut costs: FxHashMap<Cell, C> = FxHashMap::default();
    costs.insert(start, C::zero());
    frontier.push(
        Candidate {
            cell: start,
            cost: C::zero(),
        },
        priority(&start, C::zero()),
    );
    let mut visited = 0;
    while let Some(Candidate { cell, cost }) = frontier.pop() {
        // Entries left behind by relaxation carry a cost above the best known one
        if costs.get(&cell).is_some_and(|&best| cost > best) {
            continue;
        }
        visited += 1;
        if cell == goal {
            return SearchResult {
                path: predecessors.reconstruct(start, goal),
                visited,
            };
        }
        let new_cost = cost + C::one();
        for next in grid.neighbours(cell) {
            match costs.entry(next) {
                Vacant(e) => {
                    e.insert(new_cost);
                    predecessors.discover(next, cell);
                    on_expand(next);
                }
                Occupied(mut e) => {
                    if relax && new_cost < *e.get() {
                        e.insert(new_cost);
                        predecessors.relink(next, cell);
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(
                Candidate {
                    cell: next,
                    cost: new_cost,
                },
                priority(&next, new_cost),
            );
        }
    }
    if grid.reachable(start, goal) {
        warn!("Frontier drained although {goal} shares a component with {start}");
    } else {
        debug!("{goal} is not reachable from {start}, expanded {visited} cells");
    }
    SearchResult {
        path: Vec::new(),
        visited,
    }
}
