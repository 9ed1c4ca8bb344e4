use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use crate::cell::Cell;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps every cell a search has reached to the cell it was reached from. The start maps to
/// [None]. Cells are kept in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredecessorMap {
    links: FxIndexMap<Cell, Option<Cell>>,
}

impl PredecessorMap {
    pub fn new(start: Cell) -> PredecessorMap {
        let mut links = FxIndexMap::default();
        links.insert(start, None);
        PredecessorMap { links }
    }

    /// Records `parent` as predecessor of `cell` unless `cell` is already known. Returns whether
    /// the cell was newly discovered.
    pub fn discover(&mut self, cell: Cell, parent: Cell) -> bool {
        match self.links.entry(cell) {
            Vacant(e) => {
                e.insert(Some(parent));
                true
            }
            Occupied(_) => false,
        }
    }

    /// Points an already discovered cell at a new predecessor.
    pub fn relink(&mut self, cell: Cell, parent: Cell) {
        self.links.insert(cell, Some(parent));
    }

    pub fn predecessor(&self, cell: &Cell) -> Option<Cell> {
        self.links.get(cell).copied().flatten()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.links.contains_key(cell)
    }

    /// Walks predecessor links back from `goal` and returns the cells from just after `start`
    /// up to and including `goal`. Empty if `goal` was never reached or equals `start`.
    ///
    /// # Panics
    ///
    /// Panics if the links starting at `goal` form a cycle or end before reaching `start`.
    pub fn reconstruct(&self, start: Cell, goal: Cell) -> Vec<Cell> {
        if !self.contains(&goal) {
            return Vec::new();
        }
        let mut path: Vec<Cell> = std::iter::successors(Some(goal), |cell| {
            if *cell == start {
                return None;
            }
            match self.links.get(cell) {
                Some(Some(parent)) => Some(*parent),
                _ => panic!("predecessor chain from {goal} ends at {cell} before reaching {start}"),
            }
        })
        // A chain longer than the number of links must revisit a cell
        .take(self.links.len() + 1)
        .collect();
        assert!(
            path.last() == Some(&start),
            "predecessor chain from {goal} does not terminate at {start}"
        );
        path.pop();
        path.reverse();
        path
    }
}

impl FromIterator<(Cell, Option<Cell>)> for PredecessorMap {
    fn from_iter<I: IntoIterator<Item = (Cell, Option<Cell>)>>(iter: I) -> Self {
        PredecessorMap {
            links: iter.into_iter().collect(),
        }
    }
}
