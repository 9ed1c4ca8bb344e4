use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::{Error, Result};

/// [SearchGrid] is the read-only world a search runs on. The raw [bool] values in the [BoolGrid]
/// mark a cell as blocked ([true]) or free ([false]). Connected components are computed once with
/// a [UnionFind] at construction; there is no mutation API, so regenerating a maze means building
/// a new [SearchGrid] and no running search ever observes a changing grid.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
    start: Cell,
    goal: Cell,
}

impl SearchGrid {
    /// Builds a grid where `blocked` decides every cell in row-major order. Start and goal are
    /// forced free whatever `blocked` says about them.
    pub fn from_fn<F>(
        width: usize,
        height: usize,
        start: Cell,
        goal: Cell,
        mut blocked: F,
    ) -> Result<SearchGrid>
    where
        F: FnMut(Cell) -> bool,
    {
        for cell in [start, goal] {
            if !cell_in_bounds(width, height, cell) {
                return Err(Error::InvalidCell {
                    cell,
                    width,
                    height,
                });
            }
        }
        let mut grid = BoolGrid::new(width, height, false);
        for (y, x) in iproduct!(0..height, 0..width) {
            let cell = Cell::new(x as i32, y as i32);
            let is_blocked = blocked(cell);
            grid.set(x, y, is_blocked && cell != start && cell != goal);
        }
        let mut search_grid = SearchGrid {
            grid,
            components: UnionFind::new(width * height),
            start,
            goal,
        };
        search_grid.generate_components();
        Ok(search_grid)
    }

    /// Parses rows of text where `#` marks a blocked cell and anything else is free.
    pub fn from_rows(rows: &[&str], start: Cell, goal: Cell) -> Result<SearchGrid> {
        let width = rows.first().map_or(0, |row| row.len());
        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
        }
        SearchGrid::from_fn(width, rows.len(), start, goal, |cell| {
            rows[cell.y as usize].as_bytes()[cell.x as usize] == b'#'
        })
    }

    /// Blocks every cell independently with probability `density`.
    pub fn random<R>(
        width: usize,
        height: usize,
        density: f64,
        start: Cell,
        goal: Cell,
        rng: &mut R,
    ) -> Result<SearchGrid>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity { density });
        }
        let grid = SearchGrid::from_fn(width, height, start, goal, |_| rng.gen_bool(density))?;
        info!(
            "Generated {}x{} grid with density {}: {} free cells",
            width,
            height,
            density,
            grid.free_count()
        );
        Ok(grid)
    }

    /// Generates a random grid from a [GridConfig], seeding from entropy unless a seed is given.
    pub fn from_config(config: &GridConfig) -> Result<SearchGrid> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SearchGrid::random(
            config.width,
            config.height,
            config.density,
            config.start(),
            config.goal(),
            &mut rng,
        )
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && self.grid.index_in_bounds(cell.x as usize, cell.y as usize)
    }

    /// False for out of bounds or blocked cells.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.grid.get(cell.x as usize, cell.y as usize)
    }

    /// Fails with [Error::InvalidCell] unless `cell` lies on the grid.
    pub fn check_cell(&self, cell: Cell) -> Result<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(Error::InvalidCell {
                cell,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Passable orthogonal neighbours of `cell` in east, west, south, north order.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|&n| self.is_passable(n))
            .collect()
    }

    pub fn free_count(&self) -> usize {
        self.cells().filter(|&c| self.is_passable(c)).count()
    }

    /// Checks if `a` and `b` are both free and on the same connected component.
    pub fn reachable(&self, a: Cell, b: Cell) -> bool {
        self.is_passable(a)
            && self.is_passable(b)
            && self.components.equiv(self.get_ix(a), self.get_ix(b))
    }

    /// Number of free cells on the component of `cell`, zero for blocked cells.
    pub fn component_size(&self, cell: Cell) -> usize {
        if !self.is_passable(cell) {
            return 0;
        }
        let root = self.components.find(self.get_ix(cell));
        self.cells()
            .filter(|&c| self.is_passable(c) && self.components.find(self.get_ix(c)) == root)
            .count()
    }

    fn cells(&self) -> impl Iterator<Item = Cell> {
        iproduct!(0..self.height() as i32, 0..self.width() as i32).map(|(y, x)| Cell::new(x, y))
    }

    fn get_ix(&self, cell: Cell) -> usize {
        self.grid.get_ix(cell.x as usize, cell.y as usize)
    }

    /// Links every free cell to its free east and south neighbours.
    fn generate_components(&mut self) {
        for cell in self.cells() {
            if !self.is_passable(cell) {
                continue;
            }
            let parent_ix = self.get_ix(cell);
            for n in [Cell::new(cell.x + 1, cell.y), Cell::new(cell.x, cell.y + 1)] {
                if self.is_passable(n) {
                    let ix = self.get_ix(n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

fn cell_in_bounds(width: usize, height: usize, cell: Cell) -> bool {
    cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < width && (cell.y as usize) < height
}

/// Generates a random grid with the thread-local RNG.
pub fn generate_grid(
    width: usize,
    height: usize,
    density: f64,
    start: Cell,
    goal: Cell,
) -> Result<SearchGrid> {
    SearchGrid::random(
        width,
        height,
        density,
        start,
        goal,
        &mut rand::thread_rng(),
    )
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let p = Cell::new(x, y);
                let c = if p == self.start {
                    'S'
                } else if p == self.goal {
                    'G'
                } else if self.is_passable(p) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let grid = SearchGrid::from_rows(&[".#.", ".#."], Cell::new(0, 0), Cell::new(0, 1)).unwrap();
        assert!(grid.reachable(Cell::new(0, 0), Cell::new(0, 1)));
        assert!(!grid.reachable(Cell::new(0, 0), Cell::new(2, 0)));
        assert!(!grid.reachable(Cell::new(0, 0), Cell::new(1, 1)));
        assert_eq!(grid.component_size(Cell::new(0, 0)), 2);
        assert_eq!(grid.component_size(Cell::new(2, 1)), 2);
        assert_eq!(grid.component_size(Cell::new(1, 0)), 0);
        assert_eq!(grid.free_count(), 4);
    }

    /// The corners of a 3x3 ring are connected on a 4-grid.
    #[test]
    fn reachable_around_obstacle() {
        let grid = SearchGrid::from_rows(&["...", ".#.", "..."], Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert!(grid.reachable(grid.start(), grid.goal()));
    }

    /// Diagonal contact does not connect cells.
    #[test]
    fn diagonal_cells_are_not_connected() {
        let grid = SearchGrid::from_rows(&[".#", "#."], Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert!(!grid.reachable(grid.start(), grid.goal()));
        assert!(grid.neighbours(Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn endpoints_are_forced_free() {
        let grid = SearchGrid::from_fn(4, 4, Cell::new(0, 0), Cell::new(3, 3), |_| true).unwrap();
        assert!(grid.is_passable(Cell::new(0, 0)));
        assert!(grid.is_passable(Cell::new(3, 3)));
        assert_eq!(grid.free_count(), 2);
    }

    #[test]
    fn out_of_bounds_is_not_passable() {
        let grid = SearchGrid::from_fn(2, 2, Cell::new(0, 0), Cell::new(1, 1), |_| false).unwrap();
        assert!(!grid.is_passable(Cell::new(-1, 0)));
        assert!(!grid.is_passable(Cell::new(2, 0)));
        assert!(!grid.is_passable(Cell::new(0, 2)));
        assert_eq!(
            grid.neighbours(Cell::new(0, 0)).as_slice(),
            &[Cell::new(1, 0), Cell::new(0, 1)]
        );
    }

    #[test]
    fn endpoints_outside_grid_are_rejected() {
        let err = SearchGrid::from_fn(3, 3, Cell::new(0, 0), Cell::new(3, 0), |_| false).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCell {
                cell: Cell::new(3, 0),
                width: 3,
                height: 3
            }
        );
        assert!(SearchGrid::from_fn(0, 0, Cell::new(0, 0), Cell::new(0, 0), |_| false).is_err());
    }

    #[test]
    fn density_must_be_a_probability() {
        let mut rng = StdRng::seed_from_u64(0);
        for density in [-0.1, 1.5, f64::NAN] {
            let result = SearchGrid::random(4, 4, density, Cell::new(0, 0), Cell::new(3, 3), &mut rng);
            assert!(matches!(result, Err(Error::InvalidDensity { .. })));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = GridConfig::new(12, 9, 0.3).with_seed(7);
        let a = SearchGrid::from_config(&config).unwrap();
        let b = SearchGrid::from_config(&config).unwrap();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.goal(), Cell::new(11, 8));
    }

    #[test]
    fn components_span_long_thin_grids() {
        let wide = SearchGrid::from_fn(300, 1, Cell::new(0, 0), Cell::new(299, 0), |_| false).unwrap();
        assert!(wide.reachable(wide.start(), wide.goal()));
        assert_eq!(wide.component_size(wide.start()), 300);
        let split =
            SearchGrid::from_fn(1, 300, Cell::new(0, 0), Cell::new(0, 299), |c| c.y == 150).unwrap();
        assert!(!split.reachable(split.start(), split.goal()));
        assert_eq!(split.component_size(split.start()), 150);
        assert_eq!(split.component_size(split.goal()), 149);
    }

    #[test]
    fn generated_grid_has_requested_shape_and_free_endpoints() {
        let start = Cell::new(4, 0);
        let goal = Cell::new(0, 5);
        let grid = generate_grid(7, 6, 1.0, start, goal).unwrap();
        assert_eq!((grid.width(), grid.height()), (7, 6));
        assert_eq!((grid.start(), grid.goal()), (start, goal));
        assert!(grid.is_passable(start));
        assert!(grid.is_passable(goal));
        assert_eq!(grid.free_count(), 2);
        assert!(matches!(
            generate_grid(7, 6, 0.5, start, Cell::new(7, 0)),
            Err(Error::InvalidCell { .. })
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = SearchGrid::from_rows(&["...", ".."], Cell::new(0, 0), Cell::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn display_marks_endpoints_and_walls() {
        let grid = SearchGrid::from_rows(&["..#", "#.."], Cell::new(0, 0), Cell::new(2, 1)).unwrap();
        assert_eq!(grid.to_string(), "S.#\n#.G\n");
    }
}
