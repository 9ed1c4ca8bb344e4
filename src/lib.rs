//! # grid_search
//!
//! Uninformed and informed search on a 4-connected grid of free and blocked cells.
//! [Breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and
//! [greedy best-first](https://en.wikipedia.org/wiki/Best-first_search) search share one
//! exploration loop and differ only in their frontier. Every run reports the path, the number of
//! expanded cells and the time it took, and calls an observer for each newly discovered cell so a
//! front end can animate the exploration at its own pace. Note that this assumes a uniform-cost
//! grid.
//!
//! ```
//! use grid_search::{Cell, SearchGrid, Session};
//!
//! let grid = SearchGrid::from_rows(&["...", ".#.", "..."], Cell::new(0, 0), Cell::new(2, 2))?;
//! let mut session = Session::new(grid);
//! let mut discovered = Vec::new();
//! let report = session.run_strategy("A*", Cell::new(0, 0), Cell::new(2, 2), |c| discovered.push(c))?;
//! assert_eq!(report.path_len(), 4);
//! # Ok::<(), grid_search::Error>(())
//! ```
pub mod cell;
pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod path;
pub mod session;
pub mod solver;

pub use cell::Cell;
pub use config::{GridConfig, DEFAULT_DENSITY, DEFAULT_GRID_SIZE};
pub use error::{Error, Result};
pub use grid::{generate_grid, SearchGrid};
pub use path::PredecessorMap;
pub use session::{run_strategy, RunReport, Session, Strategy};
pub use solver::{GridSolver, SearchResult};
