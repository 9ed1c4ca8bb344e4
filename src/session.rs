use core::fmt;
use indexmap::IndexMap;
use log::{debug, info};
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::{Error, Result};
use crate::grid::SearchGrid;
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BfsSolver;
use crate::solver::dfs::DfsSolver;
use crate::solver::greedy::GreedySolver;
use crate::solver::{GridSolver, SearchResult};

/// The strategies a [Session] can run, addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Bfs,
    Dfs,
    AStar,
    GreedyBestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::AStar,
        Strategy::GreedyBestFirst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::AStar => "A*",
            Strategy::GreedyBestFirst => "Best-First",
        }
    }

    /// Runs the strategy without bounds checks or timing.
    pub fn search<F>(&self, grid: &SearchGrid, start: Cell, goal: Cell, on_expand: F) -> SearchResult
    where
        F: FnMut(Cell),
    {
        match self {
            Strategy::Bfs => BfsSolver.search(grid, start, goal, on_expand),
            Strategy::Dfs => DfsSolver.search(grid, start, goal, on_expand),
            Strategy::AStar => AstarSolver.search(grid, start, goal, on_expand),
            Strategy::GreedyBestFirst => GreedySolver.search(grid, start, goal, on_expand),
        }
    }

    /// Checks the endpoints, then times a search and wraps it in a [RunReport].
    pub fn run<F>(&self, grid: &SearchGrid, start: Cell, goal: Cell, on_expand: F) -> Result<RunReport>
    where
        F: FnMut(Cell),
    {
        grid.check_cell(start)?;
        grid.check_cell(goal)?;
        debug!("Running {} from {} to {}", self.name(), start, goal);
        let timer = Instant::now();
        let result = self.search(grid, start, goal, on_expand);
        let elapsed = timer.elapsed();
        let report = RunReport::new(*self, result, elapsed);
        info!(
            "{} expanded {} cells in {:?}, path length {}",
            self.name(),
            report.visited,
            report.elapsed,
            report.path_len()
        );
        Ok(report)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Strategy> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "a*" | "astar" | "a-star" => Ok(Strategy::AStar),
            "best-first" | "greedy" | "greedy-best-first" => Ok(Strategy::GreedyBestFirst),
            _ => Err(Error::UnknownStrategy {
                name: s.to_owned(),
            }),
        }
    }
}

/// Statistics of one strategy run. Keeps the found path so it can be drawn afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub strategy: Strategy,
    pub visited: usize,
    pub elapsed: Duration,
    pub path: Vec<Cell>,
}

impl RunReport {
    pub fn new(strategy: Strategy, result: SearchResult, elapsed: Duration) -> RunReport {
        RunReport {
            strategy,
            visited: result.visited,
            elapsed,
            path: result.path,
        }
    }

    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} finished!", self.strategy)?;
        writeln!(f, "Nodes: {}", self.visited)?;
        writeln!(f, "Time: {:.2}s", self.elapsed.as_secs_f64())?;
        write!(f, "Path: {}", self.path_len())
    }
}

/// Parses `name` and runs that strategy on `grid`, see [Strategy::run].
pub fn run_strategy<F>(
    name: &str,
    grid: &SearchGrid,
    start: Cell,
    goal: Cell,
    on_expand: F,
) -> Result<RunReport>
where
    F: FnMut(Cell),
{
    name.parse::<Strategy>()?.run(grid, start, goal, on_expand)
}

/// Owns the current grid and the latest [RunReport] of every strategy run on it. Replacing the
/// grid clears the reports.
#[derive(Clone, Debug)]
pub struct Session {
    grid: SearchGrid,
    reports: IndexMap<Strategy, RunReport>,
}

impl Session {
    pub fn new(grid: SearchGrid) -> Session {
        Session {
            grid,
            reports: IndexMap::new(),
        }
    }

    /// Starts a session on a freshly generated grid.
    pub fn from_config(config: &GridConfig) -> Result<Session> {
        Ok(Session::new(SearchGrid::from_config(config)?))
    }

    pub fn grid(&self) -> &SearchGrid {
        &self.grid
    }

    /// Generates a new grid and forgets every report. On error the session is left untouched.
    pub fn generate_grid(&mut self, config: &GridConfig) -> Result<&SearchGrid> {
        let grid = SearchGrid::from_config(config)?;
        Ok(self.replace_grid(grid))
    }

    pub fn replace_grid(&mut self, grid: SearchGrid) -> &SearchGrid {
        self.grid = grid;
        self.reports.clear();
        &self.grid
    }

    /// Runs the strategy called `name` on the current grid and records its report, replacing the
    /// previous report of the same strategy.
    pub fn run_strategy<F>(
        &mut self,
        name: &str,
        start: Cell,
        goal: Cell,
        on_expand: F,
    ) -> Result<&RunReport>
    where
        F: FnMut(Cell),
    {
        let strategy = name.parse::<Strategy>()?;
        self.run(strategy, start, goal, on_expand)
    }

    pub fn run<F>(
        &mut self,
        strategy: Strategy,
        start: Cell,
        goal: Cell,
        on_expand: F,
    ) -> Result<&RunReport>
    where
        F: FnMut(Cell),
    {
        let report = strategy.run(&self.grid, start, goal, on_expand)?;
        self.reports.insert(strategy, report);
        Ok(&self.reports[&strategy])
    }

    /// Latest reports in the order the strategies were first run.
    pub fn all_reports(&self) -> &IndexMap<Strategy, RunReport> {
        &self.reports
    }

    pub fn report(&self, strategy: Strategy) -> Option<&RunReport> {
        self.reports.get(&strategy)
    }

    /// Cells visited by every strategy, zero for those not run yet.
    pub fn visited_counts(&self) -> [(Strategy, usize); 4] {
        Strategy::ALL.map(|s| (s, self.report(s).map_or(0, |r| r.visited)))
    }

    /// Percentage of all visited cells each strategy accounts for. All zero before any run.
    pub fn exploration_share(&self) -> [(Strategy, f64); 4] {
        let counts = self.visited_counts();
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        counts.map(|(s, n)| {
            let share = if total == 0 {
                0.0
            } else {
                100.0 * n as f64 / total as f64
            };
            (s, share)
        })
    }
}
