use crate::cell::Cell;

/// Side length of the square grid generated when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 20;
/// Probability of any given cell being blocked in a generated grid.
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Parameters for random grid generation. `start` and `goal` default to opposite corners and
/// `seed` to fresh entropy.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub density: f64,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            density: DEFAULT_DENSITY,
            start: None,
            goal: None,
            seed: None,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize, density: f64) -> GridConfig {
        GridConfig {
            width,
            height,
            density,
            ..GridConfig::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> GridConfig {
        self.seed = Some(seed);
        self
    }

    pub fn start(&self) -> Cell {
        self.start.unwrap_or_default()
    }

    /// The configured goal, or the corner opposite the origin.
    pub fn goal(&self) -> Cell {
        self.goal.unwrap_or_else(|| {
            Cell::new(
                self.width.saturating_sub(1) as i32,
                self.height.saturating_sub(1) as i32,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_are_opposite_corners() {
        let config = GridConfig::default();
        assert_eq!(config.start(), Cell::new(0, 0));
        assert_eq!(config.goal(), Cell::new(19, 19));
        let config = GridConfig::new(5, 3, 0.0);
        assert_eq!(config.goal(), Cell::new(4, 2));
    }
}
