use thiserror::Error;

use crate::cell::Cell;

/// Convenient result alias for grid searches.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced before any search work begins. An unreachable goal is not an error, it
/// is a successful search with an empty path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raised when a strategy is requested by a name that does not match any known strategy.
    #[error("unknown search strategy: {name}")]
    UnknownStrategy { name: String },

    /// Raised when a start or goal cell lies outside the grid.
    #[error("cell {cell} is outside the {width}x{height} grid")]
    InvalidCell {
        cell: Cell,
        width: usize,
        height: usize,
    },

    /// Raised when the obstacle density for random generation is not a probability.
    #[error("obstacle density {density} is not within [0, 1]")]
    InvalidDensity { density: f64 },

    /// Raised when textual grid rows do not all have the same length.
    #[error("grid row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
