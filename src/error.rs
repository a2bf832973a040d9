//! Error types for grid configuration and pointer events.

use crate::geometry::Point;
use thiserror::Error;

/// Errors that can occur while configuring a grid or feeding it events
#[derive(Error, Debug)]
pub enum GridError {
    /// A grid dimension was zero or negative
    #[error("Invalid grid geometry: {columns}x{rows} (both dimensions must be positive)")]
    InvalidGeometry { columns: i32, rows: i32 },

    /// An event carried a point outside `[0, columns) x [0, rows)`
    #[error("Point {point} is outside the {columns}x{rows} grid")]
    OutOfBoundsPoint { point: Point, columns: i32, rows: i32 },

    /// Settings file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `GridSettings`
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for grid operations
pub type GridResult<T> = Result<T, GridError>;
