//! Grid geometry - dot coordinates and the fixed extent of a grid.

use crate::error::{GridError, GridResult};
use std::fmt;

/// A dot on the grid, addressed by column `x` and row `y`.
///
/// Coordinates are signed so that pointer mapping that lands outside the
/// grid can still be represented and rejected.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Immutable extent of a dot grid: `columns` x `rows`, both at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridGeometry {
    columns: i32,
    rows: i32,
}

/// Validate a grid extent.
///
/// Fails with [`GridError::InvalidGeometry`] if either dimension is not positive.
pub fn configure(columns: i32, rows: i32) -> GridResult<GridGeometry> {
    GridGeometry::new(columns, rows)
}

impl GridGeometry {
    pub fn new(columns: i32, rows: i32) -> GridResult<Self> {
        if columns < 1 || rows < 1 {
            return Err(GridError::InvalidGeometry { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of dots on the grid
    #[inline]
    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// A valid geometry always has at least one dot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.columns && p.y >= 0 && p.y < self.rows
    }

    /// Return the point unchanged if it lies on the grid.
    pub fn check(&self, p: Point) -> GridResult<Point> {
        if self.contains(p) {
            Ok(p)
        } else {
            Err(GridError::OutOfBoundsPoint {
                point: p,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    /// Row-major index of a point (`y * columns + x`)
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.columns as usize + p.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of)
    pub fn point_at(&self, index: usize) -> Option<Point> {
        if index >= self.len() {
            return None;
        }
        let columns = self.columns as usize;
        Some(Point::new((index % columns) as i32, (index / columns) as i32))
    }

    /// All dots in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |y| (0..columns).map(move |x| Point::new(x, y)))
    }
}
