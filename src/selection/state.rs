//! Selection state machine - the single source of truth for what is selected.
//!
//! ## State Transitions
//!
//! ```text
//! Empty     -> Anchored     (activate / press)
//! Anchored  -> Committed    (activate / non-degenerate release)
//! Anchored  -> Empty        (degenerate release)
//! Committed -> Anchored     (activate / press restarts the selection)
//! ```
//!
//! `Committed` is never entered directly from `Empty`.

use crate::geometry::Point;

/// Current selection on a dot grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// No anchor chosen
    #[default]
    Empty,

    /// First corner fixed, second corner not yet committed
    Anchored {
        /// The first corner
        anchor: Point,
    },

    /// Both corners fixed, in the order they were chosen
    Committed {
        /// Corner chosen first
        first: Point,
        /// Corner chosen second
        second: Point,
    },
}

/// True when two corners span a rectangle with non-zero width and height.
#[inline]
pub fn is_non_degenerate(a: Point, b: Point) -> bool {
    a.x != b.x && a.y != b.y
}

impl SelectionState {
    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if only the anchor is fixed
    pub fn is_anchored(&self) -> bool {
        matches!(self, Self::Anchored { .. })
    }

    /// Returns true if both corners are fixed
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// Get the lone anchor, if anchored
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Anchored { anchor } => Some(*anchor),
            _ => None,
        }
    }

    /// Get the committed corners in the order they were chosen
    pub fn selection(&self) -> Option<(Point, Point)> {
        match self {
            Self::Committed { first, second } => Some((*first, *second)),
            _ => None,
        }
    }
}
