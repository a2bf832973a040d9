//! Outline derivation - the connector segments that trace a selection.
//!
//! A rectangle is drawn as half-edges: every dot on the perimeter gets one
//! segment pointing at each perimeter neighbor. Two facing half-edges make up
//! one full grid edge. The outline is a pure function of the selection state
//! and hover point and is recomputed after every processed event.

use crate::geometry::Point;
use crate::profile_scope;
use crate::selection::SelectionState;
use std::collections::BTreeSet;
use tracing::trace;

/// Direction of a half-edge, seen from the dot it is attached to.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// The dot this half-edge points at
    pub fn neighbor(self, p: Point) -> Point {
        match self {
            Side::Left => Point::new(p.x - 1, p.y),
            Side::Right => Point::new(p.x + 1, p.y),
            Side::Top => Point::new(p.x, p.y - 1),
            Side::Bottom => Point::new(p.x, p.y + 1),
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// Whether a segment belongs to a committed selection or a hover preview.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SegmentKind {
    Committed,
    Preview,
}

/// A half-edge drawn from dot `at` toward its neighbor on `side`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConnectorSegment {
    pub at: Point,
    pub side: Side,
    pub kind: SegmentKind,
}

impl ConnectorSegment {
    pub const fn new(at: Point, side: Side, kind: SegmentKind) -> Self {
        Self { at, side, kind }
    }
}

/// Derive the outline for the current selection.
///
/// - `Committed` traces the committed pair with `SegmentKind::Committed`.
/// - `Anchored` with a hover point traces `(anchor, hover)` as a preview.
/// - Anything else has no outline.
pub fn derive_segments(state: &SelectionState, hover: Option<Point>) -> BTreeSet<ConnectorSegment> {
    profile_scope!("derive_segments");

    let (p0, p1, kind) = match (state, hover) {
        (SelectionState::Committed { first, second }, _) => (*first, *second, SegmentKind::Committed),
        (SelectionState::Anchored { anchor }, Some(hover)) => (*anchor, hover, SegmentKind::Preview),
        _ => return BTreeSet::new(),
    };

    let outline = rectangle_outline(p0, p1, kind);
    trace!(segments = outline.len(), ?kind, "Derived outline");
    outline
}

/// Half-edges along the perimeter of the rectangle spanned by two corners.
///
/// Degenerate rectangles (shared row or column) use the same rules and end
/// up with no segments along the collapsed axis.
pub fn rectangle_outline(p0: Point, p1: Point, kind: SegmentKind) -> BTreeSet<ConnectorSegment> {
    let (xmin, xmax) = (p0.x.min(p1.x), p0.x.max(p1.x));
    let (ymin, ymax) = (p0.y.min(p1.y), p0.y.max(p1.y));
    let mut outline = BTreeSet::new();

    // Top and bottom edges. A set absorbs the duplicate row when ymin == ymax.
    for y in [ymin, ymax] {
        for x in xmin..xmax {
            outline.insert(ConnectorSegment::new(Point::new(x, y), Side::Right, kind));
        }
        for x in (xmin + 1)..=xmax {
            outline.insert(ConnectorSegment::new(Point::new(x, y), Side::Left, kind));
        }
    }

    // Left and right edges
    for x in [xmin, xmax] {
        for y in ymin..ymax {
            outline.insert(ConnectorSegment::new(Point::new(x, y), Side::Bottom, kind));
        }
        for y in (ymin + 1)..=ymax {
            outline.insert(ConnectorSegment::new(Point::new(x, y), Side::Top, kind));
        }
    }

    outline
}

/// True exactly for the lone anchor while a selection is anchored.
pub fn is_anchor_dot(state: &SelectionState, p: Point) -> bool {
    state.anchor() == Some(p)
}

/// Segments attached to one dot, in `Side` order.
pub fn segments_at(
    outline: &BTreeSet<ConnectorSegment>,
    p: Point,
) -> impl Iterator<Item = &ConnectorSegment> {
    let lo = ConnectorSegment::new(p, Side::Left, SegmentKind::Committed);
    let hi = ConnectorSegment::new(p, Side::Bottom, SegmentKind::Preview);
    outline.range(lo..=hi)
}
