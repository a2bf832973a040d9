//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `Recorder` - an observer that records every notification
//! - `TestGridBuilder` - builder for grids with an attached recorder
//! - Helper functions like `pt()`, `run()`, `perimeter_dots()`
//! - proptest strategies for points, corner pairs and event streams

use dotbox::geometry::{GridGeometry, Point};
use dotbox::grid::DotGrid;
use dotbox::observer::SelectionObserver;
use dotbox::outline::{ConnectorSegment, Side};
use dotbox::selection::{InteractionMode, PointerEvent};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Shorthand for a grid point.
pub fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

// ============================================================================
// Recorder - observer that keeps every notification
// ============================================================================

/// Observer handle whose clones share one notification log.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Option<(Point, Point)>>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, in order.
    pub fn calls(&self) -> Vec<Option<(Point, Point)>> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SelectionObserver for Recorder {
    fn selection_changed(&mut self, selection: Option<(Point, Point)>) {
        self.calls.borrow_mut().push(selection);
    }
}

// ============================================================================
// TestGridBuilder - Builder pattern for creating test grids
// ============================================================================

/// Builder for creating test grids.
///
/// # Example
/// ```ignore
/// let (grid, recorder) = TestGridBuilder::new()
///     .with_size(8, 8)
///     .with_mode(InteractionMode::PressRelease)
///     .build();
/// ```
pub struct TestGridBuilder {
    columns: i32,
    rows: i32,
    mode: InteractionMode,
}

impl Default for TestGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGridBuilder {
    /// 8x8 click-commit grid, like the default settings.
    pub fn new() -> Self {
        Self {
            columns: 8,
            rows: 8,
            mode: InteractionMode::ClickCommit,
        }
    }

    pub fn with_size(mut self, columns: i32, rows: i32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the grid with a recorder attached.
    pub fn build(self) -> (DotGrid, Recorder) {
        let geometry = GridGeometry::new(self.columns, self.rows).unwrap();
        let recorder = Recorder::new();
        let grid = DotGrid::new(geometry, self.mode).with_observer(recorder.clone());
        (grid, recorder)
    }
}

/// Click-commit grid of the given size with a recorder.
pub fn click_grid(columns: i32, rows: i32) -> (DotGrid, Recorder) {
    TestGridBuilder::new().with_size(columns, rows).build()
}

/// Press/release grid of the given size with a recorder.
pub fn drag_grid(columns: i32, rows: i32) -> (DotGrid, Recorder) {
    TestGridBuilder::new()
        .with_size(columns, rows)
        .with_mode(InteractionMode::PressRelease)
        .build()
}

/// Feed a script of events, panicking on the first rejected one.
pub fn run(grid: &mut DotGrid, events: &[PointerEvent]) {
    for event in events {
        grid.handle(*event).unwrap();
    }
}

// ============================================================================
// Outline assertions
// ============================================================================

/// Dots on the perimeter of the rectangle spanned by two corners.
pub fn perimeter_dots(a: Point, b: Point) -> BTreeSet<Point> {
    let (xmin, xmax) = (a.x.min(b.x), a.x.max(b.x));
    let (ymin, ymax) = (a.y.min(b.y), a.y.max(b.y));
    let mut dots = BTreeSet::new();
    for x in xmin..=xmax {
        dots.insert(pt(x, ymin));
        dots.insert(pt(x, ymax));
    }
    for y in ymin..=ymax {
        dots.insert(pt(xmin, y));
        dots.insert(pt(xmax, y));
    }
    dots
}

/// Number of segments attached to each dot.
pub fn degree_by_dot(outline: &BTreeSet<ConnectorSegment>) -> HashMap<Point, usize> {
    let mut degrees = HashMap::new();
    for segment in outline {
        *degrees.entry(segment.at).or_insert(0) += 1;
    }
    degrees
}

/// Assert every half-edge has its facing half on the neighbor dot.
pub fn assert_half_edges_paired(outline: &BTreeSet<ConnectorSegment>) {
    for segment in outline {
        let facing = ConnectorSegment::new(
            segment.side.neighbor(segment.at),
            segment.side.opposite(),
            segment.kind,
        );
        assert!(
            outline.contains(&facing),
            "segment {:?} has no facing half {:?}",
            segment,
            facing
        );
    }
}

/// Sides attached to a dot, in `Side` order.
pub fn sides_at(grid: &DotGrid, p: Point) -> Vec<Side> {
    grid.segments_at(p).map(|s| s.side).collect()
}

// ============================================================================
// Strategies
// ============================================================================

/// Any dot on a `columns` x `rows` grid.
pub fn point_in(columns: i32, rows: i32) -> impl Strategy<Value = Point> {
    (0..columns, 0..rows).prop_map(|(x, y)| Point::new(x, y))
}

/// Two corners on a `size` x `size` grid, in any order and possibly equal.
pub fn corner_pair(size: i32) -> impl Strategy<Value = (Point, Point)> {
    (point_in(size, size), point_in(size, size))
}

/// One in-bounds pointer event, biased toward hover like real pointer traffic.
pub fn pointer_event(columns: i32, rows: i32) -> impl Strategy<Value = PointerEvent> {
    prop_oneof![
        1 => point_in(columns, rows).prop_map(PointerEvent::Activate),
        1 => point_in(columns, rows).prop_map(PointerEvent::Press),
        1 => point_in(columns, rows).prop_map(PointerEvent::Release),
        1 => Just(PointerEvent::Leave),
        4 => point_in(columns, rows).prop_map(PointerEvent::Hover),
    ]
}

/// A grid size up to `max_side` per axis plus an event stream for it.
pub fn sized_event_stream(
    max_side: i32,
    max_len: usize,
) -> impl Strategy<Value = (i32, i32, Vec<PointerEvent>)> {
    (1..=max_side, 1..=max_side).prop_flat_map(move |(columns, rows)| {
        (
            Just(columns),
            Just(rows),
            proptest::collection::vec(pointer_event(columns, rows), 0..max_len),
        )
    })
}
