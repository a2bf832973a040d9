//! Rectangle selection on a fixed grid of dots.
//!
//! A user picks two opposing corners on the grid; the crate tracks the
//! selection (with a live hover preview while the second corner is being
//! chosen) and derives the connector segments that outline the rectangle.
//!
//! - `geometry` - grid extent and dot coordinates
//! - `selection` - selection state machine, click-commit and press/release modes
//! - `outline` - connector segments for a selection or preview
//! - `observer` - callback boundary for selection changes
//! - `grid` - one grid instance: event -> state -> outline -> observer
//! - `settings` - JSON settings (grid size, interaction mode)
//! - `render` - text rendering, and a gpui view with the `gui` feature

pub mod constants;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod observer;
pub mod outline;
pub mod perf;
pub mod render;
pub mod selection;
pub mod settings;

pub use error::{GridError, GridResult};
pub use geometry::{GridGeometry, Point, configure};
pub use grid::DotGrid;
pub use observer::SelectionObserver;
pub use outline::{ConnectorSegment, SegmentKind, Side, derive_segments};
pub use selection::{InteractionMode, PointerEvent, SelectionState, Transition};
