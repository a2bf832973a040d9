//! Pointer input handling for the dot grid.
//!
//! This module implements the selection state machine: how pointer events
//! on dots turn into an anchor, a hover preview and finally a committed pair
//! of opposing corners.
//!
//! ## Architecture
//!
//! The selection is an explicit state machine (`SelectionState`) owned by a
//! `SelectionMachine` together with the hover point. Two interaction modes
//! share the same state and differ only in their event handlers:
//!
//! - `click` - click-commit: one activate per corner
//! - `press_release` - press on the first corner, release on the second
//!
//! ## Modules
//!
//! - `state` - Selection state enum and helper methods
//! - `machine` - Owner of state + hover, event dispatch and validation
//! - `click` - Click-commit event handling
//! - `press_release` - Press/drag/release event handling

mod click;
mod machine;
mod press_release;
mod state;

pub use machine::{InteractionMode, PointerEvent, SelectionMachine, Transition};
pub use state::{SelectionState, is_non_degenerate};
