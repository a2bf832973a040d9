//! Rendering surfaces for a dot grid.
//!
//! - `text` - plain-text rendering, used for logging and snapshot tests
//! - `dots` - gpui view with one element per dot (`gui` feature)

#[cfg(feature = "gui")]
pub mod dots;
pub mod text;
