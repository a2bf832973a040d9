//! Application-wide constants.
//!
//! Centralizes grid defaults and layout values for the dot grid view.

// ============================================================================
// Grid Defaults
// ============================================================================

/// Default number of dot columns
pub const DEFAULT_COLUMNS: i32 = 8;

/// Default number of dot rows
pub const DEFAULT_ROWS: i32 = 8;

// ============================================================================
// Layout Constants
// ============================================================================

/// Size of the square cell that hosts one dot, in pixels
pub const CELL_SIZE: f32 = 36.0;

/// Diameter of an ordinary dot in pixels
pub const DOT_DIAMETER: f32 = 6.0;

/// Diameter of the highlighted anchor dot in pixels
pub const ANCHOR_DOT_DIAMETER: f32 = 12.0;

/// Thickness of a connector half-edge in pixels
pub const CONNECTOR_THICKNESS: f32 = 3.0;

/// Padding around the dot grid in pixels
pub const GRID_PADDING: f32 = 24.0;

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Ordinary dot color
pub const DOT_COLOR: u32 = 0x9ca3af;

/// Anchor dot and committed connector color
pub const ACCENT_COLOR: u32 = 0x3b82f6;

/// Opacity applied to preview connectors
pub const PREVIEW_OPACITY: f32 = 0.4;

/// Window background color
pub const BACKGROUND_COLOR: u32 = 0x111827;

// ============================================================================
// Instrumentation
// ============================================================================

/// Budget for handling one pointer event, in milliseconds
pub const EVENT_BUDGET_MS: f64 = 1.0;
