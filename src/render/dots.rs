//! Dot grid view - one element per dot, connectors drawn as half-edges.
//!
//! Mouse input is mapped onto the grid's event intake according to its
//! interaction mode:
//! - click-commit: mouse down on a dot activates it
//! - press/release: mouse down presses, mouse up releases
//!
//! Mouse move over a dot is a hover, leaving the grid clears the preview.

use crate::constants::{
    ACCENT_COLOR, ANCHOR_DOT_DIAMETER, BACKGROUND_COLOR, CELL_SIZE, CONNECTOR_THICKNESS,
    DOT_COLOR, DOT_DIAMETER, GRID_PADDING, PREVIEW_OPACITY,
};
use crate::error::GridResult;
use crate::geometry::{GridGeometry, Point};
use crate::grid::DotGrid;
use crate::outline::{ConnectorSegment, SegmentKind, Side};
use crate::selection::{InteractionMode, Transition};
use gpui::*;

pub struct DotGridView {
    grid: DotGrid,
}

impl DotGridView {
    pub fn new(grid: DotGrid) -> Self {
        Self { grid }
    }

    /// Window size that fits the whole grid plus padding.
    pub fn preferred_size(geometry: GridGeometry) -> (f32, f32) {
        (
            geometry.columns() as f32 * CELL_SIZE + GRID_PADDING * 2.0,
            geometry.rows() as f32 * CELL_SIZE + GRID_PADDING * 2.0,
        )
    }

    fn handle_mouse_down(&mut self, p: Point, cx: &mut Context<Self>) {
        let result = match self.grid.mode() {
            InteractionMode::ClickCommit => self.grid.on_activate(p),
            InteractionMode::PressRelease => self.grid.on_press(p),
        };
        self.after_event(result, cx);
    }

    fn handle_mouse_up(&mut self, p: Point, cx: &mut Context<Self>) {
        if self.grid.mode() == InteractionMode::PressRelease {
            let result = self.grid.on_release(p);
            self.after_event(result, cx);
        }
    }

    fn handle_mouse_move(&mut self, p: Point, cx: &mut Context<Self>) {
        let result = self.grid.on_hover(p);
        self.after_event(result, cx);
    }

    fn handle_leave(&mut self, cx: &mut Context<Self>) {
        let transition = self.grid.on_leave();
        self.after_event(Ok(transition), cx);
    }

    fn after_event(&mut self, result: GridResult<Transition>, cx: &mut Context<Self>) {
        match result {
            Ok(Transition::Ignored) => {}
            Ok(_) => {
                tracing::trace!("\n{}", self.grid);
                cx.notify();
            }
            Err(e) => tracing::warn!("Pointer event rejected: {}", e),
        }
    }

    fn render_dot(&self, p: Point, cx: &mut Context<Self>) -> Stateful<Div> {
        let is_anchor = self.grid.is_anchor_dot(p);
        let (diameter, color) = if is_anchor {
            (ANCHOR_DOT_DIAMETER, rgb(ACCENT_COLOR))
        } else {
            (DOT_DIAMETER, rgb(DOT_COLOR))
        };

        div()
            .id(ElementId::Name(format!("dot-{}-{}", p.x, p.y).into()))
            .relative()
            .w(px(CELL_SIZE))
            .h(px(CELL_SIZE))
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .children(self.grid.segments_at(p).map(|segment| render_connector(*segment)))
            .child(div().w(px(diameter)).h(px(diameter)).rounded_full().bg(color))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                    this.handle_mouse_down(p, cx);
                }),
            )
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseUpEvent, _, cx| {
                    this.handle_mouse_up(p, cx);
                }),
            )
            .on_mouse_move(cx.listener(move |this, _: &MouseMoveEvent, _, cx| {
                this.handle_mouse_move(p, cx);
            }))
    }
}

/// Draw one half-edge from the center of a dot cell toward a neighbor.
fn render_connector(segment: ConnectorSegment) -> Div {
    let half = CELL_SIZE / 2.0;
    let t = CONNECTOR_THICKNESS;
    let (left, top, width, height) = match segment.side {
        Side::Left => (0.0, half - t / 2.0, half, t),
        Side::Right => (half, half - t / 2.0, half, t),
        Side::Top => (half - t / 2.0, 0.0, t, half),
        Side::Bottom => (half - t / 2.0, half, t, half),
    };
    let accent: Hsla = rgb(ACCENT_COLOR).into();
    let color = match segment.kind {
        SegmentKind::Committed => accent,
        SegmentKind::Preview => accent.opacity(PREVIEW_OPACITY),
    };

    div()
        .absolute()
        .left(px(left))
        .top(px(top))
        .w(px(width))
        .h(px(height))
        .bg(color)
}

impl Render for DotGridView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let geometry = self.grid.geometry();
        let dots: Vec<Stateful<Div>> = geometry.points().map(|p| self.render_dot(p, cx)).collect();

        div()
            .id("dot-grid-root")
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(rgb(BACKGROUND_COLOR))
            .child(
                div()
                    .id("dots-wrapper")
                    .w(px(geometry.columns() as f32 * CELL_SIZE))
                    .h(px(geometry.rows() as f32 * CELL_SIZE))
                    .flex()
                    .flex_wrap()
                    .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                        if !*hovered {
                            this.handle_leave(cx);
                        }
                    }))
                    .children(dots),
            )
    }
}
