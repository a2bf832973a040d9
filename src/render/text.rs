//! Plain-text rendering of a dot grid and its outline.
//!
//! One character per dot, with edge characters in between:
//!
//! ```text
//! o-o-o o      o  dot          -  committed edge     .  preview edge
//! |   |        @  anchor dot   |  committed edge     :  preview edge
//! o-o-o o
//! ```
//!
//! An edge is drawn when either of its two dots carries the facing half-edge.

use crate::geometry::Point;
use crate::grid::DotGrid;
use crate::outline::{SegmentKind, Side};

pub fn render_text(grid: &DotGrid) -> String {
    let geometry = grid.geometry();
    let mut lines = Vec::with_capacity(geometry.rows() as usize * 2);

    for y in 0..geometry.rows() {
        let mut dots = String::new();
        let mut below = String::new();
        for x in 0..geometry.columns() {
            let p = Point::new(x, y);
            if x > 0 {
                let left = Point::new(x - 1, y);
                dots.push(match edge_kind(grid, left, Side::Right) {
                    Some(SegmentKind::Committed) => '-',
                    Some(SegmentKind::Preview) => '.',
                    None => ' ',
                });
                below.push(' ');
            }
            dots.push(if grid.is_anchor_dot(p) { '@' } else { 'o' });
            below.push(match edge_kind(grid, p, Side::Bottom) {
                Some(SegmentKind::Committed) => '|',
                Some(SegmentKind::Preview) => ':',
                None => ' ',
            });
        }
        lines.push(dots);
        if y + 1 < geometry.rows() {
            lines.push(below.trim_end().to_string());
        }
    }

    lines.join("\n")
}

/// Kind of the full edge leaving `p` on `side`, if any half of it is drawn.
fn edge_kind(grid: &DotGrid, p: Point, side: Side) -> Option<SegmentKind> {
    let other = side.neighbor(p);
    let facing = side.opposite();
    grid.segments_at(p)
        .filter(|s| s.side == side)
        .chain(grid.segments_at(other).filter(|s| s.side == facing))
        .map(|s| s.kind)
        .min()
}
