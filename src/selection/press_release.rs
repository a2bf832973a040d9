//! Press/drag/release handling.
//!
//! Press always re-anchors and starts a drag. Hover only previews while the
//! drag is live. Release commits a rectangle with non-zero width and height,
//! otherwise the selection is discarded. Only commits reach the observer.

use super::machine::{SelectionMachine, Transition};
use super::state::{SelectionState, is_non_degenerate};
use crate::geometry::Point;
use tracing::debug;

impl SelectionMachine {
    pub(super) fn press(&mut self, p: Point) -> Transition {
        self.dragging = true;
        self.transition_to(SelectionState::Anchored { anchor: p });
        Transition::StateChanged { notify: false }
    }

    pub(super) fn hover_drag(&mut self, p: Point) -> Transition {
        if self.state.is_anchored() && self.dragging {
            self.set_hover(Some(p))
        } else {
            self.set_hover(None)
        }
    }

    pub(super) fn release(&mut self, p: Point) -> Transition {
        self.dragging = false;

        let SelectionState::Anchored { anchor } = self.state else {
            debug!(point = %p, "Release without an anchor");
            return Transition::Ignored;
        };

        if is_non_degenerate(anchor, p) {
            self.transition_to(SelectionState::Committed {
                first: anchor,
                second: p,
            });
            Transition::StateChanged { notify: true }
        } else {
            debug!(%anchor, point = %p, "Degenerate release, discarding selection");
            self.transition_to(SelectionState::Empty);
            Transition::StateChanged { notify: false }
        }
    }
}
