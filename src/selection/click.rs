//! Click-commit handling - one activate per corner.
//!
//! The first click anchors, the second commits (even on the same dot), a
//! third click starts over. Every state change is reported to the observer.

use super::machine::{SelectionMachine, Transition};
use super::state::SelectionState;
use crate::geometry::Point;

impl SelectionMachine {
    pub(super) fn activate(&mut self, p: Point) -> Transition {
        let next = match self.state {
            SelectionState::Empty => SelectionState::Anchored { anchor: p },
            // No degeneracy check: clicking the anchor again commits a zero-area pair
            SelectionState::Anchored { anchor } => SelectionState::Committed {
                first: anchor,
                second: p,
            },
            SelectionState::Committed { .. } => SelectionState::Anchored { anchor: p },
        };
        self.transition_to(next);
        Transition::StateChanged { notify: true }
    }

    pub(super) fn hover_click(&mut self, p: Point) -> Transition {
        if self.state.is_anchored() {
            self.set_hover(Some(p))
        } else {
            self.set_hover(None)
        }
    }
}
