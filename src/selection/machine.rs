//! Selection machine - owns the selection state and hover point of one grid.
//!
//! Every pointer event is validated against the grid geometry and then
//! routed to the handler of the configured interaction mode. Handlers report
//! what happened as a [`Transition`] so the caller can decide whether to
//! re-derive the outline and notify its observer.

use super::state::SelectionState;
use crate::error::GridResult;
use crate::geometry::{GridGeometry, Point};
use crate::profile_scope;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// How pointer events map to corner selection.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionMode {
    /// One activate (click) per corner; every state change is reported
    #[default]
    ClickCommit,
    /// Press on the first corner, release on the second; only commits are reported
    PressRelease,
}

/// A pointer event already translated into grid space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Click on a dot (click-commit mode)
    Activate(Point),
    /// Button pressed on a dot (press/release mode)
    Press(Point),
    /// Button released on a dot (press/release mode)
    Release(Point),
    /// Pointer moved over a dot
    Hover(Point),
    /// Pointer left the grid
    Leave,
}

impl PointerEvent {
    /// The dot this event refers to, if any
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Activate(p) | Self::Press(p) | Self::Release(p) | Self::Hover(p) => Some(*p),
            Self::Leave => None,
        }
    }
}

/// Outcome of processing one pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// Only the hover point changed
    HoverChanged,
    /// The selection state changed
    StateChanged {
        /// Whether the observer must be told about the new selection
        notify: bool,
    },
}

impl Transition {
    /// Returns true if state or hover changed
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Returns true if the observer must be notified
    pub fn should_notify(&self) -> bool {
        matches!(self, Self::StateChanged { notify: true })
    }
}

/// Selection state, hover point and drag flag of one grid instance.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    pub(super) geometry: GridGeometry,
    pub(super) mode: InteractionMode,
    pub(super) state: SelectionState,
    pub(super) hover: Option<Point>,
    pub(super) dragging: bool,
}

impl SelectionMachine {
    pub fn new(geometry: GridGeometry, mode: InteractionMode) -> Self {
        Self {
            geometry,
            mode,
            state: SelectionState::Empty,
            hover: None,
            dragging: false,
        }
    }

    #[inline]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[inline]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Provisional second corner, only ever set while anchored
    #[inline]
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Returns true between a press and its release (press/release mode)
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Committed corners in the order they were chosen
    pub fn selection(&self) -> Option<(Point, Point)> {
        self.state.selection()
    }

    /// Process one pointer event.
    ///
    /// Events carrying a point outside the grid are rejected with
    /// [`GridError::OutOfBoundsPoint`](crate::error::GridError::OutOfBoundsPoint)
    /// and leave the machine untouched.
    pub fn handle(&mut self, event: PointerEvent) -> GridResult<Transition> {
        profile_scope!("selection_handle");

        if let Some(p) = event.point() {
            if let Err(e) = self.geometry.check(p) {
                warn!(?event, "Rejected pointer event: {}", e);
                return Err(e);
            }
        }

        let transition = match (self.mode, event) {
            (InteractionMode::ClickCommit, PointerEvent::Activate(p)) => self.activate(p),
            (InteractionMode::ClickCommit, PointerEvent::Hover(p)) => self.hover_click(p),
            (InteractionMode::PressRelease, PointerEvent::Press(p)) => self.press(p),
            (InteractionMode::PressRelease, PointerEvent::Release(p)) => self.release(p),
            (InteractionMode::PressRelease, PointerEvent::Hover(p)) => self.hover_drag(p),
            (_, PointerEvent::Leave) => self.leave(),
            (mode, event) => {
                debug!(?mode, ?event, "Event not used by this interaction mode");
                Transition::Ignored
            }
        };
        Ok(transition)
    }

    /// Clear the hover point; the pointer left the grid.
    pub fn leave(&mut self) -> Transition {
        self.set_hover(None)
    }

    /// Drop any selection and return to `Empty`.
    ///
    /// Click-commit mode reports the change, press/release mode stays silent.
    pub fn reset(&mut self) -> Transition {
        self.dragging = false;
        if self.state.is_empty() {
            return self.set_hover(None);
        }
        self.transition_to(SelectionState::Empty);
        Transition::StateChanged {
            notify: self.mode == InteractionMode::ClickCommit,
        }
    }

    /// Move to a new state. Every state change drops the hover point.
    pub(super) fn transition_to(&mut self, next: SelectionState) {
        debug!(from = ?self.state, to = ?next, "Selection transition");
        self.state = next;
        self.hover = None;
    }

    pub(super) fn set_hover(&mut self, hover: Option<Point>) -> Transition {
        if self.hover == hover {
            return Transition::Ignored;
        }
        trace!(?hover, "Hover point");
        self.hover = hover;
        Transition::HoverChanged
    }
}
