//! Dot grid instance - selection machine, derived outline and observer.
//!
//! Each event is processed to completion in three steps, synchronously:
//! 1. the selection machine mutates state and hover,
//! 2. the outline is re-derived from the new state,
//! 3. the observer is notified if the interaction mode asks for it.

use crate::error::GridResult;
use crate::geometry::{GridGeometry, Point};
use crate::observer::SelectionObserver;
use crate::outline::{self, ConnectorSegment};
use crate::selection::{InteractionMode, PointerEvent, SelectionMachine, SelectionState, Transition};
use std::collections::BTreeSet;
use std::fmt;

pub struct DotGrid {
    machine: SelectionMachine,
    segments: BTreeSet<ConnectorSegment>,
    observer: Option<Box<dyn SelectionObserver>>,
}

impl DotGrid {
    pub fn new(geometry: GridGeometry, mode: InteractionMode) -> Self {
        Self {
            machine: SelectionMachine::new(geometry, mode),
            segments: BTreeSet::new(),
            observer: None,
        }
    }

    /// Attach the observer that receives selection changes.
    pub fn with_observer(mut self, observer: impl SelectionObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl SelectionObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn geometry(&self) -> GridGeometry {
        self.machine.geometry()
    }

    pub fn mode(&self) -> InteractionMode {
        self.machine.mode()
    }

    pub fn state(&self) -> &SelectionState {
        self.machine.state()
    }

    pub fn hover(&self) -> Option<Point> {
        self.machine.hover()
    }

    pub fn selection(&self) -> Option<(Point, Point)> {
        self.machine.selection()
    }

    pub fn on_activate(&mut self, p: Point) -> GridResult<Transition> {
        self.handle(PointerEvent::Activate(p))
    }

    pub fn on_press(&mut self, p: Point) -> GridResult<Transition> {
        self.handle(PointerEvent::Press(p))
    }

    pub fn on_release(&mut self, p: Point) -> GridResult<Transition> {
        self.handle(PointerEvent::Release(p))
    }

    pub fn on_hover(&mut self, p: Point) -> GridResult<Transition> {
        self.handle(PointerEvent::Hover(p))
    }

    /// The pointer left the grid: drop any stale preview.
    pub fn on_leave(&mut self) -> Transition {
        let transition = self.machine.leave();
        self.apply(transition)
    }

    /// Drop the selection entirely.
    pub fn reset(&mut self) -> Transition {
        let transition = self.machine.reset();
        self.apply(transition)
    }

    pub fn handle(&mut self, event: PointerEvent) -> GridResult<Transition> {
        let transition = self.machine.handle(event)?;
        Ok(self.apply(transition))
    }

    fn apply(&mut self, transition: Transition) -> Transition {
        if transition.is_change() {
            self.segments = outline::derive_segments(self.machine.state(), self.machine.hover());
        }
        if transition.should_notify() {
            if let Some(observer) = self.observer.as_mut() {
                observer.selection_changed(self.machine.selection());
            }
        }
        transition
    }

    /// Outline as of the last processed event.
    pub fn current_segments(&self) -> &BTreeSet<ConnectorSegment> {
        &self.segments
    }

    /// Segments attached to one dot.
    pub fn segments_at(&self, p: Point) -> impl Iterator<Item = &ConnectorSegment> {
        outline::segments_at(&self.segments, p)
    }

    pub fn is_anchor_dot(&self, p: Point) -> bool {
        outline::is_anchor_dot(self.machine.state(), p)
    }
}

impl fmt::Debug for DotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotGrid")
            .field("machine", &self.machine)
            .field("segments", &self.segments.len())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl fmt::Display for DotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::text::render_text(self))
    }
}
