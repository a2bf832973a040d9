//! Unit tests for click-commit selection.

use crate::helpers::{click_grid, point_in, pt};
use dotbox::geometry::GridGeometry;
use dotbox::selection::{
    InteractionMode, PointerEvent, SelectionMachine, SelectionState, Transition,
};
use proptest::prelude::*;

fn machine() -> SelectionMachine {
    SelectionMachine::new(GridGeometry::new(8, 8).unwrap(), InteractionMode::ClickCommit)
}

#[test]
fn test_first_click_anchors() {
    let mut m = machine();
    let t = m.handle(PointerEvent::Activate(pt(2, 2))).unwrap();

    assert_eq!(t, Transition::StateChanged { notify: true });
    assert_eq!(*m.state(), SelectionState::Anchored { anchor: pt(2, 2) });
    assert_eq!(m.selection(), None);
}

#[test]
fn test_second_click_commits_in_order() {
    let mut m = machine();
    m.handle(PointerEvent::Activate(pt(5, 1))).unwrap();
    m.handle(PointerEvent::Activate(pt(2, 6))).unwrap();

    assert_eq!(
        *m.state(),
        SelectionState::Committed {
            first: pt(5, 1),
            second: pt(2, 6)
        }
    );
    // Not normalized to (min, max)
    assert_eq!(m.selection(), Some((pt(5, 1), pt(2, 6))));
}

#[test]
fn test_same_dot_twice_commits_degenerate_pair() {
    let mut m = machine();
    m.handle(PointerEvent::Activate(pt(3, 3))).unwrap();
    let t = m.handle(PointerEvent::Activate(pt(3, 3))).unwrap();

    assert_eq!(t, Transition::StateChanged { notify: true });
    assert_eq!(m.selection(), Some((pt(3, 3), pt(3, 3))));
}

#[test]
fn test_third_click_restarts_selection() {
    let mut m = machine();
    m.handle(PointerEvent::Activate(pt(0, 0))).unwrap();
    m.handle(PointerEvent::Activate(pt(4, 4))).unwrap();
    m.handle(PointerEvent::Activate(pt(6, 2))).unwrap();

    assert_eq!(m.state().anchor(), Some(pt(6, 2)));
    assert_eq!(m.selection(), None);
}

#[test]
fn test_hover_only_tracked_while_anchored() {
    let mut m = machine();

    // Empty: nothing to preview
    assert_eq!(m.handle(PointerEvent::Hover(pt(1, 1))).unwrap(), Transition::Ignored);
    assert_eq!(m.hover(), None);

    m.handle(PointerEvent::Activate(pt(2, 2))).unwrap();
    assert_eq!(m.handle(PointerEvent::Hover(pt(5, 5))).unwrap(), Transition::HoverChanged);
    assert_eq!(m.hover(), Some(pt(5, 5)));

    // Same dot again is not a change
    assert_eq!(m.handle(PointerEvent::Hover(pt(5, 5))).unwrap(), Transition::Ignored);

    m.handle(PointerEvent::Activate(pt(5, 5))).unwrap();
    assert_eq!(m.hover(), None);
    assert_eq!(m.handle(PointerEvent::Hover(pt(6, 6))).unwrap(), Transition::Ignored);
    assert_eq!(m.hover(), None);
}

#[test]
fn test_hover_on_anchor_is_kept() {
    let mut m = machine();
    m.handle(PointerEvent::Activate(pt(2, 2))).unwrap();
    m.handle(PointerEvent::Hover(pt(2, 2))).unwrap();
    assert_eq!(m.hover(), Some(pt(2, 2)));
}

#[test]
fn test_press_and_release_are_ignored() {
    let mut m = machine();
    assert_eq!(m.handle(PointerEvent::Press(pt(1, 1))).unwrap(), Transition::Ignored);
    assert_eq!(m.handle(PointerEvent::Release(pt(3, 3))).unwrap(), Transition::Ignored);
    assert!(m.state().is_empty());
    assert!(!m.is_dragging());
}

#[test]
fn test_every_state_change_is_reported() {
    let (mut grid, recorder) = click_grid(8, 8);

    grid.on_activate(pt(1, 1)).unwrap();
    grid.on_hover(pt(3, 3)).unwrap();
    grid.on_activate(pt(3, 3)).unwrap();
    grid.on_activate(pt(0, 7)).unwrap();

    assert_eq!(
        recorder.calls(),
        vec![None, Some((pt(1, 1), pt(3, 3))), None]
    );
}

proptest! {
    #[test]
    fn activate_always_drops_hover(
        anchor in point_in(8, 8),
        hover in point_in(8, 8),
        clicks in proptest::collection::vec(point_in(8, 8), 1..6)
    ) {
        let mut m = machine();
        m.handle(PointerEvent::Activate(anchor)).unwrap();
        m.handle(PointerEvent::Hover(hover)).unwrap();

        for p in clicks {
            m.handle(PointerEvent::Hover(hover)).unwrap();
            let t = m.handle(PointerEvent::Activate(p)).unwrap();
            prop_assert_eq!(t, Transition::StateChanged { notify: true });
            prop_assert_eq!(m.hover(), None);
        }
    }
}
