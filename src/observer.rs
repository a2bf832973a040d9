//! Selection observer - the callback boundary to the hosting application.

use crate::geometry::Point;
use tracing::info;

/// Receives the committed selection whenever a grid reports a change.
///
/// `None` means there is no committed selection. `Some((a, b))` carries the
/// two corners in the order they were chosen, not normalized.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selection: Option<(Point, Point)>);
}

impl<F> SelectionObserver for F
where
    F: FnMut(Option<(Point, Point)>),
{
    fn selection_changed(&mut self, selection: Option<(Point, Point)>) {
        self(selection)
    }
}

/// Observer that logs every reported selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SelectionObserver for LogObserver {
    fn selection_changed(&mut self, selection: Option<(Point, Point)>) {
        match selection {
            Some((a, b)) => info!(first = %a, second = %b, "Selection committed"),
            None => info!("Selection cleared"),
        }
    }
}
