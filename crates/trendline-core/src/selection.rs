// File: crates/trendline-core/src/selection.rs
// Summary: Drag selection state and the reducer that applies pointer events to it.

use tracing::debug;

use crate::geometry::ScreenPoint;
use crate::scale::{CoordinateMapper, EdgePolicy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// Pointer position in draw-area coordinates plus its gesture phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: ScreenPoint,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn start(x: f64, y: f64) -> Self { Self { position: ScreenPoint::new(x, y), phase: PointerPhase::Start } }
    pub fn moved(x: f64, y: f64) -> Self { Self { position: ScreenPoint::new(x, y), phase: PointerPhase::Move } }
    pub fn end(x: f64, y: f64) -> Self { Self { position: ScreenPoint::new(x, y), phase: PointerPhase::End } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub active_index: Option<usize>,
    pub is_dragging: bool,
}

/// Result of applying one pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub state: SelectionState,
    /// The active index differs from the previous state (hosts key haptics off this).
    pub index_changed: bool,
}

impl SelectionState {
    /// Apply a pointer event. `mapper` is `None` when there is nothing to select
    /// (empty series or invalid area); the drag still starts and ends normally.
    pub fn reduce(self, event: PointerEvent, mapper: Option<&CoordinateMapper<'_>>, policy: EdgePolicy) -> SelectionUpdate {
        let next = match event.phase {
            PointerPhase::Start | PointerPhase::Move => SelectionState {
                active_index: mapper.and_then(|m| m.nearest_index(event.position, policy)),
                is_dragging: true,
            },
            PointerPhase::End => SelectionState::default(),
        };
        let index_changed = next.active_index != self.active_index;
        if index_changed {
            debug!(from = ?self.active_index, to = ?next.active_index, "selection changed");
        }
        SelectionUpdate { state: next, index_changed }
    }

    /// Drop any selection, e.g. when the host supplies new data.
    pub fn reset(&mut self) { *self = SelectionState::default(); }

    /// Min/max annotations are hidden while a drag is in progress.
    pub fn shows_extrema(&self) -> bool { !self.is_dragging }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DrawArea;
    use crate::series::SampleSeries;

    #[test]
    fn drag_lifecycle() {
        let s = SampleSeries::new(vec![1.0, 2.0, 3.0]);
        let m = CoordinateMapper::new(&s, DrawArea::from_size(100.0, 50.0)).unwrap();
        let state = SelectionState::default();
        assert!(state.shows_extrema());

        let u = state.reduce(PointerEvent::start(2.0, 10.0), Some(&m), EdgePolicy::Deselect);
        assert_eq!(u.state, SelectionState { active_index: Some(0), is_dragging: true });
        assert!(u.index_changed);
        assert!(!u.state.shows_extrema());

        let u2 = u.state.reduce(PointerEvent::moved(10.0, 40.0), Some(&m), EdgePolicy::Deselect);
        assert_eq!(u2.state.active_index, Some(0));
        assert!(!u2.index_changed);

        let u3 = u2.state.reduce(PointerEvent::moved(60.0, 40.0), Some(&m), EdgePolicy::Deselect);
        assert_eq!(u3.state.active_index, Some(1));
        assert!(u3.index_changed);

        let u4 = u3.state.reduce(PointerEvent::moved(130.0, 0.0), Some(&m), EdgePolicy::Deselect);
        assert_eq!(u4.state, SelectionState { active_index: None, is_dragging: true });
        assert!(u4.index_changed);

        let end = u4.state.reduce(PointerEvent::end(130.0, 0.0), Some(&m), EdgePolicy::Deselect);
        assert_eq!(end.state, SelectionState::default());
        assert!(!end.index_changed);
    }

    #[test]
    fn clamp_policy_pins_to_edges() {
        let s = SampleSeries::new(vec![1.0, 2.0, 3.0]);
        let m = CoordinateMapper::new(&s, DrawArea::from_size(100.0, 50.0)).unwrap();
        let u = SelectionState::default().reduce(PointerEvent::moved(130.0, 0.0), Some(&m), EdgePolicy::Clamp);
        assert_eq!(u.state.active_index, Some(2));
    }

    #[test]
    fn no_mapper_means_no_selection() {
        let u = SelectionState::default().reduce(PointerEvent::start(5.0, 5.0), None, EdgePolicy::Deselect);
        assert_eq!(u.state, SelectionState { active_index: None, is_dragging: true });
        assert!(!u.index_changed);
    }

    #[test]
    fn reset_clears() {
        let mut st = SelectionState { active_index: Some(3), is_dragging: true };
        st.reset();
        assert_eq!(st, SelectionState::default());
    }
}
