use snapsheet_ui_graphics::{Point, Vector};
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// Once the sheet claims a drag it consumes the events it handles, so that the
/// scroll content sharing the same event does not also react to them.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic timestamp of the event, in nanoseconds.
    pub uptime_nanos: u64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_nanos: u64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_nanos,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// Lifecycle of one continuous drag interaction.
///
/// A drag is delivered as `Began`, zero or more `Changed`, then exactly one of
/// `Ended`, `Cancelled` or `Failed`. `Possible` is reported while a pressed
/// pointer has not yet moved far enough to count as a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureState {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GestureState {
    /// `Ended`, `Cancelled` and `Failed` close the gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GestureState::Ended | GestureState::Cancelled | GestureState::Failed
        )
    }
}

/// Snapshot of a drag taken at one gesture update.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragSample {
    /// Current pointer location.
    pub location: Point,
    /// Cumulative translation since the drag started.
    pub translation: Vector,
    /// Instantaneous velocity in logical pixels per second.
    pub velocity: Vector,
}

impl DragSample {
    pub fn new(location: Point, translation: Vector, velocity: Vector) -> Self {
        Self {
            location,
            translation,
            velocity,
        }
    }

    /// A sample that only carries a vertical translation.
    pub fn vertical(translation_y: f32) -> Self {
        Self {
            location: Point::ZERO,
            translation: Vector::new(0.0, translation_y),
            velocity: Vector::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::new(PointerEventKind::Move, Point::new(1.0, 2.0), 10);
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn terminal_states() {
        assert!(GestureState::Ended.is_terminal());
        assert!(GestureState::Cancelled.is_terminal());
        assert!(GestureState::Failed.is_terminal());
        assert!(!GestureState::Began.is_terminal());
        assert!(!GestureState::Changed.is_terminal());
        assert!(!GestureState::Possible.is_terminal());
    }
}
