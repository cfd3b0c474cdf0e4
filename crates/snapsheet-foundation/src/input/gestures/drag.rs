//! Drag gesture recogniser.
//!
//! Converts a pointer down/move/up stream into [`DragSample`]s tagged with a
//! [`GestureState`]. Only one pointer is tracked at a time; events from other
//! pointers are ignored until the tracked one lifts.

use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
use crate::input::types::{DragSample, GestureState, PointerEvent, PointerEventKind, PointerId};
use crate::input::velocity_tracker::VelocityTracker;
use snapsheet_ui_graphics::{Point, Vector};

/// One recognised step of a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub state: GestureState,
    pub sample: DragSample,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    /// Pressed, still inside the touch slop.
    Pending {
        pointer: PointerId,
        origin: Point,
        pressed_at: u64,
    },
    Dragging { pointer: PointerId, origin: Point },
}

#[derive(Debug, Clone)]
pub struct DragGestureDetector {
    phase: Phase,
    tracker: VelocityTracker,
    slop: f32,
}

impl Default for DragGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGestureDetector {
    pub fn new() -> Self {
        Self::with_slop(DRAG_THRESHOLD)
    }

    pub fn with_slop(slop: f32) -> Self {
        Self {
            phase: Phase::Idle,
            tracker: VelocityTracker::new(),
            slop: slop.max(0.0),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Feed one pointer event; returns the resulting drag step, if any.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragUpdate> {
        match (self.phase, event.kind) {
            (Phase::Idle, PointerEventKind::Down) => {
                self.tracker.reset();
                self.tracker.add_position(event.uptime_nanos, event.position);
                self.phase = Phase::Pending {
                    pointer: event.id,
                    origin: event.position,
                    pressed_at: event.uptime_nanos,
                };
                Some(self.update(GestureState::Possible, event.position, event.position))
            }
            (Phase::Idle, _) => None,
            (Phase::Pending { pointer, .. } | Phase::Dragging { pointer, .. }, _)
                if pointer != event.id =>
            {
                None
            }
            (
                Phase::Pending {
                    pointer,
                    origin,
                    pressed_at,
                },
                PointerEventKind::Move,
            ) => {
                self.tracker.add_position(event.uptime_nanos, event.position);
                if (event.position - origin).length() <= self.slop {
                    return None;
                }
                self.phase = Phase::Dragging { pointer, origin };
                let velocity = self.began_velocity(origin, pressed_at, event);
                Some(DragUpdate {
                    state: GestureState::Began,
                    sample: DragSample::new(event.position, event.position - origin, velocity),
                })
            }
            (Phase::Dragging { origin, .. }, PointerEventKind::Move) => {
                self.tracker.add_position(event.uptime_nanos, event.position);
                Some(self.update(GestureState::Changed, origin, event.position))
            }
            (Phase::Pending { origin, .. }, PointerEventKind::Up | PointerEventKind::Cancel) => {
                self.phase = Phase::Idle;
                Some(self.update(GestureState::Failed, origin, event.position))
            }
            (Phase::Dragging { origin, .. }, PointerEventKind::Up) => {
                self.tracker.add_position(event.uptime_nanos, event.position);
                self.phase = Phase::Idle;
                Some(self.update(GestureState::Ended, origin, event.position))
            }
            (Phase::Dragging { origin, .. }, PointerEventKind::Cancel) => {
                self.phase = Phase::Idle;
                Some(self.update(GestureState::Cancelled, origin, event.position))
            }
            (Phase::Pending { .. } | Phase::Dragging { .. }, PointerEventKind::Down) => {
                log::debug!("drag detector: duplicate down for pointer {}", event.id);
                None
            }
        }
    }

    /// Drop any tracked pointer without reporting a terminal state.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.tracker.reset();
    }

    /// Velocity reported with `Began`, where it decides who owns the drag.
    ///
    /// When the press sample has aged out of the tracker window, or shares the
    /// slop-crossing move's timestamp, the tracker has nothing to measure and
    /// the displacement since the press gives the direction instead.
    fn began_velocity(&self, origin: Point, pressed_at: u64, event: &PointerEvent) -> Vector {
        let tracked = self.tracker.velocity();
        if tracked != Vector::ZERO {
            return tracked;
        }
        let elapsed = event.uptime_nanos.saturating_sub(pressed_at).max(1);
        (event.position - origin)
            .scale(1_000_000_000.0 / elapsed as f32)
            .clamp_components(MAX_FLING_VELOCITY)
    }

    fn update(&self, state: GestureState, origin: Point, location: Point) -> DragUpdate {
        DragUpdate {
            state,
            sample: DragSample::new(location, location - origin, self.tracker.velocity()),
        }
    }
}
