//! The reusable control with an application-supplied snap policy.

use snapsheet_foundation::{PointerEvent, PointerEventKind};
use snapsheet_testing::{RecordingSurface, SheetRobot};
use snapsheet_ui::{
    BottomSheet, DragHooks, DraggableScrollSheet, PositionResolver, ScrollContext, ScrollState,
    SheetConfig, SnapState, Vector,
};
use snapsheet_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

const MS: u64 = 1_000_000;

/// An application keeping its own offset, driven only by hooks.
struct AppSheet {
    control: DraggableScrollSheet,
    committed: Rc<Cell<f32>>,
    live: Rc<Cell<f32>>,
    state: Rc<Cell<SnapState>>,
}

impl AppSheet {
    fn new(screen_height: f32) -> Self {
        let committed = Rc::new(Cell::new(screen_height / 2.0));
        let live = Rc::new(Cell::new(screen_height / 2.0));
        let state = Rc::new(Cell::new(SnapState::Half));

        let hooks = {
            let (c1, l1) = (committed.clone(), live.clone());
            let (c2, l2, s2) = (committed.clone(), live.clone(), state.clone());
            DragHooks::new()
                .on_drag_changed(move |sample| {
                    l1.set(PositionResolver::on_changed(sample, c1.get()));
                })
                .on_drag_ended(move |sample| {
                    let (target, snap) =
                        PositionResolver::on_ended(sample, c2.get(), screen_height);
                    c2.set(target);
                    l2.set(target);
                    s2.set(snap);
                })
        };

        Self {
            control: DraggableScrollSheet::new(ScrollState::new(0.0), hooks),
            committed,
            live,
            state,
        }
    }

    fn send(&mut self, kind: PointerEventKind, y: f32, t_ms: u64) {
        let event = PointerEvent::new(kind, Point::new(0.0, y), t_ms * MS);
        self.control.on_pointer_event(&event, self.live.get());
    }
}

#[test]
fn hooks_alone_implement_the_snap_policy() {
    let mut app = AppSheet::new(1000.0);

    app.send(PointerEventKind::Down, 600.0, 0);
    app.send(PointerEventKind::Move, 560.0, 16);
    app.send(PointerEventKind::Move, 300.0, 32);
    assert_eq!(app.live.get(), 200.0);
    app.send(PointerEventKind::Up, 150.0, 48);

    assert_eq!(app.state.get(), SnapState::Open);
    assert_eq!(app.committed.get(), 0.0);

    app.send(PointerEventKind::Down, 100.0, 100);
    app.send(PointerEventKind::Move, 200.0, 116);
    app.send(PointerEventKind::Up, 1000.0, 132);
    assert_eq!(app.state.get(), SnapState::Closed);
    assert_eq!(app.committed.get(), 1000.0);
}

#[test]
fn without_hooks_dragging_changes_nothing() {
    let scroll = ScrollState::new(0.0);
    let mut control = DraggableScrollSheet::new(scroll.clone(), DragHooks::default());
    let down = PointerEvent::new(PointerEventKind::Down, Point::new(0.0, 100.0), 0);
    let drag = PointerEvent::new(PointerEventKind::Move, Point::new(0.0, 400.0), 16 * MS);
    let up = PointerEvent::new(PointerEventKind::Up, Point::new(0.0, 400.0), 32 * MS);
    control.on_pointer_event(&down, 500.0);
    assert!(control.on_pointer_event(&drag, 500.0).is_some());
    assert!(control.on_pointer_event(&up, 500.0).is_some());
    assert_eq!(scroll.value(), 0.0);
}

#[test]
fn custom_arbiter_can_lock_the_sheet() {
    let mut robot = SheetRobot::with_sheet(1000.0, |surface: RecordingSurface, scroll| {
        BottomSheet::with_arbiter(
            surface,
            scroll,
            SheetConfig::default(),
            |_: Vector, _: ScrollContext, _: f32| false,
        )
    });
    robot.drag(700.0, 100.0);
    assert_eq!(robot.sheet().snap_state(), SnapState::Half);
    assert_eq!(robot.sheet().current_offset(), 500.0);
    assert!(robot.surface().animation_targets().is_empty());
}
