//! Robot-style driver for a headless bottom sheet
//!
//! The robot owns a [`BottomSheet`] rendering into a [`RecordingSurface`],
//! a virtual clock and a single pointer. Tests press, move and release the
//! pointer, then pump frames until the snap animation settles.
//!
//! # Example
//!
//! ```
//! use snapsheet_testing::SheetRobot;
//! use snapsheet_ui::SnapState;
//!
//! let mut robot = SheetRobot::new(1000.0);
//! robot.drag(600.0, 150.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.sheet().snap_state(), SnapState::Open);
//! ```

use crate::recording_surface::RecordingSurface;
use snapsheet_foundation::{PointerEvent, PointerEventKind};
use snapsheet_ui::{BottomSheet, SheetConfig};
use snapsheet_ui_graphics::Point;

/// One display frame at 60fps.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`SheetRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 1_000;

pub struct SheetRobot {
    sheet: BottomSheet<RecordingSurface>,
    surface: RecordingSurface,
    now_nanos: u64,
    pointer: Point,
    pressed: bool,
}

impl SheetRobot {
    /// Sheet with the default config, laid out for `screen_height`.
    pub fn new(screen_height: f32) -> Self {
        Self::with_config(screen_height, SheetConfig::default())
    }

    pub fn with_config(screen_height: f32, config: SheetConfig) -> Self {
        Self::with_sheet(screen_height, |surface, scroll| {
            BottomSheet::new(surface, scroll, config)
        })
    }

    /// Builds the sheet with `build`, for tests that need a custom arbiter.
    pub fn with_sheet(
        screen_height: f32,
        build: impl FnOnce(
            RecordingSurface,
            snapsheet_foundation::ScrollState,
        ) -> BottomSheet<RecordingSurface>,
    ) -> Self {
        let surface = RecordingSurface::new();
        let scroll = snapsheet_foundation::ScrollState::new(0.0);
        let mut sheet = build(surface.clone(), scroll);
        sheet.on_layout(screen_height);
        Self {
            sheet,
            surface,
            now_nanos: 0,
            pointer: Point::new(screen_height / 4.0, 0.0),
            pressed: false,
        }
    }

    pub fn sheet(&self) -> &BottomSheet<RecordingSurface> {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut BottomSheet<RecordingSurface> {
        &mut self.sheet
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    /// Advance the virtual clock by `nanos`, delivering a frame per
    /// [`FRAME_NANOS`] elapsed.
    pub fn advance_time(&mut self, nanos: u64) {
        let end = self.now_nanos + nanos;
        while self.now_nanos + FRAME_NANOS <= end {
            self.now_nanos += FRAME_NANOS;
            self.sheet.advance_frame(self.now_nanos);
        }
        self.now_nanos = end;
    }

    pub fn advance_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.now_nanos += FRAME_NANOS;
            self.sheet.advance_frame(self.now_nanos);
        }
    }

    /// Pump frames until the sheet stops animating.
    ///
    /// Returns the number of frames delivered.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.sheet.is_animating() && frames < MAX_IDLE_FRAMES {
            self.advance_frames(1);
            frames += 1;
        }
        if self.sheet.is_animating() {
            log::warn!("robot: sheet still animating after {frames} frames");
        }
        frames
    }

    /// Put the pointer down at `y`. Returns whether the sheet consumed it.
    pub fn press(&mut self, y: f32) -> bool {
        self.pointer.y = y;
        self.pressed = true;
        self.dispatch(PointerEventKind::Down)
    }

    pub fn move_to(&mut self, y: f32) -> bool {
        self.pointer.y = y;
        self.dispatch(PointerEventKind::Move)
    }

    pub fn release(&mut self) -> bool {
        self.pressed = false;
        self.dispatch(PointerEventKind::Up)
    }

    pub fn cancel(&mut self) -> bool {
        self.pressed = false;
        self.dispatch(PointerEventKind::Cancel)
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Drag from `from_y` to `to_y` in 10 moves, one frame apart.
    pub fn drag(&mut self, from_y: f32, to_y: f32) {
        self.drag_over(from_y, to_y, 10, FRAME_NANOS);
    }

    /// Drag in `steps` moves spaced `step_nanos` apart, then release.
    pub fn drag_over(&mut self, from_y: f32, to_y: f32, steps: u32, step_nanos: u64) {
        self.press(from_y);
        let steps = steps.max(1);
        for i in 1..=steps {
            self.now_nanos += step_nanos;
            let t = i as f32 / steps as f32;
            self.move_to(from_y + (to_y - from_y) * t);
        }
        self.release();
    }

    /// Quick flick: the whole distance in three moves over ~24ms.
    pub fn fling(&mut self, from_y: f32, to_y: f32) {
        self.drag_over(from_y, to_y, 3, 8_000_000);
    }

    fn dispatch(&mut self, kind: PointerEventKind) -> bool {
        let event = PointerEvent::new(kind, self.pointer, self.now_nanos);
        let claimed = self.sheet.on_pointer_event(&event);
        log::trace!(
            "robot: {kind:?} at {:?} -> {}",
            self.pointer,
            if claimed { "sheet" } else { "content" }
        );
        claimed
    }
}
