//! Snapping bottom sheet: the draggable control plus a position model.

use crate::draggable::{DragOwner, DraggableScrollSheet};
use crate::hooks::DragHooks;
use crate::position::{sanitize_screen_height, PositionResolver, SheetPosition, SnapState};
use crate::snap_policy::{SnapPolicy, ThresholdSnapPolicy};
use crate::surface::SheetSurface;
use snapsheet_animation::{Animatable, AnimationSpec, AnimationType, SpringSpec};
use snapsheet_foundation::{DragSample, GestureArbiter, GestureState, PointerEvent, ScrollState};
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration of a [`BottomSheet`].
pub struct SheetConfig {
    /// How a release or [`BottomSheet::snap_to`] moves to its target.
    pub animation: AnimationType,
    /// State the sheet takes on its first layout.
    pub initial_state: SnapState,
    pub snap_policy: Box<dyn SnapPolicy>,
}

impl SheetConfig {
    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.animation = AnimationType::Spring(spring);
        self
    }

    /// Snap with a fixed-duration tween instead of a spring.
    pub fn with_tween(mut self, tween: AnimationSpec) -> Self {
        self.animation = AnimationType::Tween(tween);
        self
    }

    pub fn with_initial_state(mut self, state: SnapState) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_snap_policy(mut self, policy: impl SnapPolicy + 'static) -> Self {
        self.snap_policy = Box::new(policy);
        self
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            animation: AnimationType::default(),
            initial_state: SnapState::Half,
            snap_policy: Box::new(ThresholdSnapPolicy),
        }
    }
}

impl std::fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetConfig")
            .field("animation", &self.animation)
            .field("initial_state", &self.initial_state)
            .finish_non_exhaustive()
    }
}

/// Offset bookkeeping shared between the sheet and its drag hooks.
///
/// `current_offset` is what the surface shows. `committed_offset` is the
/// baseline a drag translates from: the last snap target, or the value an
/// interrupted animation was showing when a new drag took over.
struct SheetModel {
    screen_height: f32,
    committed_offset: f32,
    current_offset: f32,
    snap_state: SnapState,
    laid_out: bool,
    animation: Animatable<f32>,
    snap_animation: AnimationType,
    policy: Box<dyn SnapPolicy>,
    /// Snap target whose animation the surface has not been told about yet.
    pending_animation: Option<f32>,
}

impl SheetModel {
    fn new(config: SheetConfig) -> Self {
        Self {
            screen_height: 0.0,
            committed_offset: 0.0,
            current_offset: 0.0,
            snap_state: config.initial_state,
            laid_out: false,
            animation: Animatable::new(0.0),
            snap_animation: config.animation,
            policy: config.snap_policy,
            pending_animation: None,
        }
    }

    fn on_layout(&mut self, screen_height: f32) {
        let screen_height = sanitize_screen_height(screen_height);
        if self.laid_out && screen_height == self.screen_height {
            return;
        }
        if !self.laid_out {
            log::debug!("sheet: first layout at height {screen_height}, {:?}", self.snap_state);
        }
        self.screen_height = screen_height;
        self.laid_out = true;
        self.committed_offset = self.snap_state.offset(screen_height);
        self.current_offset = self.committed_offset;
        self.animation.snapTo(self.committed_offset);
    }

    /// A new drag takes over from wherever the sheet is right now.
    fn drag_began(&mut self) {
        if self.animation.is_running() {
            let interrupted = self.animation.stop();
            log::debug!(
                "sheet: drag interrupts snap animation at {interrupted} (target {})",
                self.committed_offset
            );
            self.current_offset = interrupted;
        }
        self.committed_offset = self.current_offset;
        self.pending_animation = None;
    }

    fn drag_changed(&mut self, sample: &DragSample) {
        self.current_offset = PositionResolver::on_changed(sample, self.committed_offset);
        log::trace!("sheet: live offset {}", self.current_offset);
    }

    fn drag_ended(&mut self, sample: &DragSample) {
        let (target, state) = PositionResolver::on_ended_with(
            self.policy.as_ref(),
            sample,
            self.committed_offset,
            self.screen_height,
        );
        self.snap_state = state;
        self.committed_offset = target;
        self.start_animation(target);
    }

    fn snap_to(&mut self, state: SnapState) {
        self.snap_state = state;
        self.committed_offset = state.offset(self.screen_height);
        self.start_animation(self.committed_offset);
    }

    fn start_animation(&mut self, target: f32) {
        self.animation.snapTo(self.current_offset);
        self.animation.animateTo(target, self.snap_animation);
        self.pending_animation = Some(target);
    }

    fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if !self.animation.is_running() {
            return false;
        }
        let running = self.animation.on_frame(frame_time_nanos);
        self.current_offset = self.animation.value();
        running
    }

    fn position(&self) -> SheetPosition {
        SheetPosition {
            current_offset: self.current_offset,
            snap_state: self.snap_state,
        }
    }
}

/// Bottom sheet that snaps to open, half and closed.
///
/// The host delivers pointer events (or pre-recognised drag steps), lays the
/// sheet out with the available height and pumps frames while
/// [`BottomSheet::is_animating`] is `true`. Offsets flow out through the
/// [`SheetSurface`].
pub struct BottomSheet<S: SheetSurface> {
    control: DraggableScrollSheet,
    model: Rc<RefCell<SheetModel>>,
    surface: S,
}

impl<S: SheetSurface> BottomSheet<S> {
    pub fn new(surface: S, scroll: ScrollState, config: SheetConfig) -> Self {
        let model = Rc::new(RefCell::new(SheetModel::new(config)));
        let control = DraggableScrollSheet::new(scroll, Self::snap_hooks(&model));
        Self {
            control,
            model,
            surface,
        }
    }

    /// Replaces the default nested-scroll arbitration.
    pub fn with_arbiter(
        surface: S,
        scroll: ScrollState,
        config: SheetConfig,
        arbiter: impl GestureArbiter + 'static,
    ) -> Self {
        let model = Rc::new(RefCell::new(SheetModel::new(config)));
        let control =
            DraggableScrollSheet::with_arbiter(scroll, Self::snap_hooks(&model), arbiter);
        Self {
            control,
            model,
            surface,
        }
    }

    fn snap_hooks(model: &Rc<RefCell<SheetModel>>) -> DragHooks {
        let began = Rc::clone(model);
        let changed = Rc::clone(model);
        let ended = Rc::clone(model);
        DragHooks::new()
            .on_drag_began(move |_| began.borrow_mut().drag_began())
            .on_drag_changed(move |sample| changed.borrow_mut().drag_changed(sample))
            .on_drag_ended(move |sample| ended.borrow_mut().drag_ended(sample))
    }

    pub fn set_content(&mut self, content: S::Content) {
        self.surface.set_content(content);
    }

    /// Lays the sheet out for `screen_height`.
    ///
    /// The first call seeds the initial state; later calls with a new height
    /// keep the snap state and jump to its offset for the new height.
    pub fn on_layout(&mut self, screen_height: f32) {
        self.model.borrow_mut().on_layout(screen_height);
        self.sync_surface();
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let offset = self.current_offset();
        let claimed = self.control.on_pointer_event(event, offset).is_some();
        self.sync_surface();
        claimed
    }

    /// Feeds a drag step recognised by the host.
    pub fn on_drag(&mut self, state: GestureState, sample: DragSample) -> bool {
        let offset = self.current_offset();
        let claimed = self.control.on_drag(state, sample, offset);
        self.sync_surface();
        claimed
    }

    /// Advances a running snap animation. Returns `true` while more frames
    /// are needed.
    pub fn advance_frame(&mut self, frame_time_nanos: u64) -> bool {
        let running = self.model.borrow_mut().on_frame(frame_time_nanos);
        self.sync_surface();
        running
    }

    /// Animates to `state` without a gesture. Ignored while a drag is active.
    pub fn snap_to(&mut self, state: SnapState) {
        if self.control.owner() == DragOwner::Sheet {
            log::debug!("sheet: snap_to({state:?}) ignored during drag");
            return;
        }
        self.model.borrow_mut().snap_to(state);
        self.sync_surface();
    }

    pub fn position(&self) -> SheetPosition {
        self.model.borrow().position()
    }

    pub fn current_offset(&self) -> f32 {
        self.model.borrow().current_offset
    }

    pub fn committed_offset(&self) -> f32 {
        self.model.borrow().committed_offset
    }

    pub fn snap_state(&self) -> SnapState {
        self.model.borrow().snap_state
    }

    pub fn screen_height(&self) -> f32 {
        self.model.borrow().screen_height
    }

    pub fn is_animating(&self) -> bool {
        self.model.borrow().animation.is_running()
    }

    pub fn drag_owner(&self) -> DragOwner {
        self.control.owner()
    }

    pub fn scroll_state(&self) -> &ScrollState {
        self.control.scroll_state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn sync_surface(&mut self) {
        let (offset, started) = {
            let mut model = self.model.borrow_mut();
            (model.current_offset, model.pending_animation.take())
        };
        if let Some(target) = started {
            self.surface.animate_to(target);
        }
        self.surface.set_offset(offset.max(0.0));
    }
}

impl<S: SheetSurface + std::fmt::Debug> std::fmt::Debug for BottomSheet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BottomSheet")
            .field("position", &self.position())
            .field("control", &self.control)
            .field("surface", &self.surface)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
