//! Reusable drag-to-reposition control wrapping scrollable content.
//!
//! The control owns no position. It recognises drags, asks its
//! [`GestureArbiter`] who owns each new one, forwards the sheet's drags to
//! [`DragHooks`] and turns the content's drags into scroll deltas. What the
//! sheet does with its drags is up to whoever installed the hooks.

use crate::hooks::DragHooks;
use snapsheet_foundation::{
    DragGestureDetector, DragSample, DragUpdate, GestureArbiter, GestureState,
    NestedScrollArbiter, PointerEvent, ScrollContext, ScrollContextProvider, ScrollState,
};

/// Who is handling the drag in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragOwner {
    #[default]
    None,
    Sheet,
    Scroll,
}

pub struct DraggableScrollSheet {
    detector: DragGestureDetector,
    arbiter: Box<dyn GestureArbiter>,
    scroll: ScrollState,
    hooks: DragHooks,
    owner: DragOwner,
    /// Translation already forwarded to the scroll state in the current drag.
    scrolled_translation: f32,
}

impl DraggableScrollSheet {
    pub fn new(scroll: ScrollState, hooks: DragHooks) -> Self {
        Self::with_arbiter(scroll, hooks, NestedScrollArbiter)
    }

    pub fn with_arbiter(
        scroll: ScrollState,
        hooks: DragHooks,
        arbiter: impl GestureArbiter + 'static,
    ) -> Self {
        Self {
            detector: DragGestureDetector::new(),
            arbiter: Box::new(arbiter),
            scroll,
            hooks,
            owner: DragOwner::None,
            scrolled_translation: 0.0,
        }
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn owner(&self) -> DragOwner {
        self.owner
    }

    pub fn set_hooks(&mut self, hooks: DragHooks) {
        self.hooks = hooks;
    }

    /// Routes a raw pointer event through drag recognition.
    ///
    /// `sheet_offset` is the sheet's offset right now, as shown on screen.
    /// Returns the recognised update when it belongs to the sheet; such
    /// events are consumed.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        sheet_offset: f32,
    ) -> Option<DragUpdate> {
        let update = self.detector.on_pointer_event(event)?;
        let claimed = self.on_drag(update.state, update.sample, sheet_offset);
        if claimed {
            event.consume();
            Some(update)
        } else {
            None
        }
    }

    /// Handles one already recognised drag step.
    ///
    /// Returns `true` when the step belongs to a drag the sheet owns.
    pub fn on_drag(&mut self, state: GestureState, sample: DragSample, sheet_offset: f32) -> bool {
        match state {
            GestureState::Possible => false,
            GestureState::Began => self.begin(sample, sheet_offset),
            GestureState::Changed => match self.owner {
                DragOwner::Sheet => {
                    self.hooks.drag_changed(&sample);
                    true
                }
                DragOwner::Scroll => {
                    self.scroll_by_translation(sample.translation.dy);
                    false
                }
                DragOwner::None => false,
            },
            GestureState::Ended | GestureState::Cancelled | GestureState::Failed => {
                let owner = std::mem::take(&mut self.owner);
                self.scrolled_translation = 0.0;
                if owner == DragOwner::Sheet {
                    self.hooks.drag_ended(&sample);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn begin(&mut self, sample: DragSample, sheet_offset: f32) -> bool {
        let scroll = ScrollContext::new(self.scroll.content_offset_y(), sheet_offset == 0.0);
        self.scrolled_translation = 0.0;
        if self
            .arbiter
            .should_begin(sample.velocity, scroll, sheet_offset)
        {
            self.owner = DragOwner::Sheet;
            self.hooks.drag_began(&sample);
            true
        } else {
            self.owner = DragOwner::Scroll;
            self.scroll_by_translation(sample.translation.dy);
            false
        }
    }

    /// Native scrolling: the finger moving up scrolls the content forward.
    fn scroll_by_translation(&mut self, translation_y: f32) {
        let delta = translation_y - self.scrolled_translation;
        self.scrolled_translation = translation_y;
        let consumed = self.scroll.dispatch_raw_delta(-delta);
        log::trace!("sheet: scroll content by {} (consumed {consumed})", -delta);
    }
}

impl std::fmt::Debug for DraggableScrollSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableScrollSheet")
            .field("owner", &self.owner)
            .field("scroll", &self.scroll)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/draggable_tests.rs"]
mod tests;
