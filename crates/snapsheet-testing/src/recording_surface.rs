//! Sheet surface that records everything it is told.

use snapsheet_ui::SheetSurface;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    Content(String),
    Offset(f32),
    AnimateTo(f32),
}

/// Records surface calls into a shared log.
///
/// Clones share the log, so a test can keep one handle while the sheet owns
/// the other.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Offset(offset) => Some(*offset),
                _ => None,
            })
            .collect()
    }

    pub fn last_offset(&self) -> Option<f32> {
        self.offsets().last().copied()
    }

    pub fn animation_targets(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::AnimateTo(target) => Some(*target),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SheetSurface for RecordingSurface {
    type Content = String;

    fn set_content(&mut self, content: String) {
        self.events.borrow_mut().push(SurfaceEvent::Content(content));
    }

    fn set_offset(&mut self, offset: f32) {
        self.events.borrow_mut().push(SurfaceEvent::Offset(offset));
    }

    fn animate_to(&mut self, target: f32) {
        self.events.borrow_mut().push(SurfaceEvent::AnimateTo(target));
    }
}
