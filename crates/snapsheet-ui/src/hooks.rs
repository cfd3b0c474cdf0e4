//! Extension points of the draggable sheet.

use snapsheet_foundation::DragSample;

pub type DragCallback = Box<dyn FnMut(&DragSample)>;

/// Callbacks invoked while the sheet owns a drag.
///
/// Every hook is optional and defaults to doing nothing. Hooks run
/// synchronously on the thread that delivers the pointer events.
///
/// ```
/// use snapsheet_ui::DragHooks;
///
/// let hooks = DragHooks::new()
///     .on_drag_changed(|sample| println!("dy = {}", sample.translation.dy))
///     .on_drag_ended(|sample| println!("released at {:?}", sample.location));
/// assert!(hooks.has_drag_changed());
/// ```
#[derive(Default)]
pub struct DragHooks {
    began: Option<DragCallback>,
    changed: Option<DragCallback>,
    ended: Option<DragCallback>,
}

impl DragHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs once when the sheet claims a drag, before any `changed` call.
    pub fn on_drag_began(mut self, callback: impl FnMut(&DragSample) + 'static) -> Self {
        self.began = Some(Box::new(callback));
        self
    }

    pub fn on_drag_changed(mut self, callback: impl FnMut(&DragSample) + 'static) -> Self {
        self.changed = Some(Box::new(callback));
        self
    }

    /// Runs for `Ended`, `Cancelled` and `Failed` alike.
    pub fn on_drag_ended(mut self, callback: impl FnMut(&DragSample) + 'static) -> Self {
        self.ended = Some(Box::new(callback));
        self
    }

    pub fn has_drag_changed(&self) -> bool {
        self.changed.is_some()
    }

    pub fn has_drag_ended(&self) -> bool {
        self.ended.is_some()
    }

    pub(crate) fn drag_began(&mut self, sample: &DragSample) {
        if let Some(callback) = self.began.as_mut() {
            callback(sample);
        }
    }

    pub(crate) fn drag_changed(&mut self, sample: &DragSample) {
        if let Some(callback) = self.changed.as_mut() {
            callback(sample);
        }
    }

    pub(crate) fn drag_ended(&mut self, sample: &DragSample) {
        if let Some(callback) = self.ended.as_mut() {
            callback(sample);
        }
    }
}

impl std::fmt::Debug for DragHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragHooks")
            .field("began", &self.began.is_some())
            .field("changed", &self.changed.is_some())
            .field("ended", &self.ended.is_some())
            .finish()
    }
}
