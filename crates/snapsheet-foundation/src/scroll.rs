//! Scroll position of the content hosted inside the sheet.
//!
//! `ScrollState` is the scroll model only. Gesture state lives in the drag
//! detector and the sheet; the arbiter reads the scroll position through
//! [`ScrollContextProvider`] and never writes it.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCROLL_STATE_ID: AtomicU64 = AtomicU64::new(1);

/// Read-only view of the inner scroll surface, taken when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollContext {
    /// Vertical content offset. `0` is the top anchor; positive values mean
    /// the content has been scrolled away from its top.
    pub content_offset_y: f32,
    /// Whether the sheet itself rests at its fully open anchor.
    ///
    /// [`crate::NestedScrollArbiter`] decides from the sheet offset it is
    /// given and ignores this flag; custom arbiters may read it instead.
    pub is_at_top: bool,
}

impl ScrollContext {
    pub fn new(content_offset_y: f32, is_at_top: bool) -> Self {
        Self {
            content_offset_y,
            is_at_top,
        }
    }
}

/// Capability of a scroll surface to report its vertical content offset.
pub trait ScrollContextProvider {
    fn content_offset_y(&self) -> f32;
}

/// Holds the scroll offset of the sheet content.
///
/// Cheap to clone; clones share the same position.
#[derive(Clone, Debug)]
pub struct ScrollState {
    inner: Rc<ScrollStateInner>,
}

#[derive(Debug)]
struct ScrollStateInner {
    id: u64,
    value: Cell<f32>,
    /// `content_size - viewport_size`
    max_value: Cell<f32>,
}

impl ScrollState {
    /// The range is unbounded until [`ScrollState::set_max_value`] reports
    /// the measured content.
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Rc::new(ScrollStateInner {
                id: NEXT_SCROLL_STATE_ID.fetch_add(1, Ordering::Relaxed),
                value: Cell::new(initial.max(0.0)),
                max_value: Cell::new(f32::INFINITY),
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    pub fn max_value(&self) -> f32 {
        self.inner.max_value.get()
    }

    /// Updates the scroll range after the content has been measured.
    pub fn set_max_value(&self, max: f32) {
        let max = max.max(0.0);
        self.inner.max_value.set(max);
        if self.value() > max {
            self.inner.value.set(max);
        }
    }

    /// Scrolls by `delta`, clamped to `[0, max_value]`.
    /// Returns the amount actually scrolled.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        let current = self.value();
        let next = (current + delta).clamp(0.0, self.max_value());
        self.inner.value.set(next);
        next - current
    }

    pub fn scroll_to(&self, position: f32) {
        self.inner
            .value
            .set(position.clamp(0.0, self.max_value()));
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PartialEq for ScrollState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollContextProvider for ScrollState {
    fn content_offset_y(&self) -> f32 {
        self.value()
    }
}
