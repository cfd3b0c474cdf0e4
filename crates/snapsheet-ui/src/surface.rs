//! Rendering side of the sheet, seen from the gesture logic.

/// Opaque host surface that displays the sheet.
///
/// The sheet never draws. It hands the host its content once and then pushes
/// a vertical offset on every drag sample and every animation frame.
pub trait SheetSurface {
    type Content;

    fn set_content(&mut self, content: Self::Content);

    /// Apply `offset` as the vertical translation of the sheet content.
    fn set_offset(&mut self, offset: f32);

    /// A snap animation toward `target` has started. Offsets for the
    /// individual frames still arrive through [`SheetSurface::set_offset`].
    fn animate_to(&mut self, target: f32) {
        let _ = target;
    }
}

/// Surface that discards everything, for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl SheetSurface for NullSurface {
    type Content = ();

    fn set_content(&mut self, _content: ()) {}

    fn set_offset(&mut self, _offset: f32) {}
}

impl<S: SheetSurface + ?Sized> SheetSurface for Box<S> {
    type Content = S::Content;

    fn set_content(&mut self, content: Self::Content) {
        (**self).set_content(content);
    }

    fn set_offset(&mut self, offset: f32) {
        (**self).set_offset(offset);
    }

    fn animate_to(&mut self, target: f32) {
        (**self).animate_to(target);
    }
}
