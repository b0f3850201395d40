//! The native window behind a frameless chrome.

use crate::geometry::{Rect, Size};

use super::WindowState;

/// Operations the chrome needs from the window it decorates.
///
/// Platform strategies implement this on top of a native handle; tests use a
/// recording mock. Every method is called on the UI thread, but never while
/// the chrome holds one of its own locks, so implementations may re-enter the
/// message adapter (for example from a nested modal loop).
pub trait WindowHost: Send + Sync {
    /// The outer window rectangle in screen coordinates.
    fn window_rect(&self) -> Rect;

    /// The current display state.
    fn state(&self) -> WindowState;

    /// Minimize the window.
    fn minimize(&self);

    /// Maximize the window.
    fn maximize(&self);

    /// Restore the window from the maximized or minimized state.
    fn restore(&self);

    /// Set the smallest outer size the user may resize to. [`Size::ZERO`]
    /// removes the limit.
    ///
    /// The toolkit owns size limits; the chrome only forwards them here and
    /// reads them back out of the window manager's size negotiation.
    fn set_minimum_size(&self, size: Size);

    /// Set the largest outer size the user may resize to. [`Size::MAX`]
    /// removes the limit.
    fn set_maximum_size(&self, size: Size);

    /// Re-apply the native style bits that keep snapping, minimize/maximize
    /// animations and border resizing working without visible decorations.
    fn apply_frameless_style(&self);

    /// The work area of the monitor nearest to the window, in screen
    /// coordinates, or `None` if it cannot be determined.
    fn nearest_work_area(&self) -> Option<Rect>;

    /// Terminate the application.
    fn quit_application(&self);
}
