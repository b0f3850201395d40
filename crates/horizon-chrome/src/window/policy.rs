//! Application hooks consulted by the chrome.

use std::fmt;
use std::sync::Arc;

use crate::geometry::Point;

use super::button::ChromeWidget;

type ConfirmHook = Arc<dyn Fn() -> bool + Send + Sync>;
type PointHook = Arc<dyn Fn(Point) -> bool + Send + Sync>;

/// Decisions the application makes on behalf of the chrome.
///
/// - `confirm_close` runs when the window is asked to close. Returning
///   `false` keeps the window open. It may block on a modal dialog.
/// - `border_drag` decides whether a point inside a resize border may resize.
/// - `window_drag` decides whether a point inside the title bar may move the
///   window.
///
/// Drag predicates receive window-local coordinates and run on every hit
/// test, so keep them cheap. All hooks default to `true`.
///
/// # Example
///
/// ```
/// use horizon_chrome::geometry::Point;
/// use horizon_chrome::window::ChromePolicy;
///
/// let policy = ChromePolicy::new()
///     .with_confirm_close(|| false)
///     .with_window_drag(|p: Point| p.x > 40);
///
/// assert!(!policy.confirm_close());
/// assert!(policy.allows_border_drag(Point::new(0, 0)));
/// assert!(!policy.allows_window_drag(Point::new(10, 10)));
/// ```
#[derive(Clone)]
pub struct ChromePolicy {
    confirm_close: ConfirmHook,
    border_drag: PointHook,
    window_drag: PointHook,
}

impl Default for ChromePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromePolicy {
    /// Create a policy that allows everything.
    pub fn new() -> Self {
        Self {
            confirm_close: Arc::new(|| true),
            border_drag: Arc::new(|_| true),
            window_drag: Arc::new(|_| true),
        }
    }

    /// Set the close-confirmation hook.
    pub fn with_confirm_close<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.confirm_close = Arc::new(hook);
        self
    }

    /// Set the border-drag predicate.
    pub fn with_border_drag<F>(mut self, hook: F) -> Self
    where
        F: Fn(Point) -> bool + Send + Sync + 'static,
    {
        self.border_drag = Arc::new(hook);
        self
    }

    /// Set the window-drag predicate.
    pub fn with_window_drag<F>(mut self, hook: F) -> Self
    where
        F: Fn(Point) -> bool + Send + Sync + 'static,
    {
        self.window_drag = Arc::new(hook);
        self
    }

    /// Refuse both kinds of drag while the point is over any of `widgets`.
    ///
    /// Buttons placed inside the title bar or along an edge stay clickable
    /// this way.
    pub fn with_drag_suppressed_over(mut self, widgets: Vec<Arc<dyn ChromeWidget>>) -> Self {
        let widgets: Arc<[Arc<dyn ChromeWidget>]> = widgets.into();
        let outside = move |point: Point| !widgets.iter().any(|w| w.geometry().contains(point));
        let outside: PointHook = Arc::new(outside);
        self.border_drag = outside.clone();
        self.window_drag = outside;
        self
    }

    /// Ask whether the window may close.
    pub fn confirm_close(&self) -> bool {
        (self.confirm_close)()
    }

    /// Ask whether a border point may start a resize.
    pub fn allows_border_drag(&self, point: Point) -> bool {
        (self.border_drag)(point)
    }

    /// Ask whether a title-bar point may start a move.
    pub fn allows_window_drag(&self, point: Point) -> bool {
        (self.window_drag)(point)
    }
}

impl fmt::Debug for ChromePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChromePolicy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_defaults_allow_everything() {
        let policy = ChromePolicy::default();
        assert!(policy.confirm_close());
        assert!(policy.allows_border_drag(Point::new(-5, 3)));
        assert!(policy.allows_window_drag(Point::new(100, 10)));
    }

    #[test]
    fn test_drag_suppressed_over_widgets() {
        let close_button: Arc<dyn ChromeWidget> = Arc::new(Rect::new(360, 0, 40, 30));
        let policy = ChromePolicy::new().with_drag_suppressed_over(vec![close_button]);

        assert!(!policy.allows_window_drag(Point::new(370, 10)));
        assert!(!policy.allows_border_drag(Point::new(398, 2)));
        assert!(policy.allows_window_drag(Point::new(100, 10)));
        assert!(policy.confirm_close());
    }
}
