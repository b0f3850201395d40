//! Frameless window chrome geometry and hit-testing.
//!
//! When a window has no native decorations, the operating system still needs
//! to know which parts of it behave like a frame. This module answers that
//! question for a single point:
//!
//! - **Resize borders**: a band `border_trigger_width` pixels wide along each
//!   edge, with corners where two bands meet
//! - **Title region**: the area that drags the window
//!
//! # Hit Test Order
//!
//! Border zones are checked first, in the order top-left, top-right,
//! bottom-left, bottom-right, top, bottom, left, right. Only the *first*
//! zone whose distances match is considered. If that zone is disabled in the
//! [`DragBorders`] mask or vetoed by the policy, classification moves on to
//! the title region without trying the remaining borders. While the window
//! is maximized border zones are skipped entirely.
//!
//! # Usage
//!
//! ```
//! use horizon_chrome::geometry::{Point, Rect, Size};
//! use horizon_chrome::window::{ChromePolicy, FramelessWindowChrome, HitZone};
//!
//! let chrome = FramelessWindowChrome::new()
//!     .with_border_trigger_width(6)
//!     .with_title_bar_region(Rect::new(0, 0, 400, 30));
//! let policy = ChromePolicy::new();
//! let size = Size::new(400, 300);
//!
//! assert_eq!(chrome.hit_test(Point::new(2, 2), size, false, &policy), HitZone::TopLeft);
//! assert_eq!(chrome.hit_test(Point::new(150, 10), size, false, &policy), HitZone::Title);
//! assert_eq!(chrome.hit_test(Point::new(200, 150), size, false, &policy), HitZone::None);
//! ```

use crate::geometry::{Point, Rect, Size};
use horizon_chrome_core::logging::targets;

use super::{ChromePolicy, DragBorders, HitZone};

/// Default resize border thickness in pixels.
pub const DEFAULT_BORDER_TRIGGER_WIDTH: u32 = 6;

/// Geometry of a frameless window's chrome.
///
/// # Defaults
///
/// - Border trigger width: 6 pixels
/// - Drag borders: all edges and corners
/// - No title region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramelessWindowChrome {
    /// Thickness of the invisible resize band along each edge.
    border_trigger_width: u32,

    /// Which border zones may resize.
    drag_borders: DragBorders,

    /// Window-local rectangle that drags the window.
    title_bar_region: Option<Rect>,
}

impl Default for FramelessWindowChrome {
    fn default() -> Self {
        Self::new()
    }
}

impl FramelessWindowChrome {
    /// Create a chrome configuration with default values.
    pub fn new() -> Self {
        Self {
            border_trigger_width: DEFAULT_BORDER_TRIGGER_WIDTH,
            drag_borders: DragBorders::ALL,
            title_bar_region: None,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the resize border thickness.
    pub fn with_border_trigger_width(mut self, width: u32) -> Self {
        self.border_trigger_width = width;
        self
    }

    /// Set the enabled border zones.
    pub fn with_drag_borders(mut self, borders: DragBorders) -> Self {
        self.drag_borders = borders;
        self
    }

    /// Set the title region.
    pub fn with_title_bar_region(mut self, region: Rect) -> Self {
        self.title_bar_region = Some(region);
        self
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Set the resize border thickness.
    pub fn set_border_trigger_width(&mut self, width: u32) {
        self.border_trigger_width = width;
    }

    /// Set the enabled border zones.
    pub fn set_drag_borders(&mut self, borders: DragBorders) {
        self.drag_borders = borders;
    }

    /// Replace or clear the title region.
    pub fn set_title_bar_region(&mut self, region: Option<Rect>) {
        self.title_bar_region = region;
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the resize border thickness.
    pub fn border_trigger_width(&self) -> u32 {
        self.border_trigger_width
    }

    /// Get the enabled border zones.
    pub fn drag_borders(&self) -> DragBorders {
        self.drag_borders
    }

    /// Get the title region, if any.
    pub fn title_bar_region(&self) -> Option<Rect> {
        self.title_bar_region
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Classify a window-local point.
    ///
    /// # Arguments
    ///
    /// * `point` - The point relative to the window's top-left corner
    /// * `window_size` - The current size of the window
    /// * `maximized` - Whether the window is maximized
    /// * `policy` - Drag predicates, called with `point`
    pub fn hit_test(
        &self,
        point: Point,
        window_size: Size,
        maximized: bool,
        policy: &ChromePolicy,
    ) -> HitZone {
        if !maximized
            && let Some(zone) = self.border_candidate(point, window_size)
        {
            if self.drag_borders.enables(zone) && policy.allows_border_drag(point) {
                tracing::trace!(target: targets::HIT_TEST, ?point, ?zone, "border zone");
                return zone;
            }
            tracing::trace!(target: targets::HIT_TEST, ?point, ?zone, "border zone rejected");
        }

        if let Some(region) = self.title_bar_region
            && policy.allows_window_drag(point)
            && region.contains(point)
        {
            tracing::trace!(target: targets::HIT_TEST, ?point, "title zone");
            return HitZone::Title;
        }

        HitZone::None
    }

    /// The first border zone whose distances match `point`, if any.
    fn border_candidate(&self, point: Point, window_size: Size) -> Option<HitZone> {
        let bounds = Rect::from_origin_size(Point::ZERO, window_size);
        let border = self.border_trigger_width;

        let on_left = point.x.abs_diff(bounds.left()) <= border;
        let on_right = point.x.abs_diff(bounds.right()) <= border;
        let on_top = point.y.abs_diff(bounds.top()) <= border;
        let on_bottom = point.y.abs_diff(bounds.bottom()) <= border;

        let zone = if on_top && on_left {
            HitZone::TopLeft
        } else if on_top && on_right {
            HitZone::TopRight
        } else if on_bottom && on_left {
            HitZone::BottomLeft
        } else if on_bottom && on_right {
            HitZone::BottomRight
        } else if on_top {
            HitZone::Top
        } else if on_bottom {
            HitZone::Bottom
        } else if on_left {
            HitZone::Left
        } else if on_right {
            HitZone::Right
        } else {
            return None;
        };
        Some(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn size() -> Size {
        Size::new(400, 300)
    }

    fn allow_all() -> ChromePolicy {
        ChromePolicy::new()
    }

    #[test]
    fn test_default_chrome() {
        let chrome = FramelessWindowChrome::new();
        assert_eq!(chrome.border_trigger_width(), 6);
        assert_eq!(chrome.drag_borders(), DragBorders::ALL);
        assert_eq!(chrome.title_bar_region(), None);
    }

    #[test]
    fn test_builder_chain() {
        let chrome = FramelessWindowChrome::new()
            .with_border_trigger_width(10)
            .with_drag_borders(DragBorders::EDGES)
            .with_title_bar_region(Rect::new(0, 0, 100, 40));

        assert_eq!(chrome.border_trigger_width(), 10);
        assert_eq!(chrome.drag_borders(), DragBorders::EDGES);
        assert_eq!(chrome.title_bar_region(), Some(Rect::new(0, 0, 100, 40)));
    }

    #[test]
    fn test_runtime_modification() {
        let mut chrome = FramelessWindowChrome::new();
        chrome.set_border_trigger_width(12);
        chrome.set_drag_borders(DragBorders::NONE);
        chrome.set_title_bar_region(Some(Rect::new(0, 0, 10, 10)));
        assert_eq!(chrome.border_trigger_width(), 12);
        assert!(chrome.drag_borders().is_empty());

        chrome.set_title_bar_region(None);
        assert_eq!(chrome.title_bar_region(), None);
    }

    #[test]
    fn test_hit_test_client_area() {
        let chrome = FramelessWindowChrome::new();
        assert_eq!(
            chrome.hit_test(Point::new(200, 150), size(), false, &allow_all()),
            HitZone::None
        );
    }

    #[test]
    fn test_hit_test_edges() {
        let chrome = FramelessWindowChrome::new();
        let policy = allow_all();

        assert_eq!(chrome.hit_test(Point::new(200, 2), size(), false, &policy), HitZone::Top);
        assert_eq!(chrome.hit_test(Point::new(200, 297), size(), false, &policy), HitZone::Bottom);
        assert_eq!(chrome.hit_test(Point::new(3, 150), size(), false, &policy), HitZone::Left);
        assert_eq!(chrome.hit_test(Point::new(398, 150), size(), false, &policy), HitZone::Right);
    }

    #[test]
    fn test_hit_test_corners() {
        let chrome = FramelessWindowChrome::new();
        let policy = allow_all();

        assert_eq!(chrome.hit_test(Point::new(2, 2), size(), false, &policy), HitZone::TopLeft);
        assert_eq!(chrome.hit_test(Point::new(397, 3), size(), false, &policy), HitZone::TopRight);
        assert_eq!(chrome.hit_test(Point::new(3, 297), size(), false, &policy), HitZone::BottomLeft);
        assert_eq!(
            chrome.hit_test(Point::new(397, 297), size(), false, &policy),
            HitZone::BottomRight
        );
    }

    #[test]
    fn test_border_boundary_is_inclusive() {
        let chrome = FramelessWindowChrome::new();
        let policy = allow_all();

        // Last column is x = 399; distance 6 still counts, 7 does not.
        assert_eq!(chrome.hit_test(Point::new(393, 150), size(), false, &policy), HitZone::Right);
        assert_eq!(chrome.hit_test(Point::new(392, 150), size(), false, &policy), HitZone::None);
        assert_eq!(chrome.hit_test(Point::new(6, 150), size(), false, &policy), HitZone::Left);
        assert_eq!(chrome.hit_test(Point::new(7, 150), size(), false, &policy), HitZone::None);
    }

    #[test]
    fn test_points_outside_window_use_absolute_distance() {
        let chrome = FramelessWindowChrome::new();
        assert_eq!(
            chrome.hit_test(Point::new(-3, 150), size(), false, &allow_all()),
            HitZone::Left
        );
    }

    #[test]
    fn test_extreme_coordinates_are_outside_every_zone() {
        let chrome = FramelessWindowChrome::new().with_title_bar_region(Rect::new(0, 0, 400, 30));
        let policy = allow_all();

        for point in [
            Point::new(i32::MIN, 150),
            Point::new(i32::MAX, 150),
            Point::new(200, i32::MIN),
            Point::new(200, i32::MAX),
            Point::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(chrome.hit_test(point, size(), false, &policy), HitZone::None);
        }
        // A border wide enough to cover any distance still classifies.
        let wide = FramelessWindowChrome::new().with_border_trigger_width(u32::MAX);
        assert_eq!(
            wide.hit_test(Point::new(i32::MIN, i32::MIN), size(), false, &policy),
            HitZone::TopLeft
        );
    }

    #[test]
    fn test_hit_test_title_bar() {
        let chrome = FramelessWindowChrome::new().with_title_bar_region(Rect::new(0, 0, 400, 30));
        let policy = allow_all();

        assert_eq!(chrome.hit_test(Point::new(150, 10), size(), false, &policy), HitZone::Title);
        // Bottom row of the title region is inside.
        assert_eq!(chrome.hit_test(Point::new(150, 29), size(), false, &policy), HitZone::Title);
        assert_eq!(chrome.hit_test(Point::new(150, 30), size(), false, &policy), HitZone::None);
        // Border zones win over the title region.
        assert_eq!(chrome.hit_test(Point::new(150, 2), size(), false, &policy), HitZone::Top);
    }

    #[test]
    fn test_maximized_disables_borders() {
        let chrome = FramelessWindowChrome::new().with_title_bar_region(Rect::new(0, 0, 400, 30));
        let policy = allow_all();

        for point in [Point::new(2, 150), Point::new(398, 150), Point::new(200, 298)] {
            assert_eq!(chrome.hit_test(point, size(), true, &policy), HitZone::None);
        }
        // The title region still drags.
        assert_eq!(chrome.hit_test(Point::new(2, 2), size(), true, &policy), HitZone::Title);
        assert_eq!(chrome.hit_test(Point::new(150, 10), size(), true, &policy), HitZone::Title);
    }

    #[test]
    fn test_corner_bit_enables_corner_without_edges() {
        let chrome = FramelessWindowChrome::new().with_drag_borders(DragBorders::TOP_LEFT);
        let policy = allow_all();

        assert_eq!(chrome.hit_test(Point::new(3, 3), size(), false, &policy), HitZone::TopLeft);
        assert_eq!(chrome.hit_test(Point::new(200, 3), size(), false, &policy), HitZone::None);
        assert_eq!(chrome.hit_test(Point::new(3, 150), size(), false, &policy), HitZone::None);
    }

    #[test]
    fn test_disabled_top_keeps_corner() {
        let mut borders = DragBorders::ALL;
        borders.set(DragBorders::TOP, false);
        let chrome = FramelessWindowChrome::new().with_drag_borders(borders);
        let policy = allow_all();

        assert_eq!(chrome.hit_test(Point::new(3, 3), size(), false, &policy), HitZone::TopLeft);
        assert_eq!(chrome.hit_test(Point::new(200, 3), size(), false, &policy), HitZone::None);
    }

    #[test]
    fn test_corner_from_adjacent_edges() {
        let chrome =
            FramelessWindowChrome::new().with_drag_borders(DragBorders::TOP | DragBorders::LEFT);
        assert_eq!(
            chrome.hit_test(Point::new(3, 3), size(), false, &allow_all()),
            HitZone::TopLeft
        );
    }

    #[test]
    fn test_rejected_candidate_does_not_fall_through() {
        // Only the top edge is enabled: the corner matches first and is
        // rejected, so the top edge is never tried for this point.
        let chrome = FramelessWindowChrome::new()
            .with_drag_borders(DragBorders::TOP)
            .with_title_bar_region(Rect::new(0, 0, 400, 30));
        let policy = allow_all();

        assert_eq!(chrome.hit_test(Point::new(3, 3), size(), false, &policy), HitZone::Title);
        assert_eq!(chrome.hit_test(Point::new(200, 3), size(), false, &policy), HitZone::Top);
    }

    #[test]
    fn test_border_policy_veto_falls_to_title() {
        let chrome = FramelessWindowChrome::new().with_title_bar_region(Rect::new(0, 0, 400, 30));
        let policy = ChromePolicy::new().with_border_drag(|_| false);

        assert_eq!(chrome.hit_test(Point::new(200, 2), size(), false, &policy), HitZone::Title);
        assert_eq!(chrome.hit_test(Point::new(2, 150), size(), false, &policy), HitZone::None);
    }

    #[test]
    fn test_window_policy_veto() {
        let chrome = FramelessWindowChrome::new().with_title_bar_region(Rect::new(0, 0, 400, 30));
        let policy = ChromePolicy::new().with_window_drag(|p| p.x < 300);

        assert_eq!(chrome.hit_test(Point::new(150, 10), size(), false, &policy), HitZone::Title);
        assert_eq!(chrome.hit_test(Point::new(350, 10), size(), false, &policy), HitZone::None);
    }

    #[test]
    fn test_policy_receives_local_point() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let policy = ChromePolicy::new().with_border_drag(move |p| {
            seen_clone.lock().push(p);
            true
        });

        let chrome = FramelessWindowChrome::new();
        chrome.hit_test(Point::new(398, 150), size(), false, &policy);
        assert_eq!(*seen.lock(), vec![Point::new(398, 150)]);
    }

    #[test]
    fn test_policies_not_called_without_candidates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let policy = ChromePolicy::new().with_border_drag(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            true
        });

        let chrome = FramelessWindowChrome::new();
        chrome.hit_test(Point::new(200, 150), size(), false, &policy);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_hit_test_is_deterministic() {
        let chrome = FramelessWindowChrome::new().with_title_bar_region(Rect::new(0, 0, 400, 30));
        let policy = allow_all();

        for point in [Point::new(2, 2), Point::new(150, 10), Point::new(200, 150)] {
            let first = chrome.hit_test(point, size(), false, &policy);
            let second = chrome.hit_test(point, size(), false, &policy);
            assert_eq!(first, second);
        }
    }
}
