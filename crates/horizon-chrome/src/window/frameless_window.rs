//! The chrome state attached to one frameless window.
//!
//! [`FramelessWindow`] owns the configuration (border thickness, enabled
//! borders, policy hooks) and the subscriptions to the
//! application's minimize, toggle and close buttons. The state the native
//! message adapter needs lives behind an `Arc` so that a subclassed window
//! procedure can keep answering messages on its own schedule.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{
    ConnectionType, ThreadAffinity, chrome_debug, chrome_trace, chrome_warn,
};
use parking_lot::RwLock;

use crate::config::ChromeConfig;
use crate::error::{ChromeError, ChromeResult};
use crate::geometry::{Point, Size};

use super::{
    ButtonRole, ButtonSubscription, ChromeButton, ChromePolicy, ChromeWidget, DragBorders,
    FramelessWindowChrome, HitZone, MinMaxInfo, MessageOutcome, NativeMessage,
    NativeMessageAdapter, WindowHost, WindowState,
};

/// State shared between a [`FramelessWindow`], its button slots and its
/// message adapters.
///
/// Locks are only held long enough to copy a value out; the host, the
/// policy hooks and widgets are always called with no lock held.
pub(crate) struct ChromeShared {
    host: Arc<dyn WindowHost>,
    chrome: RwLock<FramelessWindowChrome>,
    policy: RwLock<ChromePolicy>,
    title_bar: RwLock<Option<Arc<dyn ChromeWidget>>>,
    toggle_button: RwLock<Option<Arc<dyn ChromeButton>>>,
    shown: AtomicBool,
}

impl ChromeShared {
    fn new(host: Arc<dyn WindowHost>) -> Self {
        Self {
            host,
            chrome: RwLock::new(FramelessWindowChrome::new()),
            policy: RwLock::new(ChromePolicy::new()),
            title_bar: RwLock::new(None),
            toggle_button: RwLock::new(None),
            shown: AtomicBool::new(false),
        }
    }

    pub(crate) fn hit_test_screen(&self, screen: Point) -> HitZone {
        let window = self.host.window_rect();
        self.hit_test_local(window.map_to_local(screen), window.size())
    }

    fn hit_test_local(&self, local: Point, window_size: Size) -> HitZone {
        let maximized = self.host.state().is_maximized();
        let mut chrome = self.chrome.read().clone();
        let title_bar = self.title_bar.read().clone();
        if let Some(title_bar) = title_bar {
            chrome.set_title_bar_region(Some(title_bar.geometry()));
        }
        let policy = self.policy.read().clone();
        chrome.hit_test(local, window_size, maximized, &policy)
    }

    /// Run the close hook and quit if it agrees. Returns whether it agreed.
    pub(crate) fn request_close(&self) -> bool {
        let policy = self.policy.read().clone();
        if policy.confirm_close() {
            chrome_debug!("close confirmed, quitting");
            self.host.quit_application();
            true
        } else {
            chrome_debug!("close declined");
            false
        }
    }

    pub(crate) fn first_show(&self) {
        if !self.shown.swap(true, Ordering::SeqCst) {
            chrome_debug!("first show, applying frameless style");
            self.host.apply_frameless_style();
        }
    }

    /// Maximize onto the work area. Track sizes are left as the toolkit
    /// filled them in.
    pub(crate) fn fill_min_max_info(&self, info: &mut MinMaxInfo) {
        match self.host.nearest_work_area() {
            Some(work_area) => {
                info.max_position = work_area.origin();
                info.max_size = work_area.size();
            }
            None => {
                chrome_warn!("no work area for window, keeping default maximize bounds");
            }
        }
    }

    pub(crate) fn window_state_changed(&self, state: WindowState) {
        let Some(checked) = state.toggle_checked() else {
            return;
        };
        let button = self.toggle_button.read().clone();
        if let Some(button) = button {
            tracing::trace!(target: targets::BUTTONS, ?state, checked, "syncing toggle button");
            button.set_checked(checked);
        }
    }

    fn toggle_maximized(&self, checked: bool) {
        if checked {
            self.host.maximize();
        } else {
            self.host.restore();
        }
    }
}

/// Frameless window chrome bound to a native window.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use horizon_chrome::prelude::*;
///
/// let mut window = FramelessWindow::new(host)
///     .with_policy(ChromePolicy::new().with_confirm_close(|| ask_user()));
/// window.set_title_bar(Some(title_bar));
/// window.set_minimize_button(minimize);
/// window.set_toggle_button(maximize)?;
/// window.set_close_button(close);
///
/// NativePlatformChrome::default().install(&winit_window, &window)?;
/// ```
pub struct FramelessWindow {
    shared: Arc<ChromeShared>,
    minimize: Option<ButtonSubscription>,
    toggle: Option<ButtonSubscription>,
    close: Option<ButtonSubscription>,
    affinity: ThreadAffinity,
}

impl FramelessWindow {
    /// Create chrome for the window behind `host`, with default settings.
    pub fn new(host: Arc<dyn WindowHost>) -> Self {
        Self {
            shared: Arc::new(ChromeShared::new(host)),
            minimize: None,
            toggle: None,
            close: None,
            affinity: ThreadAffinity::current(),
        }
    }

    /// Set the policy using builder pattern.
    pub fn with_policy(self, policy: ChromePolicy) -> Self {
        self.set_policy(policy);
        self
    }

    /// The window this chrome decorates.
    pub fn host(&self) -> &Arc<dyn WindowHost> {
        &self.shared.host
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the policy hooks.
    pub fn set_policy(&self, policy: ChromePolicy) {
        self.affinity.debug_assert_same_thread();
        *self.shared.policy.write() = policy;
    }

    /// Get a copy of the policy hooks.
    pub fn policy(&self) -> ChromePolicy {
        self.shared.policy.read().clone()
    }

    /// Set the resize border thickness in pixels.
    pub fn set_border_trigger_width(&self, width: u32) {
        self.affinity.debug_assert_same_thread();
        self.shared.chrome.write().set_border_trigger_width(width);
        chrome_debug!(width, "border trigger width changed");
    }

    /// Get the resize border thickness in pixels.
    pub fn border_trigger_width(&self) -> u32 {
        self.shared.chrome.read().border_trigger_width()
    }

    /// Set which border zones may resize.
    pub fn set_drag_borders(&self, borders: DragBorders) {
        self.affinity.debug_assert_same_thread();
        self.shared.chrome.write().set_drag_borders(borders);
        chrome_debug!(?borders, "drag borders changed");
    }

    /// Get which border zones may resize.
    pub fn drag_borders(&self) -> DragBorders {
        self.shared.chrome.read().drag_borders()
    }

    /// Set the smallest size the user may resize to.
    ///
    /// Forwarded to the host; the window keeps no copy, so limits set on the
    /// toolkit window directly are honored the same way.
    pub fn set_minimum_size(&self, size: Size) {
        self.affinity.debug_assert_same_thread();
        chrome_debug!(?size, "minimum size changed");
        self.shared.host.set_minimum_size(size);
    }

    /// Set the largest size the user may resize to. Forwarded to the host.
    pub fn set_maximum_size(&self, size: Size) {
        self.affinity.debug_assert_same_thread();
        chrome_debug!(?size, "maximum size changed");
        self.shared.host.set_maximum_size(size);
    }

    /// Apply every setting from a configuration file.
    pub fn apply_config(&self, config: &ChromeConfig) {
        self.set_border_trigger_width(config.border_trigger_width);
        self.set_drag_borders(config.drag_borders);
        self.set_minimum_size(config.min_size);
        self.set_maximum_size(config.max_size);
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Set or clear the widget whose geometry drags the window.
    pub fn set_title_bar(&self, title_bar: Option<Arc<dyn ChromeWidget>>) {
        self.affinity.debug_assert_same_thread();
        *self.shared.title_bar.write() = title_bar;
    }

    /// Get the title bar widget.
    pub fn title_bar(&self) -> Option<Arc<dyn ChromeWidget>> {
        self.shared.title_bar.read().clone()
    }

    /// Attach the button that minimizes the window, replacing any previous one.
    pub fn set_minimize_button(&mut self, button: Arc<dyn ChromeButton>) {
        self.affinity.debug_assert_same_thread();
        self.minimize = None;

        let shared = Arc::downgrade(&self.shared);
        let connection = button.clicked().connect(move |_| {
            if let Some(shared) = Weak::upgrade(&shared) {
                shared.host.minimize();
            }
        });
        self.minimize = Some(ButtonSubscription::new(button, ButtonRole::Minimize, connection));
    }

    /// Attach the maximize/restore button, replacing any previous one.
    ///
    /// Clicking a checked button maximizes; clicking it back restores. The
    /// button's checked state follows the window state from then on and is
    /// synchronized with the current state immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::NotCheckable`] if the button is not checkable.
    /// The previously attached toggle button stays attached in that case.
    pub fn set_toggle_button(&mut self, button: Arc<dyn ChromeButton>) -> ChromeResult<()> {
        self.affinity.debug_assert_same_thread();
        if !button.is_checkable() {
            tracing::warn!(target: targets::BUTTONS, "refusing non-checkable toggle button");
            return Err(ChromeError::NotCheckable {
                role: ButtonRole::Toggle,
            });
        }
        self.toggle = None;

        let shared = Arc::downgrade(&self.shared);
        let connection = button.clicked().connect_with_type(
            move |&checked| {
                if let Some(shared) = Weak::upgrade(&shared) {
                    shared.toggle_maximized(checked);
                }
            },
            ConnectionType::Direct,
        );
        *self.shared.toggle_button.write() = Some(button.clone());
        self.toggle = Some(ButtonSubscription::new(button, ButtonRole::Toggle, connection));

        let state = self.shared.host.state();
        self.shared.window_state_changed(state);
        Ok(())
    }

    /// Attach the button that closes the window, replacing any previous one.
    ///
    /// Clicks go through the same confirmation as a native close request.
    pub fn set_close_button(&mut self, button: Arc<dyn ChromeButton>) {
        self.affinity.debug_assert_same_thread();
        self.close = None;

        let shared = Arc::downgrade(&self.shared);
        let connection = button.clicked().connect(move |_| {
            if let Some(shared) = Weak::upgrade(&shared) {
                shared.request_close();
            }
        });
        self.close = Some(ButtonSubscription::new(button, ButtonRole::Close, connection));
    }

    /// Get the minimize button.
    pub fn minimize_button(&self) -> Option<Arc<dyn ChromeButton>> {
        self.minimize.as_ref().map(|s| s.button().clone())
    }

    /// Get the maximize/restore button.
    pub fn toggle_button(&self) -> Option<Arc<dyn ChromeButton>> {
        self.toggle.as_ref().map(|s| s.button().clone())
    }

    /// Get the close button.
    pub fn close_button(&self) -> Option<Arc<dyn ChromeButton>> {
        self.close.as_ref().map(|s| s.button().clone())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Classify a point given in screen coordinates.
    pub fn hit_test(&self, screen: Point) -> HitZone {
        self.shared.hit_test_screen(screen)
    }

    /// Classify a point given relative to the window's top-left corner.
    ///
    /// Toolkits that move and resize through winit can feed the result's
    /// [`HitZone::resize_direction`] to `Window::drag_resize_window`.
    pub fn hit_test_local(&self, local: Point) -> HitZone {
        let window_size = self.shared.host.window_rect().size();
        self.shared.hit_test_local(local, window_size)
    }

    /// Keep the toggle button in step with the window state.
    ///
    /// `Maximized` checks it and `Normal` unchecks it; other states leave
    /// it alone.
    pub fn on_window_state_changed(&self, state: WindowState) {
        chrome_trace!(?state, "window state changed");
        self.shared.window_state_changed(state);
    }

    /// Ask to close the window. Returns whether the close hook agreed.
    pub fn request_close(&self) -> bool {
        self.shared.request_close()
    }

    /// Handle a native message, or decline it.
    pub fn handle_message(&self, message: &mut NativeMessage<'_>) -> MessageOutcome {
        self.adapter().handle(message)
    }

    /// A handle that answers native messages for this window.
    ///
    /// The adapter keeps the chrome state and its host alive. A policy hook
    /// that needs to reach the adapter must capture
    /// [`NativeMessageAdapter::downgrade`] instead, or the state never drops.
    pub fn adapter(&self) -> NativeMessageAdapter {
        NativeMessageAdapter::new(self.shared.clone())
    }
}

impl std::fmt::Debug for FramelessWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chrome = self.shared.chrome.read().clone();
        f.debug_struct("FramelessWindow")
            .field("chrome", &chrome)
            .field("minimize", &self.minimize)
            .field("toggle", &self.toggle)
            .field("close", &self.close)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::window::WindowButton;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct StubHost {
        state: Mutex<WindowState>,
        calls: Mutex<Vec<&'static str>>,
        limits: Mutex<(Option<Size>, Option<Size>)>,
    }

    impl WindowHost for StubHost {
        fn window_rect(&self) -> Rect {
            Rect::new(100, 100, 400, 300)
        }
        fn state(&self) -> WindowState {
            *self.state.lock()
        }
        fn minimize(&self) {
            self.calls.lock().push("minimize");
        }
        fn maximize(&self) {
            self.calls.lock().push("maximize");
            *self.state.lock() = WindowState::Maximized;
        }
        fn restore(&self) {
            self.calls.lock().push("restore");
            *self.state.lock() = WindowState::Normal;
        }
        fn set_minimum_size(&self, size: Size) {
            self.limits.lock().0 = Some(size);
        }
        fn set_maximum_size(&self, size: Size) {
            self.limits.lock().1 = Some(size);
        }
        fn apply_frameless_style(&self) {
            self.calls.lock().push("style");
        }
        fn nearest_work_area(&self) -> Option<Rect> {
            None
        }
        fn quit_application(&self) {
            self.calls.lock().push("quit");
        }
    }

    #[test]
    fn test_defaults() {
        let window = FramelessWindow::new(Arc::new(StubHost::default()));
        assert_eq!(window.border_trigger_width(), 6);
        assert_eq!(window.drag_borders(), DragBorders::ALL);
        assert!(window.title_bar().is_none());
        assert!(window.toggle_button().is_none());
    }

    #[test]
    fn test_hit_test_maps_screen_to_local() {
        let window = FramelessWindow::new(Arc::new(StubHost::default()));
        window.set_title_bar(Some(Arc::new(Rect::new(0, 0, 400, 30))));

        assert_eq!(window.hit_test(Point::new(102, 102)), HitZone::TopLeft);
        assert_eq!(window.hit_test(Point::new(250, 110)), HitZone::Title);
        assert_eq!(window.hit_test_local(Point::new(150, 10)), HitZone::Title);
        assert_eq!(window.hit_test_local(Point::new(200, 150)), HitZone::None);
    }

    #[test]
    fn test_replacing_button_detaches_previous() {
        let host = Arc::new(StubHost::default());
        let mut window = FramelessWindow::new(host.clone());
        let first = Arc::new(WindowButton::new("_"));
        let second = Arc::new(WindowButton::new("_"));

        window.set_minimize_button(first.clone());
        window.set_minimize_button(second.clone());

        assert_eq!(first.clicked().connection_count(), 0);
        first.click();
        assert!(host.calls.lock().is_empty());

        second.click();
        assert_eq!(*host.calls.lock(), vec!["minimize"]);
    }

    #[test]
    fn test_dropping_window_detaches_buttons() {
        let close = Arc::new(WindowButton::new("X"));
        {
            let mut window = FramelessWindow::new(Arc::new(StubHost::default()));
            window.set_close_button(close.clone());
            assert_eq!(close.clicked().connection_count(), 1);
        }
        assert_eq!(close.clicked().connection_count(), 0);
    }

    #[test]
    fn test_apply_config() {
        let host = Arc::new(StubHost::default());
        let window = FramelessWindow::new(host.clone());
        let config = ChromeConfig {
            border_trigger_width: 10,
            drag_borders: DragBorders::EDGES,
            min_size: Size::new(320, 240),
            max_size: Size::new(1920, 1080),
        };
        window.apply_config(&config);

        assert_eq!(window.border_trigger_width(), 10);
        assert_eq!(window.drag_borders(), DragBorders::EDGES);
        assert_eq!(
            *host.limits.lock(),
            (Some(Size::new(320, 240)), Some(Size::new(1920, 1080)))
        );
    }
}
