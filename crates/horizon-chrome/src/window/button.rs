//! Chrome buttons and the subscriptions that bind them to a window.
//!
//! The window never owns its buttons. Widgets are created and laid out by
//! the application; the chrome only needs a few capabilities from them,
//! expressed by [`ChromeWidget`] and [`ChromeButton`]. [`WindowButton`] and
//! [`TitleBarArea`] are ready-made implementations for hosts that have no
//! widget tree of their own.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use horizon_chrome_core::logging::targets;
use horizon_chrome_core::{ConnectionId, Signal};
use parking_lot::RwLock;

use crate::geometry::Rect;

/// A widget whose geometry the chrome reads.
pub trait ChromeWidget: Send + Sync {
    /// The widget's rectangle relative to the window's top-left corner.
    fn geometry(&self) -> Rect;
}

impl ChromeWidget for Rect {
    fn geometry(&self) -> Rect {
        *self
    }
}

/// A clickable widget that can drive a chrome role.
///
/// `clicked` is emitted with the checked state after the click has been
/// applied, matching toolkit push-button semantics.
pub trait ChromeButton: ChromeWidget {
    /// Signal emitted when the button is clicked.
    fn clicked(&self) -> &Signal<bool>;

    /// Check if the button holds a checked state.
    fn is_checkable(&self) -> bool;

    /// Get the checked state.
    fn is_checked(&self) -> bool;

    /// Set the checked state without emitting `clicked`.
    fn set_checked(&self, checked: bool);
}

/// The role a button plays in the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// Minimizes the window.
    Minimize,
    /// Maximizes or restores the window.
    Toggle,
    /// Closes the window after confirmation.
    Close,
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ButtonRole::Minimize => "minimize",
            ButtonRole::Toggle => "toggle",
            ButtonRole::Close => "close",
        };
        f.write_str(name)
    }
}

/// A minimal push button for window chrome.
///
/// # Example
///
/// ```
/// use horizon_chrome::geometry::Rect;
/// use horizon_chrome::window::{ChromeButton, WindowButton};
///
/// let toggle = WindowButton::new("Maximize")
///     .with_checkable(true)
///     .with_geometry(Rect::new(360, 0, 40, 30));
///
/// toggle.click();
/// assert!(toggle.is_checked());
/// ```
pub struct WindowButton {
    text: RwLock<String>,
    geometry: RwLock<Rect>,
    checkable: AtomicBool,
    checked: AtomicBool,
    clicked: Signal<bool>,
    /// Emitted whenever the checked state changes.
    pub toggled: Signal<bool>,
}

impl WindowButton {
    /// Create a new, non-checkable button.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
            geometry: RwLock::new(Rect::default()),
            checkable: AtomicBool::new(false),
            checked: AtomicBool::new(false),
            clicked: Signal::new(),
            toggled: Signal::new(),
        }
    }

    /// Set checkable using builder pattern.
    pub fn with_checkable(self, checkable: bool) -> Self {
        self.checkable.store(checkable, Ordering::SeqCst);
        self
    }

    /// Set geometry using builder pattern.
    pub fn with_geometry(self, geometry: Rect) -> Self {
        *self.geometry.write() = geometry;
        self
    }

    /// Get the button text.
    pub fn text(&self) -> String {
        self.text.read().clone()
    }

    /// Set the button text.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.write() = text.into();
    }

    /// Move or resize the button.
    pub fn set_geometry(&self, geometry: Rect) {
        *self.geometry.write() = geometry;
    }

    /// Set whether the button is checkable.
    ///
    /// Making a checked button non-checkable unchecks it.
    pub fn set_checkable(&self, checkable: bool) {
        let was = self.checkable.swap(checkable, Ordering::SeqCst);
        if was && !checkable && self.checked.swap(false, Ordering::SeqCst) {
            self.toggled.emit(false);
        }
    }

    /// Programmatically click the button.
    ///
    /// A checkable button flips its checked state first, then `clicked` is
    /// emitted with the new state.
    pub fn click(&self) {
        let checked = if self.is_checkable() {
            let checked = !self.checked.fetch_xor(true, Ordering::SeqCst);
            self.toggled.emit(checked);
            checked
        } else {
            self.is_checked()
        };
        self.clicked.emit(checked);
    }
}

impl ChromeWidget for WindowButton {
    fn geometry(&self) -> Rect {
        *self.geometry.read()
    }
}

impl ChromeButton for WindowButton {
    fn clicked(&self) -> &Signal<bool> {
        &self.clicked
    }

    fn is_checkable(&self) -> bool {
        self.checkable.load(Ordering::SeqCst)
    }

    fn is_checked(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }

    fn set_checked(&self, checked: bool) {
        if self.is_checkable() && self.checked.swap(checked, Ordering::SeqCst) != checked {
            self.toggled.emit(checked);
        }
    }
}

impl fmt::Debug for WindowButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowButton")
            .field("text", &*self.text.read())
            .field("geometry", &*self.geometry.read())
            .field("checkable", &self.is_checkable())
            .field("checked", &self.is_checked())
            .finish()
    }
}

/// A resizable region that drags the window.
#[derive(Debug, Default)]
pub struct TitleBarArea {
    geometry: RwLock<Rect>,
}

impl TitleBarArea {
    pub fn new(geometry: Rect) -> Self {
        Self {
            geometry: RwLock::new(geometry),
        }
    }

    pub fn set_geometry(&self, geometry: Rect) {
        *self.geometry.write() = geometry;
    }
}

impl ChromeWidget for TitleBarArea {
    fn geometry(&self) -> Rect {
        *self.geometry.read()
    }
}

/// A live connection from a button's `clicked` signal to a chrome action.
///
/// Dropping the subscription disconnects the slot, so replacing a button is
/// just replacing its subscription.
pub struct ButtonSubscription {
    button: Arc<dyn ChromeButton>,
    role: ButtonRole,
    connection: ConnectionId,
}

impl ButtonSubscription {
    pub(crate) fn new(button: Arc<dyn ChromeButton>, role: ButtonRole, connection: ConnectionId) -> Self {
        tracing::debug!(target: targets::BUTTONS, %role, "button attached");
        Self {
            button,
            role,
            connection,
        }
    }

    /// The subscribed button.
    pub fn button(&self) -> &Arc<dyn ChromeButton> {
        &self.button
    }

    /// The role the button plays.
    pub fn role(&self) -> ButtonRole {
        self.role
    }

    /// Check if the slot is still connected.
    pub fn is_connected(&self) -> bool {
        self.button.clicked().is_connected(self.connection)
    }
}

impl Drop for ButtonSubscription {
    fn drop(&mut self) {
        if let Err(err) = self.button.clicked().try_disconnect(self.connection) {
            tracing::debug!(target: targets::BUTTONS, role = %self.role, %err, "button already disconnected");
        } else {
            tracing::debug!(target: targets::BUTTONS, role = %self.role, "button detached");
        }
    }
}

impl fmt::Debug for ButtonSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSubscription")
            .field("role", &self.role)
            .field("connection", &self.connection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_click_non_checkable() {
        let button = WindowButton::new("Minimize");
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        button.clicked().connect(move |&checked| received_clone.lock().push(checked));

        button.click();
        button.click();

        assert_eq!(*received.lock(), vec![false, false]);
        assert!(!button.is_checked());
    }

    #[test]
    fn test_click_checkable_flips_state_first() {
        let button = WindowButton::new("Maximize").with_checkable(true);
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        button.clicked().connect(move |&checked| received_clone.lock().push(checked));

        button.click();
        button.click();

        assert_eq!(*received.lock(), vec![true, false]);
    }

    #[test]
    fn test_set_checked_does_not_click() {
        let button = WindowButton::new("Maximize").with_checkable(true);
        let clicks = Arc::new(Mutex::new(0));
        let clicks_clone = clicks.clone();
        button.clicked().connect(move |_| *clicks_clone.lock() += 1);
        let toggles = Arc::new(Mutex::new(Vec::new()));
        let toggles_clone = toggles.clone();
        button.toggled.connect(move |&c| toggles_clone.lock().push(c));

        button.set_checked(true);
        button.set_checked(true);
        button.set_checked(false);

        assert_eq!(*clicks.lock(), 0);
        assert_eq!(*toggles.lock(), vec![true, false]);
    }

    #[test]
    fn test_set_checked_ignored_when_not_checkable() {
        let button = WindowButton::new("Close");
        button.set_checked(true);
        assert!(!button.is_checked());
    }

    #[test]
    fn test_set_checkable_false_unchecks() {
        let button = WindowButton::new("Maximize").with_checkable(true);
        button.set_checked(true);
        button.set_checkable(false);
        assert!(!button.is_checked());
        assert!(!button.is_checkable());
    }

    #[test]
    fn test_subscription_disconnects_on_drop() {
        let button = Arc::new(WindowButton::new("Close"));
        let id = button.clicked().connect(|_| {});
        let subscription = ButtonSubscription::new(button.clone(), ButtonRole::Close, id);
        assert!(subscription.is_connected());
        assert_eq!(subscription.role(), ButtonRole::Close);

        drop(subscription);
        assert_eq!(button.clicked().connection_count(), 0);
    }

    #[test]
    fn test_geometry() {
        let button = WindowButton::new("X").with_geometry(Rect::new(1, 2, 3, 4));
        assert_eq!(button.geometry(), Rect::new(1, 2, 3, 4));
        button.set_geometry(Rect::new(5, 6, 7, 8));
        assert_eq!(button.geometry(), Rect::new(5, 6, 7, 8));

        let title = TitleBarArea::new(Rect::new(0, 0, 400, 30));
        title.set_geometry(Rect::new(0, 0, 800, 30));
        assert_eq!(title.geometry().width, 800);
        assert_eq!(button.text(), "X");
    }
}
