//! Portable native window messages and the adapter that answers them.
//!
//! Platform strategies decode raw window messages into [`NativeMessage`] and
//! hand them to a [`NativeMessageAdapter`]. The adapter either handles the
//! message completely, returning the result code for the window procedure,
//! or declines it so the platform's default processing runs.
//!
//! | Message | Action | Outcome |
//! |---|---|---|
//! | `Close` | Ask the close hook; quit if confirmed | `Handled(0)` |
//! | `NcCalcSize` | Client area fills the whole window | `Handled(0)` |
//! | `ShowWindow` | Re-apply frameless styles on first show | `Declined` |
//! | `NcHitTest` | Classify the point | `Handled(code)` |
//! | `GetMinMaxInfo` | Maximize to the work area | `Handled(0)` |
//! | `Other` | Nothing | `Declined` |

use std::sync::{Arc, Weak};

use horizon_chrome_core::PerfSpan;
use horizon_chrome_core::logging::targets;

use crate::geometry::{Point, Size};

use super::WindowState;
use super::frameless_window::ChromeShared;

/// Track-size and maximize geometry negotiated with the window manager.
///
/// Platform strategies let the toolkit fill the structure first, so the
/// track sizes carry the toolkit window's own size limits. The chrome only
/// rewrites the maximize position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinMaxInfo {
    /// Position of the window when maximized.
    pub max_position: Point,
    /// Size of the window when maximized.
    pub max_size: Size,
    /// Smallest size the user may resize to.
    pub min_track_size: Size,
    /// Largest size the user may resize to.
    pub max_track_size: Size,
}

/// A native window message the chrome understands.
#[derive(Debug, PartialEq, Eq)]
pub enum NativeMessage<'a> {
    /// The window was asked to close.
    Close,
    /// The window manager asks how much of the window is client area.
    NcCalcSize,
    /// The window is being shown or hidden.
    ShowWindow {
        visible: bool,
    },
    /// The window manager asks what lies under a screen point.
    NcHitTest {
        screen: Point,
    },
    /// The window manager asks for maximize and track-size limits.
    GetMinMaxInfo(&'a mut MinMaxInfo),
    /// Any other message, by native identifier.
    Other(u32),
}

impl NativeMessage<'_> {
    /// The message's dispatch tag.
    pub fn kind(&self) -> MessageKind {
        match self {
            NativeMessage::Close => MessageKind::Close,
            NativeMessage::NcCalcSize => MessageKind::NcCalcSize,
            NativeMessage::ShowWindow { .. } => MessageKind::ShowWindow,
            NativeMessage::NcHitTest { .. } => MessageKind::NcHitTest,
            NativeMessage::GetMinMaxInfo(_) => MessageKind::GetMinMaxInfo,
            NativeMessage::Other(_) => MessageKind::Other,
        }
    }
}

/// Dispatch tags for [`NativeMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Close,
    NcCalcSize,
    ShowWindow,
    NcHitTest,
    GetMinMaxInfo,
    Other,
}

/// The adapter's answer to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Fully handled; default processing must not run.
    Handled(isize),
    /// Not handled; default processing should run.
    Declined,
}

impl MessageOutcome {
    /// Check if the message was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, MessageOutcome::Handled(_))
    }
}

type Handler = fn(&ChromeShared, &mut NativeMessage<'_>) -> MessageOutcome;

/// Handlers keyed by message kind. Kinds without an entry are declined.
const DISPATCH: [(MessageKind, Handler); 5] = [
    (MessageKind::Close, handle_close),
    (MessageKind::NcCalcSize, handle_nc_calc_size),
    (MessageKind::ShowWindow, handle_show_window),
    (MessageKind::NcHitTest, handle_nc_hit_test),
    (MessageKind::GetMinMaxInfo, handle_get_min_max_info),
];

fn handle_close(shared: &ChromeShared, _message: &mut NativeMessage<'_>) -> MessageOutcome {
    shared.request_close();
    MessageOutcome::Handled(0)
}

fn handle_nc_calc_size(_shared: &ChromeShared, _message: &mut NativeMessage<'_>) -> MessageOutcome {
    MessageOutcome::Handled(0)
}

fn handle_show_window(shared: &ChromeShared, message: &mut NativeMessage<'_>) -> MessageOutcome {
    if let NativeMessage::ShowWindow { visible: true } = message {
        shared.first_show();
    }
    MessageOutcome::Declined
}

fn handle_nc_hit_test(shared: &ChromeShared, message: &mut NativeMessage<'_>) -> MessageOutcome {
    match message {
        NativeMessage::NcHitTest { screen } => {
            let zone = shared.hit_test_screen(*screen);
            MessageOutcome::Handled(zone.native_code().as_result())
        }
        _ => MessageOutcome::Declined,
    }
}

fn handle_get_min_max_info(shared: &ChromeShared, message: &mut NativeMessage<'_>) -> MessageOutcome {
    match message {
        NativeMessage::GetMinMaxInfo(info) => {
            shared.fill_min_max_info(info);
            MessageOutcome::Handled(0)
        }
        _ => MessageOutcome::Declined,
    }
}

/// Answers native messages on behalf of a [`FramelessWindow`].
///
/// Adapters are cheap handles onto the window's shared chrome state and
/// stay valid after the window value itself is dropped, which is what a
/// subclassed window procedure needs.
///
/// [`FramelessWindow`]: super::FramelessWindow
#[derive(Clone)]
pub struct NativeMessageAdapter {
    shared: Arc<ChromeShared>,
}

impl NativeMessageAdapter {
    pub(crate) fn new(shared: Arc<ChromeShared>) -> Self {
        Self { shared }
    }

    /// Handle a message, or decline it.
    pub fn handle(&self, message: &mut NativeMessage<'_>) -> MessageOutcome {
        let kind = message.kind();
        let Some((_, handler)) = DISPATCH.iter().find(|(k, _)| *k == kind) else {
            return MessageOutcome::Declined;
        };

        let _span = PerfSpan::new("native_message");
        let outcome = handler(&self.shared, message);
        tracing::trace!(target: targets::MESSAGE, ?kind, ?outcome, "native message");
        outcome
    }

    /// Report a window state change observed by the platform.
    pub fn window_state_changed(&self, state: WindowState) {
        self.shared.window_state_changed(state);
    }

    /// A handle that does not keep the chrome state alive.
    ///
    /// Capture this in policy hooks; a strong adapter stored in the window's
    /// own policy forms a reference cycle.
    pub fn downgrade(&self) -> WeakMessageAdapter {
        WeakMessageAdapter {
            shared: Arc::downgrade(&self.shared),
        }
    }
}

/// Non-owning counterpart of [`NativeMessageAdapter`].
#[derive(Clone)]
pub struct WeakMessageAdapter {
    shared: Weak<ChromeShared>,
}

impl WeakMessageAdapter {
    /// The adapter, if the chrome state is still alive.
    pub fn upgrade(&self) -> Option<NativeMessageAdapter> {
        self.shared.upgrade().map(NativeMessageAdapter::new)
    }
}

impl std::fmt::Debug for WeakMessageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakMessageAdapter")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

impl std::fmt::Debug for NativeMessageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeMessageAdapter").finish_non_exhaustive()
    }
}
