//! UI-thread verification for chrome state.
//!
//! All hit-testing, native message handling and button wiring run on the
//! toolkit's single UI thread. These helpers make violations loud in debug
//! builds instead of silently racing.
//!
//! # Usage
//!
//! ```ignore
//! use horizon_chrome_core::{debug_assert_ui_thread, set_ui_thread};
//!
//! fn main() {
//!     set_ui_thread();
//!     // ...
//! }
//!
//! fn handle_message(&self) {
//!     debug_assert_ui_thread!();
//!     // ...
//! }
//! ```
//!
//! Objects that must stay on the thread that created them carry a
//! [`ThreadAffinity`] instead.

use std::sync::OnceLock;
use std::thread::ThreadId;

static UI_THREAD_ID: OnceLock<ThreadId> = OnceLock::new();

/// Register the current thread as the UI thread.
///
/// Call once, at startup, from the thread that runs the event loop.
///
/// # Panics
///
/// Panics if a different thread was already registered.
pub fn set_ui_thread() {
    let caller = std::thread::current().id();
    if let Err(caller) = UI_THREAD_ID.set(caller)
        && UI_THREAD_ID.get() != Some(&caller)
    {
        panic!("the UI thread is already registered as {:?}", UI_THREAD_ID.get());
    }
}

/// Get the UI thread ID if it has been registered.
#[inline]
pub fn ui_thread_id() -> Option<ThreadId> {
    UI_THREAD_ID.get().copied()
}

/// Check if the current thread is the UI thread.
///
/// Returns `true` when no UI thread has been registered yet.
#[inline]
pub fn is_ui_thread() -> bool {
    match UI_THREAD_ID.get() {
        Some(&ui_id) => std::thread::current().id() == ui_id,
        None => true,
    }
}

/// Debug-only assertion that panics if not on the UI thread.
#[macro_export]
macro_rules! debug_assert_ui_thread {
    () => {
        $crate::debug_assert_ui_thread!("operation must be performed on the UI thread")
    };
    ($msg:expr) => {
        if cfg!(debug_assertions) && !$crate::thread_check::is_ui_thread() {
            $crate::thread_check::panic_not_ui_thread($msg, file!(), line!());
        }
    };
}

#[cold]
#[inline(never)]
#[doc(hidden)]
pub fn panic_not_ui_thread(msg: &str, file: &str, line: u32) -> ! {
    let caller = std::thread::current();
    panic!(
        "{msg} ({file}:{line}): called from {name} ({id:?}), UI thread is {ui:?}. \
         Queue the call with ConnectionType::Queued and drain it with \
         process_queued_invocations().",
        name = caller.name().unwrap_or("<unnamed>"),
        id = caller.id(),
        ui = ui_thread_id(),
    )
}

/// The thread a piece of chrome state belongs to.
///
/// Captured when the owner is constructed; mutators call
/// [`debug_assert_same_thread`](Self::debug_assert_same_thread) on entry.
///
/// # Example
///
/// ```
/// use horizon_chrome_core::ThreadAffinity;
///
/// struct BorderSettings {
///     owner: ThreadAffinity,
///     width: std::cell::Cell<u32>,
/// }
///
/// impl BorderSettings {
///     fn set_width(&self, width: u32) {
///         self.owner.debug_assert_same_thread();
///         self.width.set(width);
///     }
/// }
///
/// let settings = BorderSettings { owner: ThreadAffinity::current(), width: std::cell::Cell::new(6) };
/// settings.set_width(8);
/// assert_eq!(settings.width.get(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    owner: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Bind to the calling thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            owner: std::thread::current().id(),
        }
    }

    /// The owning thread.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.owner
    }

    /// Whether the caller runs on the owning thread.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        self.owner == std::thread::current().id()
    }

    /// Panic with `msg` unless called from the owning thread.
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if self.owner != std::thread::current().id() {
            self.report_foreign_access(msg);
        }
    }

    /// [`assert_same_thread_with_msg`](Self::assert_same_thread_with_msg),
    /// compiled out of release builds.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        if cfg!(debug_assertions) {
            self.assert_same_thread_with_msg("chrome state touched off its owning thread");
        }
    }

    #[cold]
    #[inline(never)]
    fn report_foreign_access(&self, msg: &str) -> ! {
        let caller = std::thread::current();
        panic!(
            "{msg}: owned by {owner:?}, called from {name} ({id:?})",
            owner = self.owner,
            name = caller.name().unwrap_or("<unnamed>"),
            id = caller.id(),
        )
    }
}
