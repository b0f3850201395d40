//! Horizon Chrome - custom chrome for frameless desktop windows.
//!
//! The native title bar and border are removed and re-implemented in
//! application code. The crate decides, for every mouse position and every
//! relevant native window message, whether the window manager should drag
//! the window, resize it from an edge or corner, or leave the point to the
//! application. It also keeps a maximize/restore button in step with the
//! window state and gates closing behind a confirmation hook.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use horizon_chrome::prelude::*;
//! use winit::window::Window;
//!
//! fn decorate(window: &Arc<Window>) -> ChromeResult<FramelessWindow> {
//!     let platform = native_platform();
//!     let host = platform.create_host(window.clone())?;
//!
//!     let maximize = Arc::new(WindowButton::new("Maximize").with_checkable(true));
//!     let mut chrome = FramelessWindow::new(host)
//!         .with_policy(ChromePolicy::new().with_confirm_close(|| true));
//!     chrome.set_title_bar(Some(Arc::new(Rect::new(0, 0, 800, 32))));
//!     chrome.set_toggle_button(maximize)?;
//!
//!     platform.install(window, &chrome)?;
//!     Ok(chrome)
//! }
//! ```

pub mod config;
mod error;
pub mod geometry;
pub mod platform;
pub mod window;

pub use config::ChromeConfig;
pub use error::{ChromeError, ChromeResult};
pub use horizon_chrome_core::{
    ConnectionId, ConnectionType, Signal, ThreadAffinity, process_queued_invocations,
    set_ui_thread,
};

/// Commonly used types.
pub mod prelude {
    pub use crate::config::ChromeConfig;
    pub use crate::error::{ChromeError, ChromeResult};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::platform::{NativePlatformChrome, PlatformChrome, native_platform};
    pub use crate::window::{
        ButtonRole, ChromeButton, ChromePolicy, ChromeWidget, DragBorders, FramelessWindow,
        HitZone, MessageOutcome, NativeMessage, TitleBarArea, WindowButton, WindowHost,
        WindowState,
    };
}
