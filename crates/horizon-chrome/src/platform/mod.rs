//! Platform strategies that connect the chrome to native windows.
//!
//! Each windowing API gets one [`PlatformChrome`] implementation. A strategy
//! creates the [`WindowHost`] for a winit window and routes the window's raw
//! messages through a [`NativeMessageAdapter`].
//!
//! [`NativeMessageAdapter`]: crate::window::NativeMessageAdapter

use std::sync::Arc;

use winit::window::Window;

use crate::error::ChromeResult;
use crate::window::{FramelessWindow, WindowHost};

mod unsupported;
#[cfg(target_os = "windows")]
mod win32;

pub use unsupported::UnsupportedChrome;
#[cfg(target_os = "windows")]
pub use win32::{Win32Chrome, Win32Host};

/// Native chrome integration for one windowing API.
pub trait PlatformChrome {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Create a host that drives `window` natively.
    fn create_host(&self, window: Arc<Window>) -> ChromeResult<Arc<dyn WindowHost>>;

    /// Route `window`'s native messages through `chrome`.
    ///
    /// The window should still be hidden so the first-show restyling runs.
    fn install(&self, window: &Window, chrome: &FramelessWindow) -> ChromeResult<()>;
}

/// The strategy for the platform being compiled for.
#[cfg(target_os = "windows")]
pub type NativePlatformChrome = Win32Chrome;

/// The strategy for the platform being compiled for.
#[cfg(not(target_os = "windows"))]
pub type NativePlatformChrome = UnsupportedChrome;

/// Get the strategy for the platform being compiled for.
pub fn native_platform() -> NativePlatformChrome {
    NativePlatformChrome::default()
}
