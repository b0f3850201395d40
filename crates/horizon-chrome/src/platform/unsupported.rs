use std::sync::Arc;

use horizon_chrome_core::logging::targets;
use winit::window::Window;

use super::PlatformChrome;
use crate::error::{ChromeError, ChromeResult};
use crate::window::{FramelessWindow, WindowHost};

/// Strategy for windowing systems without native chrome support.
///
/// Every operation fails with [`ChromeError::Unsupported`]; applications can
/// still drive [`FramelessWindow::hit_test_local`] from their own mouse
/// handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedChrome;

impl PlatformChrome for UnsupportedChrome {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn create_host(&self, _window: Arc<Window>) -> ChromeResult<Arc<dyn WindowHost>> {
        tracing::warn!(target: targets::PLATFORM, "native chrome host requested on an unsupported platform");
        Err(ChromeError::Unsupported(
            "native window hosts are only available on Windows",
        ))
    }

    fn install(&self, _window: &Window, _chrome: &FramelessWindow) -> ChromeResult<()> {
        tracing::warn!(target: targets::PLATFORM, "native chrome install requested on an unsupported platform");
        Err(ChromeError::Unsupported(
            "native message interception is only available on Windows",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(UnsupportedChrome.name(), "unsupported");
    }
}
