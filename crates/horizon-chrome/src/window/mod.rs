//! Frameless window chrome.
//!
//! - [`FramelessWindowChrome`]: pure hit-test geometry
//! - [`FramelessWindow`]: chrome state, button wiring and close handling for
//!   one window
//! - [`NativeMessageAdapter`]: answers native window messages
//! - [`WindowHost`]: what the chrome needs from the native window

mod button;
mod drag_borders;
mod frameless_chrome;
mod frameless_window;
mod hit_zone;
mod host;
mod native_message;
mod policy;
mod window_state;

pub use button::{
    ButtonRole, ButtonSubscription, ChromeButton, ChromeWidget, TitleBarArea, WindowButton,
};
pub use drag_borders::DragBorders;
pub use frameless_chrome::{DEFAULT_BORDER_TRIGGER_WIDTH, FramelessWindowChrome};
pub use frameless_window::FramelessWindow;
pub use hit_zone::{HitZone, NativeHitCode, ResizeDirection};
pub use host::WindowHost;
pub use native_message::{
    MessageKind, MessageOutcome, MinMaxInfo, NativeMessage, NativeMessageAdapter,
    WeakMessageAdapter,
};
pub use policy::ChromePolicy;
pub use window_state::WindowState;
