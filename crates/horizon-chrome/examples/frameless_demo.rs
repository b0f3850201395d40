//! Horizon Chrome Frameless Window Demo
//!
//! Opens an undecorated window with custom chrome:
//! - The top 32 pixels drag the window
//! - Edges and corners resize it
//! - Three title-bar buttons minimize, maximize/restore and close it
//! - Closing (button or Alt+F4) asks for confirmation first
//!
//! Dragging is suppressed over the buttons so they stay clickable.
//! Set `HORIZON_CHROME_CONFIG` to a TOML file to override the chrome settings.
//!
//! Run with: cargo run -p horizon-chrome --example frameless_demo

use std::sync::Arc;

use horizon_chrome::geometry::{Rect, Size};
use horizon_chrome::prelude::*;
use horizon_chrome::{process_queued_invocations, set_ui_thread};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy};
use winit::window::{Window, WindowId};

const TITLE_BAR_HEIGHT: i32 = 32;
const BUTTON_WIDTH: i32 = 46;

#[derive(Debug)]
enum DemoEvent {
    Quit,
}

/// Drives the native window but ends the winit event loop on quit.
struct DemoHost {
    native: Arc<dyn WindowHost>,
    proxy: Mutex<EventLoopProxy<DemoEvent>>,
}

impl WindowHost for DemoHost {
    fn window_rect(&self) -> Rect {
        self.native.window_rect()
    }

    fn state(&self) -> WindowState {
        self.native.state()
    }

    fn minimize(&self) {
        self.native.minimize();
    }

    fn maximize(&self) {
        self.native.maximize();
    }

    fn restore(&self) {
        self.native.restore();
    }

    fn set_minimum_size(&self, size: Size) {
        self.native.set_minimum_size(size);
    }

    fn set_maximum_size(&self, size: Size) {
        self.native.set_maximum_size(size);
    }

    fn apply_frameless_style(&self) {
        self.native.apply_frameless_style();
    }

    fn nearest_work_area(&self) -> Option<Rect> {
        self.native.nearest_work_area()
    }

    fn quit_application(&self) {
        if self.proxy.lock().send_event(DemoEvent::Quit).is_err() {
            tracing::warn!("event loop already closed");
        }
    }
}

/// Everything that lives as long as the window.
struct Chrome {
    window: Arc<Window>,
    frameless: FramelessWindow,
    title_bar: Arc<TitleBarArea>,
    buttons: [Arc<WindowButton>; 3],
}

struct App {
    proxy: EventLoopProxy<DemoEvent>,
    chrome: Option<Chrome>,
    cursor: Point,
}

impl App {
    fn build(&self, event_loop: &ActiveEventLoop) -> Result<Chrome, Box<dyn std::error::Error>> {
        // Hidden until the chrome is installed so the first show restyles it.
        let attributes = Window::default_attributes()
            .with_title("Horizon Chrome")
            .with_decorations(false)
            .with_visible(false)
            .with_inner_size(PhysicalSize::new(800, 600));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let platform = native_platform();
        tracing::info!(platform = platform.name(), "installing frameless chrome");
        let native = platform.create_host(window.clone())?;
        let host = Arc::new(DemoHost {
            native,
            proxy: Mutex::new(self.proxy.clone()),
        });

        let title_bar = Arc::new(TitleBarArea::default());
        let minimize = Arc::new(WindowButton::new("_"));
        let toggle = Arc::new(WindowButton::new("[]").with_checkable(true));
        let close = Arc::new(WindowButton::new("X"));
        let buttons = [minimize.clone(), toggle.clone(), close.clone()];
        layout(&title_bar, &buttons, window.inner_size().width as i32);

        let widgets: Vec<Arc<dyn ChromeWidget>> = buttons
            .iter()
            .map(|button| button.clone() as Arc<dyn ChromeWidget>)
            .collect();
        let policy = ChromePolicy::new()
            .with_drag_suppressed_over(widgets)
            .with_confirm_close(confirm_quit(&window));

        let mut frameless = FramelessWindow::new(host).with_policy(policy);
        if let Ok(path) = std::env::var("HORIZON_CHROME_CONFIG") {
            frameless.apply_config(&ChromeConfig::load(path)?);
        }
        frameless.set_title_bar(Some(title_bar.clone()));
        frameless.set_minimize_button(minimize);
        frameless.set_toggle_button(toggle)?;
        frameless.set_close_button(close);

        platform.install(&window, &frameless)?;
        window.set_visible(true);

        Ok(Chrome {
            window,
            frameless,
            title_bar,
            buttons,
        })
    }
}

/// Stretch the title bar across the window and right-align the buttons.
fn layout(title_bar: &TitleBarArea, buttons: &[Arc<WindowButton>], width: i32) {
    title_bar.set_geometry(Rect::new(0, 0, width, TITLE_BAR_HEIGHT));
    let mut x = width;
    for button in buttons.iter().rev() {
        x -= BUTTON_WIDTH;
        button.set_geometry(Rect::new(x, 0, BUTTON_WIDTH, TITLE_BAR_HEIGHT));
    }
}

/// A close hook that asks with a dialog owned by `window`, so the dialog is
/// modal to it.
#[cfg(target_os = "windows")]
fn confirm_quit(window: &Window) -> impl Fn() -> bool + Send + Sync + 'static {
    use raw_window_handle::{HasWindowHandle, RawWindowHandle};
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        IDYES, MB_ICONQUESTION, MB_YESNO, MessageBoxW,
    };
    use windows::core::w;

    let owner = match window.window_handle().map(|handle| handle.as_raw()) {
        Ok(RawWindowHandle::Win32(handle)) => handle.hwnd.get(),
        _ => 0,
    };

    move || {
        let answer = unsafe {
            MessageBoxW(
                HWND(owner as *mut std::ffi::c_void),
                w!("Quit the demo?"),
                w!("Horizon Chrome"),
                MB_YESNO | MB_ICONQUESTION,
            )
        };
        answer == IDYES
    }
}

#[cfg(not(target_os = "windows"))]
fn confirm_quit(_window: &Window) -> impl Fn() -> bool + Send + Sync + 'static {
    || true
}

impl ApplicationHandler<DemoEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.chrome.is_some() {
            return;
        }
        match self.build(event_loop) {
            Ok(chrome) => self.chrome = Some(chrome),
            Err(err) => {
                tracing::error!(%err, "could not set up frameless chrome");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(chrome) = &self.chrome else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                chrome.frameless.request_close();
            }
            WindowEvent::Resized(size) => {
                layout(&chrome.title_bar, &chrome.buttons, size.width as i32);
                chrome.window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as i32, position.y as i32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let cursor = self.cursor;
                if let Some(button) = chrome
                    .buttons
                    .iter()
                    .find(|button| button.geometry().contains(cursor))
                {
                    tracing::debug!(text = %button.text(), "button clicked");
                    button.click();
                }
            }
            _ => {}
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: DemoEvent) {
        match event {
            DemoEvent::Quit => event_loop.exit(),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        process_queued_invocations();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,horizon_chrome=debug")),
        )
        .init();
    set_ui_thread();

    let event_loop = EventLoop::<DemoEvent>::with_user_event().build()?;
    let mut app = App {
        proxy: event_loop.create_proxy(),
        chrome: None,
        cursor: Point::ZERO,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
