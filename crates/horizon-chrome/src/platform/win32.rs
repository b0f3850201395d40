//! Win32 strategy: window subclassing and native window control.

use std::ffi::c_void;
use std::sync::Arc;

use horizon_chrome_core::logging::targets;
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use static_assertions::const_assert_eq;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow};
use windows::Win32::UI::Shell::{DefSubclassProc, GetWindowSubclass, RemoveWindowSubclass, SetWindowSubclass};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetWindowLongW, GetWindowRect, HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCAPTION,
    HTCLIENT, HTLEFT, HTRIGHT, HTTOP, HTTOPLEFT, HTTOPRIGHT, IsIconic, IsZoomed, MINMAXINFO,
    PostQuitMessage, SIZE_MAXIMIZED, SIZE_MINIMIZED, SIZE_RESTORED, SW_MAXIMIZE, SW_MINIMIZE,
    SW_RESTORE, SetWindowLongW, ShowWindow, WM_CLOSE, WM_GETMINMAXINFO, WM_NCCALCSIZE,
    WM_NCDESTROY, WM_NCHITTEST, WM_SHOWWINDOW, WM_SIZE, WS_CAPTION, WS_CLIPCHILDREN,
    WS_CLIPSIBLINGS, WS_MAXIMIZEBOX, WS_MINIMIZEBOX, WS_THICKFRAME, WS_VISIBLE,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::PlatformChrome;
use crate::error::{ChromeError, ChromeResult};
use crate::geometry::{Point, Rect, Size};
use crate::window::{
    FramelessWindow, MessageOutcome, MinMaxInfo, NativeHitCode, NativeMessage,
    NativeMessageAdapter, WindowHost, WindowState,
};

const_assert_eq!(NativeHitCode::Client as i64, HTCLIENT as i64);
const_assert_eq!(NativeHitCode::Caption as i64, HTCAPTION as i64);
const_assert_eq!(NativeHitCode::Left as i64, HTLEFT as i64);
const_assert_eq!(NativeHitCode::Right as i64, HTRIGHT as i64);
const_assert_eq!(NativeHitCode::Top as i64, HTTOP as i64);
const_assert_eq!(NativeHitCode::TopLeft as i64, HTTOPLEFT as i64);
const_assert_eq!(NativeHitCode::TopRight as i64, HTTOPRIGHT as i64);
const_assert_eq!(NativeHitCode::Bottom as i64, HTBOTTOM as i64);
const_assert_eq!(NativeHitCode::BottomLeft as i64, HTBOTTOMLEFT as i64);
const_assert_eq!(NativeHitCode::BottomRight as i64, HTBOTTOMRIGHT as i64);

/// Subclass identifier ("HCHR").
const SUBCLASS_ID: usize = 0x4843_4852;

fn get_hwnd(window: &Window) -> ChromeResult<HWND> {
    let handle = window
        .window_handle()
        .map_err(|e| ChromeError::HandleAccess(e.to_string()))?;

    match handle.as_raw() {
        RawWindowHandle::Win32(handle) => Ok(HWND(handle.hwnd.get() as *mut c_void)),
        _ => Err(ChromeError::HandleAccess(
            "expected Win32 window handle".to_string(),
        )),
    }
}

/// [`WindowHost`] on top of a winit window and its Win32 handle.
///
/// Size limits and fullscreen state go through winit so the toolkit stays
/// the single owner of them; everything else talks to the HWND.
#[derive(Debug)]
pub struct Win32Host {
    window: Arc<Window>,
    // Stored as an integer so the host is Send + Sync; only used on the UI thread.
    hwnd: isize,
}

impl Win32Host {
    /// Create a host for a winit window.
    pub fn from_window(window: Arc<Window>) -> ChromeResult<Self> {
        let hwnd = get_hwnd(&window)?;
        Ok(Self {
            window,
            hwnd: hwnd.0 as isize,
        })
    }

    fn hwnd(&self) -> HWND {
        HWND(self.hwnd as *mut c_void)
    }
}

/// `None` for the "no limit" sentinel, else the size clamped to zero.
fn size_limit(size: Size, unbounded: Size) -> Option<PhysicalSize<u32>> {
    (size != unbounded).then(|| {
        PhysicalSize::new(size.width.max(0) as u32, size.height.max(0) as u32)
    })
}

impl WindowHost for Win32Host {
    fn window_rect(&self) -> Rect {
        let mut rect = RECT::default();
        match unsafe { GetWindowRect(self.hwnd(), &mut rect) } {
            Ok(()) => Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom),
            Err(err) => {
                tracing::warn!(target: targets::PLATFORM, %err, "GetWindowRect failed");
                Rect::default()
            }
        }
    }

    fn state(&self) -> WindowState {
        if self.window.fullscreen().is_some() {
            return WindowState::Fullscreen;
        }
        unsafe {
            if IsIconic(self.hwnd()).as_bool() {
                WindowState::Minimized
            } else if IsZoomed(self.hwnd()).as_bool() {
                WindowState::Maximized
            } else {
                WindowState::Normal
            }
        }
    }

    fn minimize(&self) {
        let _ = unsafe { ShowWindow(self.hwnd(), SW_MINIMIZE) };
    }

    fn maximize(&self) {
        let _ = unsafe { ShowWindow(self.hwnd(), SW_MAXIMIZE) };
    }

    fn restore(&self) {
        let _ = unsafe { ShowWindow(self.hwnd(), SW_RESTORE) };
    }

    fn set_minimum_size(&self, size: Size) {
        self.window.set_min_inner_size(size_limit(size, Size::ZERO));
    }

    fn set_maximum_size(&self, size: Size) {
        self.window.set_max_inner_size(size_limit(size, Size::MAX));
    }

    fn apply_frameless_style(&self) {
        let frameless = (WS_THICKFRAME | WS_CAPTION | WS_MINIMIZEBOX | WS_MAXIMIZEBOX).0 as i32;
        let kept = (WS_VISIBLE | WS_CLIPCHILDREN | WS_CLIPSIBLINGS).0 as i32;
        unsafe {
            let current = GetWindowLongW(self.hwnd(), GWL_STYLE);
            SetWindowLongW(self.hwnd(), GWL_STYLE, (current & kept) | frameless);
        }
    }

    fn nearest_work_area(&self) -> Option<Rect> {
        unsafe {
            let monitor = MonitorFromWindow(self.hwnd(), MONITOR_DEFAULTTONEAREST);
            if monitor.0.is_null() {
                return None;
            }
            let mut info = MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFO>() as u32,
                ..Default::default()
            };
            if !GetMonitorInfoW(monitor, &mut info).as_bool() {
                tracing::warn!(target: targets::PLATFORM, "GetMonitorInfoW failed");
                return None;
            }
            let work = info.rcWork;
            Some(Rect::from_edges(work.left, work.top, work.right, work.bottom))
        }
    }

    fn quit_application(&self) {
        unsafe { PostQuitMessage(0) };
    }
}

/// Win32 strategy: subclasses the window procedure so the chrome sees raw
/// messages before winit does.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Chrome;

impl PlatformChrome for Win32Chrome {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn create_host(&self, window: Arc<Window>) -> ChromeResult<Arc<dyn WindowHost>> {
        Ok(Arc::new(Win32Host::from_window(window)?))
    }

    fn install(&self, window: &Window, chrome: &FramelessWindow) -> ChromeResult<()> {
        let hwnd = get_hwnd(window)?;
        let ref_data = Box::into_raw(Box::new(chrome.adapter())) as usize;

        unsafe {
            let mut previous = 0usize;
            let replaced = GetWindowSubclass(
                hwnd,
                Some(chrome_subclass_proc),
                SUBCLASS_ID,
                Some(&mut previous as *mut usize),
            )
            .as_bool();

            if !SetWindowSubclass(hwnd, Some(chrome_subclass_proc), SUBCLASS_ID, ref_data).as_bool() {
                drop(Box::from_raw(ref_data as *mut NativeMessageAdapter));
                return Err(ChromeError::Platform("SetWindowSubclass failed".to_string()));
            }
            if replaced && previous != 0 {
                drop(Box::from_raw(previous as *mut NativeMessageAdapter));
            }
        }

        tracing::debug!(target: targets::PLATFORM, "win32 chrome installed");
        Ok(())
    }
}

/// Subclass procedure. `ref_data` is a leaked `Box<NativeMessageAdapter>`
/// owned by the subclass and released on `WM_NCDESTROY`.
unsafe extern "system" fn chrome_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _subclass_id: usize,
    ref_data: usize,
) -> LRESULT {
    if msg == WM_NCDESTROY {
        unsafe {
            let _ = RemoveWindowSubclass(hwnd, Some(chrome_subclass_proc), SUBCLASS_ID);
            drop(Box::from_raw(ref_data as *mut NativeMessageAdapter));
            return DefSubclassProc(hwnd, msg, wparam, lparam);
        }
    }

    let adapter = unsafe { &*(ref_data as *const NativeMessageAdapter) };

    if msg == WM_SIZE
        && let Some(state) = state_from_size(wparam)
    {
        adapter.window_state_changed(state);
    }

    if msg == WM_GETMINMAXINFO && lparam.0 != 0 {
        // winit writes its min/max inner size into the track sizes first.
        let toolkit = unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) };
        let raw = unsafe { &mut *(lparam.0 as *mut MINMAXINFO) };
        let mut info = min_max_from_raw(raw);
        return match adapter.handle(&mut NativeMessage::GetMinMaxInfo(&mut info)) {
            MessageOutcome::Handled(result) => {
                write_min_max(&info, raw);
                LRESULT(result)
            }
            MessageOutcome::Declined => toolkit,
        };
    }

    match adapter.handle(&mut decode_message(msg, wparam, lparam)) {
        MessageOutcome::Handled(result) => LRESULT(result),
        MessageOutcome::Declined => unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) },
    }
}

fn decode_message(msg: u32, wparam: WPARAM, lparam: LPARAM) -> NativeMessage<'static> {
    match msg {
        WM_CLOSE => NativeMessage::Close,
        WM_NCCALCSIZE => NativeMessage::NcCalcSize,
        WM_SHOWWINDOW => NativeMessage::ShowWindow {
            visible: wparam.0 != 0,
        },
        WM_NCHITTEST => NativeMessage::NcHitTest {
            screen: point_from_lparam(lparam),
        },
        other => NativeMessage::Other(other),
    }
}

/// Signed screen coordinates packed into the low and high words.
fn point_from_lparam(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as i16 as i32;
    Point::new(x, y)
}

fn state_from_size(wparam: WPARAM) -> Option<WindowState> {
    match wparam.0 as u32 {
        SIZE_RESTORED => Some(WindowState::Normal),
        SIZE_MINIMIZED => Some(WindowState::Minimized),
        SIZE_MAXIMIZED => Some(WindowState::Maximized),
        _ => None,
    }
}

fn min_max_from_raw(raw: &MINMAXINFO) -> MinMaxInfo {
    MinMaxInfo {
        max_position: Point::new(raw.ptMaxPosition.x, raw.ptMaxPosition.y),
        max_size: Size::new(raw.ptMaxSize.x, raw.ptMaxSize.y),
        min_track_size: Size::new(raw.ptMinTrackSize.x, raw.ptMinTrackSize.y),
        max_track_size: Size::new(raw.ptMaxTrackSize.x, raw.ptMaxTrackSize.y),
    }
}

fn write_min_max(info: &MinMaxInfo, raw: &mut MINMAXINFO) {
    raw.ptMaxPosition.x = info.max_position.x;
    raw.ptMaxPosition.y = info.max_position.y;
    raw.ptMaxSize.x = info.max_size.width;
    raw.ptMaxSize.y = info.max_size.height;
    raw.ptMinTrackSize.x = info.min_track_size.width;
    raw.ptMinTrackSize.y = info.min_track_size.height;
    raw.ptMaxTrackSize.x = info.max_track_size.width;
    raw.ptMaxTrackSize.y = info.max_track_size.height;
}
