//! Shared test fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use horizon_chrome::geometry::{Rect, Size};
use horizon_chrome::window::{WindowHost, WindowState};
use parking_lot::Mutex;

/// A host operation recorded by [`MockHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Minimize,
    Maximize,
    Restore,
    SetMinimumSize(Size),
    SetMaximumSize(Size),
    ApplyStyle,
    Quit,
}

/// A window host that records every call instead of touching a real window.
pub struct MockHost {
    rect: Mutex<Rect>,
    state: Mutex<WindowState>,
    work_area: Mutex<Option<Rect>>,
    calls: Mutex<Vec<HostCall>>,
}

impl MockHost {
    pub fn new(rect: Rect) -> Arc<Self> {
        Arc::new(Self {
            rect: Mutex::new(rect),
            state: Mutex::new(WindowState::Normal),
            work_area: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_state(&self, state: WindowState) {
        *self.state.lock() = state;
    }

    pub fn set_work_area(&self, work_area: Option<Rect>) {
        *self.work_area.lock() = work_area;
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, call: HostCall) -> usize {
        self.calls.lock().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }
}

impl WindowHost for MockHost {
    fn window_rect(&self) -> Rect {
        *self.rect.lock()
    }

    fn state(&self) -> WindowState {
        *self.state.lock()
    }

    fn minimize(&self) {
        self.record(HostCall::Minimize);
        self.set_state(WindowState::Minimized);
    }

    fn maximize(&self) {
        self.record(HostCall::Maximize);
        self.set_state(WindowState::Maximized);
    }

    fn restore(&self) {
        self.record(HostCall::Restore);
        self.set_state(WindowState::Normal);
    }

    fn set_minimum_size(&self, size: Size) {
        self.record(HostCall::SetMinimumSize(size));
    }

    fn set_maximum_size(&self, size: Size) {
        self.record(HostCall::SetMaximumSize(size));
    }

    fn apply_frameless_style(&self) {
        self.record(HostCall::ApplyStyle);
    }

    fn nearest_work_area(&self) -> Option<Rect> {
        *self.work_area.lock()
    }

    fn quit_application(&self) {
        self.record(HostCall::Quit);
    }
}
