//! Window display states reported by the host.

/// How a top-level window is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
    /// Restored to its own size and position.
    #[default]
    Normal,
    Minimized,
    /// Filling the monitor's work area.
    Maximized,
    /// Covering a whole monitor, as set through the toolkit.
    Fullscreen,
}

impl WindowState {
    pub const fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized)
    }

    /// Checked state for the maximize/restore toggle, or `None` when this
    /// state leaves the toggle as it is.
    pub const fn toggle_checked(self) -> Option<bool> {
        match self {
            Self::Maximized => Some(true),
            Self::Normal => Some(false),
            Self::Minimized | Self::Fullscreen => None,
        }
    }
}
