//! Zone classifications produced by chrome hit-testing.

use cursor_icon::CursorIcon;

/// Re-export of winit's ResizeDirection for convenience.
pub use winit::window::ResizeDirection;

/// The chrome zone under a point of a frameless window.
///
/// Border zones resize the window from the named edge or corner; `Title`
/// moves the window; `None` leaves the point to normal widget handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitZone {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    /// The draggable title area.
    Title,
    /// Client area.
    None,
}

impl HitZone {
    /// Check if this zone starts a resize.
    pub fn is_resize(&self) -> bool {
        self.resize_direction().is_some()
    }

    /// Check if this zone drags the window.
    pub fn is_title(&self) -> bool {
        matches!(self, Self::Title)
    }

    /// The winit resize direction for border zones.
    ///
    /// Toolkits that start moves and resizes through
    /// `Window::drag_resize_window` can feed this straight through.
    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self {
            Self::TopLeft => Some(ResizeDirection::NorthWest),
            Self::TopRight => Some(ResizeDirection::NorthEast),
            Self::BottomLeft => Some(ResizeDirection::SouthWest),
            Self::BottomRight => Some(ResizeDirection::SouthEast),
            Self::Top => Some(ResizeDirection::North),
            Self::Bottom => Some(ResizeDirection::South),
            Self::Left => Some(ResizeDirection::West),
            Self::Right => Some(ResizeDirection::East),
            Self::Title | Self::None => None,
        }
    }

    /// The cursor that should be shown while hovering this zone.
    pub fn cursor(&self) -> CursorIcon {
        match self {
            Self::Top | Self::Bottom => CursorIcon::NsResize,
            Self::Left | Self::Right => CursorIcon::EwResize,
            Self::TopLeft | Self::BottomRight => CursorIcon::NwseResize,
            Self::TopRight | Self::BottomLeft => CursorIcon::NeswResize,
            Self::Title | Self::None => CursorIcon::Default,
        }
    }

    /// The native hit-test code reported to the window manager.
    pub fn native_code(&self) -> NativeHitCode {
        match self {
            Self::TopLeft => NativeHitCode::TopLeft,
            Self::TopRight => NativeHitCode::TopRight,
            Self::BottomLeft => NativeHitCode::BottomLeft,
            Self::BottomRight => NativeHitCode::BottomRight,
            Self::Top => NativeHitCode::Top,
            Self::Bottom => NativeHitCode::Bottom,
            Self::Left => NativeHitCode::Left,
            Self::Right => NativeHitCode::Right,
            Self::Title => NativeHitCode::Caption,
            Self::None => NativeHitCode::Client,
        }
    }
}

/// Hit-test result codes understood by the native window manager.
///
/// The discriminants are the Win32 `HT*` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum NativeHitCode {
    Client = 1,
    Caption = 2,
    Left = 10,
    Right = 11,
    Top = 12,
    TopLeft = 13,
    TopRight = 14,
    Bottom = 15,
    BottomLeft = 16,
    BottomRight = 17,
}

impl NativeHitCode {
    /// The code as a message result value.
    pub const fn as_result(self) -> isize {
        self as i32 as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_predicates() {
        assert!(HitZone::TopLeft.is_resize());
        assert!(HitZone::Right.is_resize());
        assert!(!HitZone::Title.is_resize());
        assert!(!HitZone::None.is_resize());

        assert!(HitZone::Title.is_title());
        assert!(!HitZone::Top.is_title());
    }

    #[test]
    fn test_native_codes() {
        assert_eq!(HitZone::None.native_code().as_result(), 1);
        assert_eq!(HitZone::Title.native_code().as_result(), 2);
        assert_eq!(HitZone::Left.native_code().as_result(), 10);
        assert_eq!(HitZone::Right.native_code().as_result(), 11);
        assert_eq!(HitZone::Top.native_code().as_result(), 12);
        assert_eq!(HitZone::TopLeft.native_code().as_result(), 13);
        assert_eq!(HitZone::TopRight.native_code().as_result(), 14);
        assert_eq!(HitZone::Bottom.native_code().as_result(), 15);
        assert_eq!(HitZone::BottomLeft.native_code().as_result(), 16);
        assert_eq!(HitZone::BottomRight.native_code().as_result(), 17);
    }

    #[test]
    fn test_cursor_for_zone() {
        assert_eq!(HitZone::Top.cursor(), CursorIcon::NsResize);
        assert_eq!(HitZone::Left.cursor(), CursorIcon::EwResize);
        assert_eq!(HitZone::BottomRight.cursor(), CursorIcon::NwseResize);
        assert_eq!(HitZone::TopRight.cursor(), CursorIcon::NeswResize);
        assert_eq!(HitZone::Title.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_resize_direction() {
        assert_eq!(
            HitZone::BottomLeft.resize_direction(),
            Some(ResizeDirection::SouthWest)
        );
        assert_eq!(HitZone::Top.resize_direction(), Some(ResizeDirection::North));
        assert_eq!(HitZone::Title.resize_direction(), None);
    }
}
