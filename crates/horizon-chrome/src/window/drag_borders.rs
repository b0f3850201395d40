//! The mask of window edges and corners that may start a resize.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

use super::HitZone;

/// Bit flags selecting which border zones start a resize.
///
/// A corner is enabled either by its own bit or by both adjacent edge bits,
/// so `TOP | LEFT` alone is enough to resize from the top-left corner.
///
/// # Example
///
/// ```
/// use horizon_chrome::window::{DragBorders, HitZone};
///
/// let borders = DragBorders::TOP | DragBorders::LEFT;
/// assert!(borders.enables(HitZone::TopLeft));
/// assert!(!borders.enables(HitZone::Right));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DragBorders(u8);

impl DragBorders {
    /// No resize zones.
    pub const NONE: DragBorders = DragBorders(0);
    /// Left edge.
    pub const LEFT: DragBorders = DragBorders(0x01);
    /// Right edge.
    pub const RIGHT: DragBorders = DragBorders(0x02);
    /// Top edge.
    pub const TOP: DragBorders = DragBorders(0x04);
    /// Bottom edge.
    pub const BOTTOM: DragBorders = DragBorders(0x08);
    /// Top-left corner.
    pub const TOP_LEFT: DragBorders = DragBorders(0x10);
    /// Top-right corner.
    pub const TOP_RIGHT: DragBorders = DragBorders(0x20);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: DragBorders = DragBorders(0x40);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: DragBorders = DragBorders(0x80);
    /// The four edges.
    pub const EDGES: DragBorders = DragBorders(0x0F);
    /// The four corners.
    pub const CORNERS: DragBorders = DragBorders(0xF0);
    /// Every zone.
    pub const ALL: DragBorders = DragBorders(0xFF);

    /// Create a mask from raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Get the raw bits.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if every flag in `other` is set.
    pub const fn contains(&self, other: DragBorders) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Set or clear the given flags.
    pub fn set(&mut self, flags: DragBorders, enabled: bool) {
        if enabled {
            self.0 |= flags.0;
        } else {
            self.0 &= !flags.0;
        }
    }

    /// Check whether a resize from `zone` is allowed by this mask.
    ///
    /// Non-border zones are never enabled.
    pub fn enables(&self, zone: HitZone) -> bool {
        match zone {
            HitZone::TopLeft => {
                self.contains(Self::TOP_LEFT) || self.contains(Self::TOP | Self::LEFT)
            }
            HitZone::TopRight => {
                self.contains(Self::TOP_RIGHT) || self.contains(Self::TOP | Self::RIGHT)
            }
            HitZone::BottomLeft => {
                self.contains(Self::BOTTOM_LEFT) || self.contains(Self::BOTTOM | Self::LEFT)
            }
            HitZone::BottomRight => {
                self.contains(Self::BOTTOM_RIGHT) || self.contains(Self::BOTTOM | Self::RIGHT)
            }
            HitZone::Top => self.contains(Self::TOP),
            HitZone::Bottom => self.contains(Self::BOTTOM),
            HitZone::Left => self.contains(Self::LEFT),
            HitZone::Right => self.contains(Self::RIGHT),
            HitZone::Title | HitZone::None => false,
        }
    }
}

impl Default for DragBorders {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Debug for DragBorders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DragBorders({:#04x})", self.0)
    }
}

impl BitOr for DragBorders {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DragBorders {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DragBorders {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Not for DragBorders {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}
