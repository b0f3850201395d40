//! Integer geometry used by hit-testing and native message handling.
//!
//! Native window messages carry integer pixel coordinates, so the chrome works
//! in `i32` throughout. [`Rect`] follows the toolkit convention where
//! [`Rect::right`] and [`Rect::bottom`] name the last pixel column/row *inside*
//! the rectangle, and [`Rect::contains`] is inclusive on all four edges.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Point = Point { x: 0, y: 0 };
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// The largest size a window may be given (2^24 - 1 in each direction).
    pub const MAX: Size = Size {
        width: 16_777_215,
        height: 16_777_215,
    };

    /// Check if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a rectangle from native edges where `right`/`bottom` are exclusive.
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Left edge.
    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Last pixel column inside the rectangle.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last pixel row inside the rectangle.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point lies within the rectangle, edges included.
    pub fn contains(&self, point: Point) -> bool {
        self.left() <= point.x
            && point.x <= self.right()
            && self.top() <= point.y
            && point.y <= self.bottom()
    }

    /// Translate a point from the rectangle's coordinate space into
    /// coordinates relative to its top-left corner.
    ///
    /// Saturates instead of overflowing for points far outside the rectangle.
    pub fn map_to_local(&self, point: Point) -> Point {
        Point::new(point.x.saturating_sub(self.x), point.y.saturating_sub(self.y))
    }
}
