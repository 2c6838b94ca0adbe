//! Integer geometry used to describe emulated screens, plus the two float helpers
//! front-ends need when scaling them onto a window.

use std::cmp::{max, min};
use std::fmt;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Add)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

/// IntRect equality holds when both origin and size are equal.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct IntRect {
    pub origin: IntPoint,
    pub size: IntSize,
}

impl IntPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl IntSize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Size is empty once any of it's dimensions is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl IntRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: IntPoint::new(x, y),
            size: IntSize::new(width, height),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    // size may be negative so min/max is taken from both edges.
    // Far edge saturates at i32 bounds.

    pub fn min_x(&self) -> i32 {
        min(self.origin.x, self.origin.x.saturating_add(self.size.width))
    }

    pub fn min_y(&self) -> i32 {
        min(self.origin.y, self.origin.y.saturating_add(self.size.height))
    }

    pub fn max_x(&self) -> i32 {
        max(self.origin.x, self.origin.x.saturating_add(self.size.width))
    }

    pub fn max_y(&self) -> i32 {
        max(self.origin.y, self.origin.y.saturating_add(self.size.height))
    }
}

impl fmt::Display for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.x, self.y)
    }
}

impl fmt::Display for IntSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.width, self.height)
    }
}

impl fmt::Display for IntRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.origin, self.size)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Add)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<IntSize> for Size {
    fn from(size: IntSize) -> Self {
        Size::new(f64::from(size.width), f64::from(size.height))
    }
}
