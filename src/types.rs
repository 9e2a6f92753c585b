//! Core value types shared by the viewer components.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// One-based page number within the source document.
pub type DocumentPage = u32;

/// Zero-based index of a spread in the flip-book's page list.
/// Index 0 is the cover, shown on its own.
pub type SpreadIndex = u32;

/// A pointer position or pixel offset in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
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

/// Width and height of a page, either in PDF points or display pixels
/// depending on who produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height divided by width. Degenerate sizes report 1.0.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.height / self.width
        } else {
            1.0
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        let (width, height) = crate::constants::DEFAULT_PAGE_SIZE;
        Self { width, height }
    }
}
