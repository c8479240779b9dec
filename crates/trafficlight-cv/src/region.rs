//! Axis-aligned detection region.

use opencv::core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Bounding rectangle of a matched contour, serializable for result export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from OpenCV Rect
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }

    /// Convert to OpenCV Rect
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        (self.width * self.height) as f64
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}
