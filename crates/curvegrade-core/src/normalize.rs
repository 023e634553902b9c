//! Conversion between raw canvas coordinates and the normalized unit square.
//!
//! Raw space has Y growing downward; normalized space follows the plotting
//! convention with Y growing upward, so the transform flips the vertical axis.

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::geometry::Point;

/// The plotting rectangle inside the raw drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    /// Left edge in raw units.
    pub origin_x: f64,
    /// Top edge in raw units.
    pub origin_y: f64,
    /// Width in raw units.
    pub width: f64,
    /// Height in raw units.
    pub height: f64,
}

impl PlotRect {
    /// Build a plot rectangle, rejecting empty or non-finite sizes.
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Result<Self, GradeError> {
        let rect = Self {
            origin_x,
            origin_y,
            width,
            height,
        };
        rect.validate()?;
        Ok(rect)
    }

    /// Check that the rectangle can be used as a normalization frame.
    pub fn validate(&self) -> Result<(), GradeError> {
        let finite = [self.origin_x, self.origin_y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(GradeError::InvalidPlot {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Map a raw point into the unit square, clamping anything outside.
    pub fn to_normalized(&self, raw: Point) -> Point {
        Point {
            x: ((raw.x - self.origin_x) / self.width).clamp(0.0, 1.0),
            y: ((self.origin_y + self.height - raw.y) / self.height).clamp(0.0, 1.0),
        }
    }

    /// Map a normalized point back into raw space.
    pub fn to_raw(&self, norm: Point) -> Point {
        Point {
            x: self.origin_x + norm.x * self.width,
            y: self.origin_y + (1.0 - norm.y) * self.height,
        }
    }

    /// Whether a raw point lies inside the rectangle (edges included).
    pub fn contains(&self, raw: Point) -> bool {
        raw.x >= self.origin_x
            && raw.x <= self.origin_x + self.width
            && raw.y >= self.origin_y
            && raw.y <= self.origin_y + self.height
    }
}
