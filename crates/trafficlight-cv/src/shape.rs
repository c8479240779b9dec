//! Circle-likeness test for contours.

use opencv::{
    core::{Point, Vector},
    imgproc,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::Result;

/// Circularity of a closed contour: `4π·area / perimeter²`.
///
/// A perfect circle scores 1; elongated or irregular shapes score lower.
/// A degenerate contour with zero perimeter scores 0.
pub fn circularity(contour: &Vector<Point>) -> Result<f64> {
    let perimeter = imgproc::arc_length(contour, true)?;
    if perimeter == 0.0 {
        return Ok(0.0);
    }
    let area = imgproc::contour_area(contour, false)?;
    Ok(4.0 * PI * area / (perimeter * perimeter))
}

/// Thresholds deciding whether a contour counts as a lit signal disc.
///
/// Both values depend on camera resolution and distance; the defaults match
/// the reference tuning and callers with other setups must rescale
/// `min_area` accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleCriteria {
    pub min_circularity: f64,
    /// Minimum enclosed area in pixels at native resolution.
    pub min_area: f64,
}

impl Default for CircleCriteria {
    fn default() -> Self {
        Self {
            min_circularity: 0.70,
            min_area: 100.0,
        }
    }
}

impl CircleCriteria {
    /// True iff the contour is circular enough and large enough.
    ///
    /// Zero-perimeter contours are never circle-like, which also guards the
    /// division inside the circularity metric.
    pub fn is_circle_like(&self, contour: &Vector<Point>) -> Result<bool> {
        let perimeter = imgproc::arc_length(contour, true)?;
        if perimeter == 0.0 {
            return Ok(false);
        }
        let area = imgproc::contour_area(contour, false)?;
        let circularity = 4.0 * PI * area / (perimeter * perimeter);
        Ok(circularity > self.min_circularity && area > self.min_area)
    }
}
