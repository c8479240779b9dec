//! Contour extraction from binary masks.

use opencv::{
    core::{Point, Vector},
    imgproc,
    prelude::*,
};

use crate::Result;

/// Extract the external boundary polygons of all foreground regions.
///
/// Only outermost silhouettes are reported; boundaries of holes inside a
/// region are discarded. Straight runs are compressed to their endpoints
/// (`CHAIN_APPROX_SIMPLE`), which leaves downstream area and perimeter
/// measurements intact. An all-zero mask yields an empty sequence.
pub fn extract_contours(mask: &Mat) -> Result<Vector<Vector<Point>>> {
    let mut contours = Vector::<Vector<Point>>::new();
    imgproc::find_contours(
        mask,
        &mut contours,
        imgproc::RETR_EXTERNAL,
        imgproc::CHAIN_APPROX_SIMPLE,
        Point::new(0, 0),
    )?;
    Ok(contours)
}
