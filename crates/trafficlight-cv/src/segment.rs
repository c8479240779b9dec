//! Color band segmentation with morphological denoise.

use anyhow::ensure;
use opencv::{
    core::{self, Mat, Point, Scalar, Size},
    imgproc,
    prelude::*,
};
use trafficlight_core::ColorBand;

use crate::Result;

fn bound_scalar(bound: [u8; 3]) -> Scalar {
    Scalar::from((bound[0] as f64, bound[1] as f64, bound[2] as f64))
}

/// Produces binary membership masks for one color band at a time.
///
/// Holds a prebuilt elliptical structuring element so the kernel is not
/// reallocated per frame.
pub struct Segmenter {
    kernel: Mat,
}

impl Segmenter {
    /// Create a segmenter with a square elliptical kernel of the given size.
    pub fn new(kernel_size: i32) -> Result<Self> {
        ensure!(
            kernel_size >= 1,
            "structuring element size must be positive, got {}",
            kernel_size
        );

        let kernel = imgproc::get_structuring_element(
            imgproc::MORPH_ELLIPSE,
            Size::new(kernel_size, kernel_size),
            Point::new(-1, -1),
        )?;

        Ok(Self { kernel })
    }

    /// Threshold an HSV frame against one band and denoise the result.
    ///
    /// A pixel is set iff every HSV component lies within the band's inclusive
    /// bounds. One erosion then one dilation with the elliptical kernel drops
    /// isolated speckle before it can form spurious contours, then restores
    /// the boundary of genuine regions.
    pub fn segment(&self, hsv: &Mat, band: &ColorBand) -> Result<Mat> {
        let mut mask = Mat::default();
        core::in_range(
            hsv,
            &bound_scalar(band.lower),
            &bound_scalar(band.upper),
            &mut mask,
        )?;

        let border = imgproc::morphology_default_border_value()?;

        let mut eroded = Mat::default();
        imgproc::erode(
            &mask,
            &mut eroded,
            &self.kernel,
            Point::new(-1, -1),
            1,
            core::BORDER_CONSTANT,
            border,
        )?;

        let mut denoised = Mat::default();
        imgproc::dilate(
            &eroded,
            &mut denoised,
            &self.kernel,
            Point::new(-1, -1),
            1,
            core::BORDER_CONSTANT,
            border,
        )?;

        Ok(denoised)
    }
}
