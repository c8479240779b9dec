//! Priority-ordered traffic light classification.

use anyhow::Context;
use opencv::{
    core::Scalar,
    imgproc::{self, LINE_8},
    prelude::*,
};
use serde::Serialize;
use trafficlight_core::{ColorRangeTable, LightState};

use crate::Result;
use crate::contour::extract_contours;
use crate::region::Region;
use crate::segment::Segmenter;

use super::config::DetectionConfig;

/// Outcome of classifying one frame.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectionResult {
    pub state: LightState,
    /// Bounding region of the matched contour, absent when `state` is `Not`.
    pub region: Option<Region>,
}

impl DetectionResult {
    /// Export the result in JSON format.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize detection result")
    }
}

/// Scans an HSV frame against an ordered color band table and classifies the
/// first circle-like blob it finds.
pub struct TrafficLightDetector {
    table: ColorRangeTable,
    segmenter: Segmenter,
    config: DetectionConfig,
}

impl TrafficLightDetector {
    /// Create a detector over a validated band table.
    pub fn new(table: ColorRangeTable, config: DetectionConfig) -> Result<Self> {
        let segmenter = Segmenter::new(config.kernel_size)?;
        Ok(Self {
            table,
            segmenter,
            config,
        })
    }

    /// Classify one HSV frame.
    ///
    /// Bands are tested in table order; within a band, contours in extraction
    /// order. The first contour passing the circle test wins: its bounding
    /// rectangle is drawn onto `output` and the scan stops immediately, so a
    /// lit red signal is never reported as green. When nothing matches the
    /// result is `Not` and `output` is left untouched.
    pub fn detect(&self, hsv: &Mat, output: &mut Mat) -> Result<DetectionResult> {
        for band in self.table.bands() {
            let mask = self.segmenter.segment(hsv, band)?;
            let contours = extract_contours(&mask)?;

            for contour in contours.iter() {
                if self.config.circle.is_circle_like(&contour)? {
                    let rect = imgproc::bounding_rect(&contour)?;

                    if self.config.annotation.draw_box {
                        imgproc::rectangle(
                            output,
                            rect,
                            self.box_color_bgr(),
                            self.config.annotation.thickness,
                            LINE_8,
                            0,
                        )?;
                    }

                    return Ok(DetectionResult {
                        state: band.state,
                        region: Some(Region::from_rect(rect)),
                    });
                }
            }
        }

        Ok(DetectionResult {
            state: LightState::Not,
            region: None,
        })
    }

    fn box_color_bgr(&self) -> Scalar {
        let (r, g, b) = self.config.annotation.box_color;
        Scalar::new(b as f64, g as f64, r as f64, 255.0)
    }
}
