//! Detection configuration

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;
use crate::shape::CircleCriteria;

/// Main detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Side length of the square elliptical structuring element used by the
    /// denoise pass. Resolution dependent, like the circle criteria.
    pub kernel_size: i32,
    pub circle: CircleCriteria,
    pub annotation: AnnotationConfig,
}

/// Annotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationConfig {
    pub draw_box: bool,
    /// Box color as RGB.
    pub box_color: (u8, u8, u8),
    pub thickness: i32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            kernel_size: 3,
            circle: CircleCriteria::default(),
            annotation: AnnotationConfig {
                draw_box: true,
                box_color: (255, 0, 0),
                thickness: 2,
            },
        }
    }
}

impl DetectionConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        serde_json::from_str(&text).context("Failed to parse detection config")
    }
}
