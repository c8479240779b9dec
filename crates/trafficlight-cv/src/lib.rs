//! Traffic Light Detection Library
//!
//! OpenCV pipeline for classifying the lit color of a traffic-light-like
//! signal in a single frame: HSV thresholding, morphological denoise, contour
//! extraction, circularity test, priority-ordered classification.

pub mod contour;
pub mod detection;
pub mod region;
pub mod segment;
pub mod shape;
pub mod source;

// Re-export commonly used types
pub use detection::{DetectionConfig, DetectionResult, TrafficLightDetector};
pub use region::Region;
pub use segment::Segmenter;
pub use shape::CircleCriteria;
pub use source::{FrameSource, SourceError};

// Error handling
pub type Result<T> = anyhow::Result<T>;
