//! High-level detection module

pub mod config;
pub mod detector;

pub use config::{AnnotationConfig, DetectionConfig};
pub use detector::{DetectionResult, TrafficLightDetector};
