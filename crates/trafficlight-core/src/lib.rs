//! Domain types for traffic light classification.
//!
//! Pure data model with no OpenCV dependency: the light state labels and the
//! ordered HSV color band table the detector scans.

pub mod bands;
pub mod state;

pub use bands::{ColorBand, ColorRangeTable};
pub use state::LightState;
