//! HSV color bands and the priority-ordered range table.
//!
//! Hue uses the OpenCV convention of 0..=180 (half degrees), saturation and
//! value are 0..=255. Red wraps around the hue origin, so the reference table
//! carries two red bands; both sit before green, which encodes the real-world
//! priority that a lit red signal must never be reported as green.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::state::LightState;

/// Maximum valid hue component (OpenCV half-degree scale).
pub const HUE_MAX: u8 = 180;

/// One named, inclusive HSV range mapping to a light state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBand {
    pub name: String,
    pub state: LightState,
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorBand {
    /// Create a band, validating the bounds.
    ///
    /// Fails when any lower component exceeds its upper component, when a hue
    /// bound is out of range, or when `state` is not a lit color.
    pub fn new(name: &str, state: LightState, lower: [u8; 3], upper: [u8; 3]) -> Result<Self> {
        ensure!(
            state.is_lit(),
            "band '{}' must map to a lit color, not {}",
            name,
            state
        );
        ensure!(
            lower[0] <= HUE_MAX && upper[0] <= HUE_MAX,
            "band '{}' hue bounds must be <= {}",
            name,
            HUE_MAX
        );
        for i in 0..3 {
            ensure!(
                lower[i] <= upper[i],
                "band '{}' has lower bound {} above upper bound {} at component {}",
                name,
                lower[i],
                upper[i],
                i
            );
        }

        Ok(Self {
            name: name.to_string(),
            state,
            lower,
            upper,
        })
    }

    /// Inclusive membership test for a single HSV pixel.
    pub fn contains(&self, h: u8, s: u8, v: u8) -> bool {
        h >= self.lower[0]
            && h <= self.upper[0]
            && s >= self.lower[1]
            && s <= self.upper[1]
            && v >= self.lower[2]
            && v <= self.upper[2]
    }
}

/// Ordered sequence of color bands; position is classification priority.
///
/// Immutable after construction. Earlier bands are tested first and win ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRangeTable {
    bands: Vec<ColorBand>,
}

impl ColorRangeTable {
    /// Build a table from already-validated bands, in priority order.
    pub fn new(bands: Vec<ColorBand>) -> Result<Self> {
        ensure!(!bands.is_empty(), "color range table must not be empty");
        Ok(Self { bands })
    }

    /// The reference traffic light table: two red bands (hue wraps around the
    /// origin) followed by one green band.
    pub fn traffic_light() -> Result<Self> {
        Self::new(vec![
            ColorBand::new("red-low", LightState::Red, [0, 150, 100], [10, 255, 255])?,
            ColorBand::new("red-high", LightState::Red, [170, 150, 100], [180, 255, 255])?,
            ColorBand::new("green", LightState::Green, [40, 50, 50], [80, 255, 255])?,
        ])
    }

    /// Bands in priority order.
    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_bounds_validated() {
        assert!(ColorBand::new("ok", LightState::Red, [0, 150, 100], [10, 255, 255]).is_ok());
        // lower above upper
        assert!(ColorBand::new("bad", LightState::Red, [20, 0, 0], [10, 255, 255]).is_err());
        // hue out of range
        assert!(ColorBand::new("bad", LightState::Green, [190, 0, 0], [200, 255, 255]).is_err());
        // unlit state
        assert!(ColorBand::new("bad", LightState::Not, [0, 0, 0], [10, 255, 255]).is_err());
    }

    #[test]
    fn test_membership_is_inclusive() {
        let band = ColorBand::new("red-low", LightState::Red, [0, 150, 100], [10, 255, 255])
            .unwrap();
        assert!(band.contains(0, 150, 100));
        assert!(band.contains(10, 255, 255));
        assert!(band.contains(5, 200, 200));
        assert!(!band.contains(11, 200, 200));
        assert!(!band.contains(5, 149, 200));
    }

    #[test]
    fn test_reference_table_order() {
        let table = ColorRangeTable::traffic_light().unwrap();
        let states: Vec<_> = table.bands().iter().map(|b| b.state).collect();
        assert_eq!(
            states,
            vec![LightState::Red, LightState::Red, LightState::Green]
        );
        // Every red band precedes the green band.
        let first_green = states.iter().position(|s| *s == LightState::Green).unwrap();
        assert!(
            states[..first_green]
                .iter()
                .all(|s| *s == LightState::Red)
        );
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(ColorRangeTable::new(Vec::new()).is_err());
    }
}
