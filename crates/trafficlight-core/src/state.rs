//! Classification labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-frame classification outcome of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightState {
    Red,
    Green,
    /// No circular blob matched any configured color band.
    Not,
}

impl LightState {
    /// Uppercase label used for the on-frame overlay.
    pub fn as_str(&self) -> &'static str {
        match self {
            LightState::Red => "RED",
            LightState::Green => "GREEN",
            LightState::Not => "NOT",
        }
    }

    /// True for states that a color band may legitimately map to.
    pub fn is_lit(&self) -> bool {
        !matches!(self, LightState::Not)
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
