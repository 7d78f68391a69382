// external crates
use serde::{Deserialize, Serialize};

/// A gamma ray depopulating a level
///
/// Transitions belong to the level they depopulate. The final level is not
/// stored; it is resolved by searching lower-lying levels for one whose
/// energy matches the parent energy minus the transition energy within
/// [FUDGE_FACTOR](crate::FUDGE_FACTOR).
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Transition {
    /// Gamma-ray energy (keV)
    pub energy: f64,
    /// Relative intensity
    pub intensity: f64,
}
