// external crates
use serde::{Deserialize, Serialize};

// internal modules
use crate::cascade::Cascade;
use crate::level::Level;
use crate::nuclide::Nuclide;
use crate::transition::Transition;

/// Hard capacity for nuclide records, exceeding this is fatal
pub const MAX_NUCLIDES: usize = 4096;

/// Hard capacity for level records, further levels are silently dropped
pub const MAX_LEVELS: usize = 262_144;

/// Hard capacity for transition records, further gammas are silently dropped
pub const MAX_TRANSITIONS: usize = 524_288;

/// Most transitions accepted for any single level
pub const MAX_TRANSITIONS_PER_LEVEL: usize = 50;

/// Most spin-parity assignments accepted for any single level
pub const MAX_SPINS_PER_LEVEL: usize = 3;

/// Most cascades generated for any single nuclide
pub const MAX_CASCADES_PER_NUCLIDE: usize = 100;

/// Most level steps in a single cascade
pub const MAX_CASCADE_STEPS: usize = 20;

/// The complete chart-of-nuclides database
///
/// Four flat arrays with all cross-references held as base-index + count
/// pairs on the parent records. The builder appends in strict order, so a
/// nuclide's levels are contiguous, as are a level's transitions and a
/// nuclide's cascades.
///
/// Once built the database is read-only. All accessors take `&self` and the
/// structure is safe to share between concurrent readers without locking.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ChartDatabase {
    /// All nuclides, in order of appearance in the source files
    pub nuclides: Vec<Nuclide>,
    /// All levels, grouped contiguously by nuclide
    pub levels: Vec<Level>,
    /// All gamma transitions, grouped contiguously by level
    pub transitions: Vec<Transition>,
    /// All generated cascades, grouped contiguously by nuclide
    pub cascades: Vec<Cascade>,
}

impl ChartDatabase {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Find a nuclide by neutron and proton count
    pub fn find(&self, n: i32, z: i32) -> Option<&Nuclide> {
        self.nuclides
            .iter()
            .find(|nuclide| nuclide.n == n && nuclide.z == z)
    }

    /// The contiguous run of levels belonging to a nuclide
    pub fn levels(&self, nuclide: &Nuclide) -> &[Level] {
        &self.levels[nuclide.first_level..nuclide.first_level + nuclide.num_levels]
    }

    /// The contiguous run of transitions depopulating a level
    pub fn transitions(&self, level: &Level) -> &[Transition] {
        &self.transitions[level.first_transition..level.first_transition + level.num_transitions]
    }

    /// The contiguous run of cascades belonging to a nuclide
    pub fn cascades(&self, nuclide: &Nuclide) -> &[Cascade] {
        &self.cascades[nuclide.first_cascade..nuclide.first_cascade + nuclide.num_cascades]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_identity() {
        let mut database = ChartDatabase::new();
        database.nuclides.push(Nuclide {
            name: "60CO".to_string(),
            n: 33,
            z: 27,
            ..Default::default()
        });

        assert!(database.find(33, 27).is_some());
        assert!(database.find(27, 33).is_none());
    }
}
