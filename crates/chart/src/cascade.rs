//! Gamma cascade generation
//!
//! A post-processing pass over the assembled database that reconstructs
//! chains of successive gamma decays per nuclide. A level whose transition
//! lands on an already-seen lower level, within a small energy tolerance,
//! is taken to continue the same physical cascade. This is deliberately not
//! a full decay-scheme reconstruction.

// external crates
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

// internal modules
use crate::database::{ChartDatabase, MAX_CASCADES_PER_NUCLIDE, MAX_CASCADE_STEPS};

/// Absolute tolerance (keV) for level energy matching
///
/// Empirically tuned against the source evaluations. The chain topology the
/// viewer relies on depends on this exact value, so do not tighten it.
pub const FUDGE_FACTOR: f64 = 2.0;

/// An ordered chain of levels connected by successive gamma decays
///
/// The `levels` steps are level energies in decay-feeding order, always at
/// least two of them. `gammas` holds the per-step gamma energy, the
/// difference between consecutive level steps; step 0 has no predecessor
/// and carries a placeholder 0.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Cascade {
    /// Level energies (keV) along the chain
    pub levels: Vec<f64>,
    /// Per-step gamma energies (keV), index 0 is a placeholder 0
    pub gammas: Vec<f64>,
}

impl Cascade {
    /// Number of level steps in the chain
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Derive the per-step gamma energies from the level steps
    fn fill_gammas(&mut self) {
        let mut gammas = vec![0.0];
        gammas.extend(self.levels.iter().tuple_windows().map(|(a, b)| b - a));
        self.gammas = gammas;
    }
}

impl ChartDatabase {
    /// Generate the gamma cascades for every nuclide
    ///
    /// For each level in order of appearance and each of its transitions,
    /// the hypothetical final level energy is the level energy minus the
    /// transition energy. Every lower-lying level matching that energy
    /// within [FUDGE_FACTOR] feeds the chain bookkeeping: extend a cascade
    /// ending at the matched level, else branch off a cascade containing
    /// it, else start a new two-step cascade. Only the first applicable
    /// action fires for any single match.
    ///
    /// Runs once as the final stage of a database build. Calling it again
    /// on a finished database would duplicate every chain.
    pub fn generate_cascades(&mut self) {
        for index in 0..self.nuclides.len() {
            let first = self.nuclides[index].first_level;
            let count = self.nuclides[index].num_levels;
            let mut cascades: Vec<Cascade> = Vec::new();

            for j in 0..count {
                let parent = &self.levels[first + j];
                let parent_energy = parent.energy;

                for k in 0..parent.num_transitions {
                    let gamma = &self.transitions[parent.first_transition + k];
                    let trial_energy = parent_energy - gamma.energy;

                    // search the already-seen lower levels for the endpoint
                    for l in 0..j {
                        let final_energy = self.levels[first + l].energy;
                        if (final_energy - trial_energy).abs() < FUDGE_FACTOR {
                            chain_action(&mut cascades, final_energy, parent_energy);
                        }
                    }
                }
            }

            for cascade in &mut cascades {
                cascade.fill_gammas();
            }

            debug!(
                "{}: {} cascades",
                self.nuclides[index].name,
                cascades.len()
            );
            self.nuclides[index].first_cascade = self.cascades.len();
            self.nuclides[index].num_cascades = cascades.len();
            self.cascades.append(&mut cascades);
        }
    }
}

/// First applicable of extend, branch-copy, or new
fn chain_action(cascades: &mut Vec<Cascade>, final_energy: f64, parent_energy: f64) {
    // extend a cascade currently ending at the matched level
    if let Some(cascade) = cascades
        .iter_mut()
        .find(|c| c.levels.last() == Some(&final_energy) && c.levels.len() < MAX_CASCADE_STEPS)
    {
        cascade.levels.push(parent_energy);
        return;
    }

    // branch off a cascade containing the matched level mid-chain
    for i in 0..cascades.len() {
        if let Some(ind) = cascades[i].levels.iter().position(|e| *e == final_energy) {
            if cascades.len() >= MAX_CASCADES_PER_NUCLIDE || ind + 2 > MAX_CASCADE_STEPS {
                return;
            }
            let mut levels = cascades[i].levels[..=ind].to_vec();
            levels.push(parent_energy);
            cascades.push(Cascade {
                levels,
                gammas: Vec::new(),
            });
            return;
        }
    }

    // otherwise start a fresh two-step chain
    if cascades.len() < MAX_CASCADES_PER_NUCLIDE {
        cascades.push(Cascade {
            levels: vec![final_energy, parent_energy],
            gammas: Vec::new(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::nuclide::Nuclide;
    use crate::transition::Transition;

    /// One-nuclide database from (energy, gamma energies) level entries
    fn build(levels: &[(f64, &[f64])]) -> ChartDatabase {
        let mut database = ChartDatabase::new();
        let mut nuclide = Nuclide {
            name: "68SE".to_string(),
            n: 34,
            z: 34,
            ..Default::default()
        };

        for (energy, gammas) in levels {
            let first_transition = database.transitions.len();
            for gamma in gammas.iter() {
                database.transitions.push(Transition {
                    energy: *gamma,
                    intensity: 100.0,
                });
            }
            database.levels.push(Level {
                energy: *energy,
                first_transition,
                num_transitions: gammas.len(),
                ..Default::default()
            });
            nuclide.num_levels += 1;
        }

        database.nuclides.push(nuclide);
        database
    }

    #[test]
    fn new_then_extend() {
        // 500 decays to ground, 1200 decays to 500
        let mut database = build(&[(0.0, &[]), (500.0, &[500.0]), (1200.0, &[700.0])]);
        database.generate_cascades();

        assert_eq!(database.cascades.len(), 1);
        assert_eq!(database.cascades[0].levels, vec![0.0, 500.0, 1200.0]);
        assert_eq!(database.cascades[0].gammas, vec![0.0, 500.0, 700.0]);
        assert_eq!(database.nuclides[0].num_cascades, 1);
    }

    #[test]
    fn branch_copy_from_mid_chain() {
        // 1700 also decays to 500, which is mid-chain by then
        let mut database = build(&[
            (0.0, &[]),
            (500.0, &[500.0]),
            (1200.0, &[700.0]),
            (1700.0, &[1200.0]),
        ]);
        database.generate_cascades();

        assert_eq!(database.cascades.len(), 2);
        assert_eq!(database.cascades[0].levels, vec![0.0, 500.0, 1200.0]);
        assert_eq!(database.cascades[1].levels, vec![0.0, 500.0, 1700.0]);
        assert_eq!(database.cascades[1].gammas, vec![0.0, 500.0, 1200.0]);
    }

    #[test]
    fn direct_ground_decay_branches_from_step_zero() {
        // the 1200 keV crossover gamma matches ground at step 0
        let mut database = build(&[
            (0.0, &[]),
            (500.0, &[500.0]),
            (1200.0, &[700.0, 1200.0]),
        ]);
        database.generate_cascades();

        assert_eq!(database.cascades.len(), 2);
        assert_eq!(database.cascades[0].levels, vec![0.0, 500.0, 1200.0]);
        assert_eq!(database.cascades[1].levels, vec![0.0, 1200.0]);
    }

    #[test]
    fn fudge_factor_absorbs_rounding() {
        // 701.5 keV gamma from 1200 still matches the 500 keV level
        let mut database = build(&[(0.0, &[]), (500.0, &[500.0]), (1200.0, &[701.5])]);
        database.generate_cascades();

        assert_eq!(database.cascades.len(), 1);
        assert_eq!(database.cascades[0].levels, vec![0.0, 500.0, 1200.0]);
    }

    #[test]
    fn no_match_outside_tolerance() {
        // 650 keV gamma lands 50 keV away from any level
        let mut database = build(&[(0.0, &[]), (500.0, &[500.0]), (1200.0, &[650.0])]);
        database.generate_cascades();

        assert_eq!(database.cascades.len(), 1);
        assert_eq!(database.cascades[0].levels, vec![0.0, 500.0]);
    }

    #[test]
    fn every_cascade_has_at_least_two_steps() {
        let mut database = build(&[
            (0.0, &[]),
            (500.0, &[500.0]),
            (1200.0, &[700.0, 1200.0]),
            (1700.0, &[500.0, 1700.0]),
        ]);
        database.generate_cascades();

        assert!(!database.cascades.is_empty());
        for cascade in &database.cascades {
            assert!(cascade.num_levels() >= 2);
            assert!(cascade.num_levels() <= MAX_CASCADE_STEPS);
            assert_eq!(cascade.gammas[0], 0.0);
            for i in 1..cascade.num_levels() {
                assert_eq!(cascade.gammas[i], cascade.levels[i] - cascade.levels[i - 1]);
            }
        }
    }

    #[test]
    fn chain_length_is_capped() {
        // a 21-level ladder, each level decaying to the one below; the
        // chain stops at 20 steps and the top level joins nothing
        let entries: Vec<(f64, Vec<f64>)> = (0..21)
            .map(|i| {
                let energy = 100.0 * f64::from(i);
                (energy, if i == 0 { vec![] } else { vec![100.0] })
            })
            .collect();
        let borrowed: Vec<(f64, &[f64])> = entries
            .iter()
            .map(|(e, g)| (*e, g.as_slice()))
            .collect();

        let mut database = build(&borrowed);
        database.generate_cascades();

        assert_eq!(database.cascades.len(), 1);
        assert_eq!(database.cascades[0].num_levels(), MAX_CASCADE_STEPS);
        assert_eq!(database.cascades[0].levels.last(), Some(&1900.0));
    }

    #[test]
    fn cascade_count_is_capped() {
        // every level decays directly to ground, each starting a new chain
        let entries: Vec<(f64, Vec<f64>)> = (0..150)
            .map(|i| {
                let energy = 100.0 * f64::from(i);
                (energy, if i == 0 { vec![] } else { vec![energy] })
            })
            .collect();
        let borrowed: Vec<(f64, &[f64])> = entries
            .iter()
            .map(|(e, g)| (*e, g.as_slice()))
            .collect();

        let mut database = build(&borrowed);
        database.generate_cascades();

        assert_eq!(database.cascades.len(), MAX_CASCADES_PER_NUCLIDE);
    }
}
