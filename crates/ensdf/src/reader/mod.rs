//! Stateful ingest of ENSDF source files
//!
//! One [Reader] per file, appending into a shared [ChartDatabase]. The
//! reader tracks the current nuclide entry, the subsection counter within
//! it, and whether a Q-value record has been taken, and absorbs every
//! recoverable anomaly locally. Only nuclide-capacity exhaustion survives
//! to the end of the build, where it turns fatal.

mod builder;

pub use builder::{read_ensdf, read_ensdf_files, FILE_RANGE, FILE_STEM};

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

// external crates
use log::{debug, trace};

// nucdb modules
use nucdb_chart::{
    ChartDatabase, HalfLife, Level, Nuclide, SpinParity, Transition, MAX_LEVELS, MAX_NUCLIDES,
    MAX_TRANSITIONS, MAX_TRANSITIONS_PER_LEVEL,
};

// internal modules
use crate::error::Result;
use crate::parsers::{classify, nuclide_identity, Record};

/// Internal reader for one numbered ENSDF source file
pub(crate) struct Reader<'a> {
    database: &'a mut ChartDatabase,
    lines: Lines<BufReader<File>>,
    /// Subsection counter within the current nuclide entry
    subsection: u32,
    /// Index of the nuclide records currently attach to
    current: Option<usize>,
    /// The first Q-value record for the current nuclide has been taken
    q_value_seen: bool,
    /// Nuclide capacity was exhausted somewhere in this file
    overflow: bool,
}

// ! Internal API
impl<'a> Reader<'a> {
    /// Create a new reader appending into `database`
    pub(crate) fn new<P: AsRef<Path>>(path: P, database: &'a mut ChartDatabase) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            database,
            lines: BufReader::new(file).lines(),
            subsection: 0,
            current: None,
            q_value_seen: false,
            overflow: false,
        })
    }

    /// Ingest every record in the file
    ///
    /// Returns whether the nuclide capacity was hit, which the builder
    /// collects and reports as fatal once all files are processed.
    pub(crate) fn read(&mut self) -> Result<bool> {
        while let Some(line) = self.lines.next() {
            self.ingest(&line?);
        }
        Ok(self.overflow)
    }

    fn ingest(&mut self, line: &str) {
        match classify(line) {
            Record::Blank => self.subsection += 1,
            Record::Header { nuclide } => self.begin_nuclide(nuclide),
            Record::Level {
                nuclide,
                energy,
                energy_unc,
                spins,
                half_life,
            } => self.push_level(&nuclide, energy, energy_unc, spins, half_life),
            Record::Gamma { energy, intensity } => self.push_gamma(energy, intensity),
            Record::QValue {
                q_beta,
                s_n,
                s_p,
                q_alpha,
            } => self.set_q_values(q_beta, s_n, s_p, q_alpha),
            Record::Other => trace!("ignored record: {line}"),
        }
    }

    /// Open a new nuclide entry and make it current
    fn begin_nuclide(&mut self, name: String) {
        self.subsection = 0;
        self.q_value_seen = false;

        if self.database.nuclides.len() >= MAX_NUCLIDES {
            // nothing left to attach records to, fatal once the build ends
            self.overflow = true;
            self.current = None;
            return;
        }

        let (n, z) = nuclide_identity(&name);
        debug!("new nuclide entry {name} (N = {n}, Z = {z})");

        self.database.nuclides.push(Nuclide {
            name,
            n,
            z,
            first_level: self.database.levels.len(),
            ..Default::default()
        });
        self.current = Some(self.database.nuclides.len() - 1);
    }

    /// Append a level to the current nuclide
    fn push_level(
        &mut self,
        nuclide: &str,
        energy: f64,
        energy_unc: i32,
        spins: Vec<SpinParity>,
        half_life: HalfLife,
    ) {
        if self.subsection != 0 {
            return;
        }
        let Some(index) = self.current else { return };

        let current = &self.database.nuclides[index];
        if nuclide != current.name {
            trace!("level record for {nuclide} inside the {} entry", current.name);
            return;
        }
        if self.database.levels.len() >= MAX_LEVELS {
            return;
        }

        // levels must arrive in strictly increasing energy order, anything
        // else is duplicate or noise
        if current.num_levels > 0 {
            let last = &self.database.levels[current.first_level + current.num_levels - 1];
            if energy <= last.energy {
                trace!("dropped out-of-order level at {energy} keV for {nuclide}");
                return;
            }
        }

        self.database.levels.push(Level {
            energy,
            energy_unc,
            half_life,
            spins,
            first_transition: self.database.transitions.len(),
            num_transitions: 0,
        });
        self.database.nuclides[index].num_levels += 1;
    }

    /// Append a gamma transition to the most recently accepted level
    fn push_gamma(&mut self, energy: f64, intensity: f64) {
        if self.subsection != 0 {
            return;
        }
        let Some(index) = self.current else { return };

        let current = &self.database.nuclides[index];
        if current.num_levels == 0 {
            trace!("gamma record before any level, ignored");
            return;
        }
        let level_index = current.first_level + current.num_levels - 1;

        if self.database.transitions.len() >= MAX_TRANSITIONS {
            return;
        }
        if self.database.levels[level_index].num_transitions >= MAX_TRANSITIONS_PER_LEVEL {
            return;
        }

        self.database.transitions.push(Transition { energy, intensity });
        self.database.levels[level_index].num_transitions += 1;
    }

    /// Take Q-values from the first Q record of the entry only
    fn set_q_values(
        &mut self,
        q_beta: Option<f64>,
        s_n: Option<f64>,
        s_p: Option<f64>,
        q_alpha: Option<f64>,
    ) {
        if self.subsection != 0 || self.q_value_seen {
            return;
        }
        let Some(index) = self.current else { return };

        let nuclide = &mut self.database.nuclides[index];
        nuclide.q_beta = q_beta;
        nuclide.s_n = s_n;
        nuclide.s_p = s_p;
        nuclide.q_alpha = q_alpha;
        self.q_value_seen = true;
    }
}
