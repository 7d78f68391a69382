//! Flat chart-of-nuclides database
//!
//! The database is one owned [ChartDatabase] value holding every nuclide,
//! level, transition, and gamma cascade in flat arrays. Records reference
//! each other by base index and count rather than by pointer, which keeps
//! the whole structure trivially snapshottable and safe to hand out to any
//! number of concurrent readers once built.
//!
//! ## Implementation
//!
//! The layout mirrors the ENSDF "adopted levels" data it is built from:
//!
//! - A [Nuclide] owns a contiguous run of [Level]s
//! - A [Level] owns a contiguous run of [Transition]s (gamma rays)
//! - A [Cascade] is a derived chain of level energies connected by
//!   successive gamma decays, generated by [ChartDatabase::generate_cascades]
//!
//! For example:
//!
//! ```rust
//! # use nucdb_chart::ChartDatabase;
//! let database = ChartDatabase::new();
//!
//! // an empty database holds no selenium-68
//! assert!(database.find(34, 34).is_none());
//! ```
//!
//! Databases can be persisted to a private binary cache format with
//! [write_snapshot] and restored with [read_snapshot]. The format is a flat
//! structure dump and must be rebuilt whenever the record layout changes.

// Modules
mod cascade;
mod database;
mod elements;
mod error;
mod level;
mod nuclide;
mod snapshot;
mod spin;
mod transition;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use cascade::{Cascade, FUDGE_FACTOR};

#[doc(inline)]
pub use database::{
    ChartDatabase, MAX_CASCADES_PER_NUCLIDE, MAX_CASCADE_STEPS, MAX_LEVELS, MAX_NUCLIDES,
    MAX_SPINS_PER_LEVEL, MAX_TRANSITIONS, MAX_TRANSITIONS_PER_LEVEL,
};

#[doc(inline)]
pub use elements::{symbol_from_z, z_from_symbol};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use level::{HalfLife, Level, Units};

#[doc(inline)]
pub use nuclide::Nuclide;

#[doc(inline)]
pub use snapshot::{read_snapshot, write_snapshot};

#[doc(inline)]
pub use spin::{SpinParity, Tentative};

#[doc(inline)]
pub use transition::Transition;
