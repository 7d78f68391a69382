//! Fixed-column ENSDF parsing and the chart database builder
//!
//! ENSDF evaluations place semantic fields at fixed byte offsets within
//! 80-character records. This crate slices and tokenizes those records,
//! feeds them through a per-file ingest state machine, and assembles the
//! flat [ChartDatabase](nucdb_chart::ChartDatabase) consumed by everything
//! downstream.
//!
//! Only the "adopted levels" subsection of each nuclide entry is consumed;
//! reaction-specific datasets are skipped. The build runs once, strictly
//! sequentially, and either returns a complete database or fails fatally.
//!
//! ## Example
//!
//! Build from a directory holding the numbered source files
//! `ensdf.001` to `ensdf.349` (gaps in the numbering are fine):
//!
//! ```rust, no_run
//! # use nucdb_ensdf::read_ensdf;
//! let database = read_ensdf("path/to/ensdf").unwrap();
//!
//! for nuclide in &database.nuclides {
//!     println!("{} with {} levels", nuclide.display_name(), nuclide.num_levels);
//! }
//! ```
//!
//! The field tokenizers are exposed for callers that want to interpret
//! individual physical-quantity strings:
//!
//! ```rust, no_run
//! # use nucdb_ensdf::{half_life_from_str, spin_parity_from_str, nuclide_identity};
//! let half_life = half_life_from_str("12.3 Y");
//! let spins = spin_parity_from_str("(5/2-)");
//! let (n, z) = nuclide_identity("68SE");
//! ```

// Modules
mod error;
mod parsers;
mod reader;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use parsers::{half_life_from_str, nuclide_identity, spin_parity_from_str};

#[doc(inline)]
pub use reader::{read_ensdf, read_ensdf_files, FILE_RANGE, FILE_STEM};
