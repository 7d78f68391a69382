//! Builds the complete database from the numbered source files
//!
//! The builder is the only place a database is created and is expected to
//! run once per cold start. After every file is ingested it applies the
//! fatal-condition checks and finalizes the database with the cascade
//! generation pass.

// standard library
use std::ops::RangeInclusive;
use std::path::Path;

// external crates
use log::{debug, info};

// nucdb modules
use nucdb_chart::ChartDatabase;
use nucdb_utils::f;

// internal modules
use crate::error::{Error, Result};
use crate::reader::Reader;

/// Numeric suffixes of the source files, zero-padded to three digits
pub const FILE_RANGE: RangeInclusive<u32> = 1..=349;

/// Shared stem of the numbered source files
pub const FILE_STEM: &str = "ensdf";

/// Build the database from a directory of numbered ENSDF files
///
/// Expects files named `ensdf.001` through `ensdf.349` under `directory`.
/// Gaps in the numbering are expected and skipped; a build only fails when
/// no file yields any nuclide data at all, or the nuclide capacity is
/// exceeded.
///
/// ```rust, no_run
/// # use nucdb_ensdf::read_ensdf;
/// let database = read_ensdf("path/to/ensdf").unwrap();
/// ```
pub fn read_ensdf<P: AsRef<Path>>(directory: P) -> Result<ChartDatabase> {
    let directory = directory.as_ref();
    read_ensdf_files(FILE_RANGE.map(|index| directory.join(f!("{FILE_STEM}.{index:03}"))))
}

/// Build the database from an explicit list of source files
///
/// The same pipeline as [read_ensdf] for callers with a different file
/// layout. Paths are ingested strictly in the order given, which fixes the
/// record order of the finished database.
pub fn read_ensdf_files<I, P>(paths: I) -> Result<ChartDatabase>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut database = ChartDatabase::new();
    let mut overflow = false;

    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            // sparse numbering, an absent file is not an error
            debug!("skipped missing source file {}", path.display());
            continue;
        }
        let mut reader = Reader::new(path, &mut database)?;
        overflow |= reader.read()?;
    }

    if overflow {
        return Err(Error::TooManyNuclides);
    }
    if database.nuclides.is_empty() {
        return Err(Error::NoNuclideData);
    }

    info!(
        "database built: {} nuclides, {} levels, {} transitions",
        database.nuclides.len(),
        database.levels.len(),
        database.transitions.len()
    );

    database.generate_cascades();
    Ok(database)
}
