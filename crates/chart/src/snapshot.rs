//! Binary snapshot of the assembled database
//!
//! A private cache format for fast cold starts: a short magic sequence, one
//! version byte, then the entire [ChartDatabase] as a single contiguous
//! bincode block. The reader's record layout must exactly match the
//! writer's, so the version byte is bumped on any layout change and stale
//! snapshots are rejected rather than reinterpreted.

// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

// internal modules
use crate::database::ChartDatabase;
use crate::error::{Error, Result};

// external crates
use bincode::{deserialize_from, serialize_into};

const MAGIC: [u8; 4] = *b"NCDB";
const VERSION: u8 = 1;

/// Write the database to a snapshot file at `path`
///
/// ```rust, no_run
/// # use nucdb_chart::{ChartDatabase, write_snapshot};
/// let database = ChartDatabase::new();
/// write_snapshot(&database, "chart.bin").unwrap();
/// ```
pub fn write_snapshot<P: AsRef<Path>>(database: &ChartDatabase, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&MAGIC)?;
    writer.write_all(&[VERSION])?;
    serialize_into(&mut writer, database)?;
    writer.flush()?;
    Ok(())
}

/// Read a database back from a snapshot file at `path`
///
/// Fails with [Error::SnapshotMagic] or [Error::SnapshotVersion] for files
/// written by anything other than the current record layout.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<ChartDatabase> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut header = [0u8; 5];
    reader.read_exact(&mut header)?;

    if header[..4] != MAGIC {
        return Err(Error::SnapshotMagic {
            found: header[..4].to_vec(),
        });
    }
    if header[4] != VERSION {
        return Err(Error::SnapshotVersion {
            expected: VERSION,
            found: header[4],
        });
    }

    Ok(deserialize_from(reader)?)
}
