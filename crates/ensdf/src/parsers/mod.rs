//! Parsers for the fixed-column ENSDF record format
//!
//! Records place semantic fields at fixed byte offsets within an
//! 80-character line, so fields are extracted by positional slicing rather
//! than delimiter search. The header line naming a nuclide is the one place
//! the format is space-delimited, and is whitespace-tokenized instead.

// All parsers split among files for organisation
mod halflife;
mod nuclide;
mod number;
mod spin;

// Internal re-exports for convenience
pub use halflife::half_life_from_str;
pub use nuclide::nuclide_identity;
pub use spin::spin_parity_from_str;

pub(crate) use number::{field_f64, field_i32};

// external crates
use nucdb_chart::{HalfLife, SpinParity};

/// Record types of an ENSDF line, with decoded payloads
#[derive(Debug, PartialEq)]
pub(crate) enum Record {
    /// All-whitespace line, delimits subsections within a nuclide entry
    Blank,
    /// "ADOPTED LEVELS" header opening a new nuclide entry
    Header { nuclide: String },
    /// Level record (` L`)
    Level {
        nuclide: String,
        energy: f64,
        energy_unc: i32,
        spins: Vec<SpinParity>,
        half_life: HalfLife,
    },
    /// Gamma record (` G`), belongs to the most recent level
    Gamma { energy: f64, intensity: f64 },
    /// Q-value record (` Q`)
    QValue {
        q_beta: Option<f64>,
        s_n: Option<f64>,
        s_p: Option<f64>,
        q_alpha: Option<f64>,
    },
    /// Anything else, ignored
    Other,
}

/// Fixed-width substring by byte offset, clamped for short lines
pub(in crate::parsers) fn column(i: &str, start: usize, end: usize) -> &str {
    let end = end.min(i.len());
    if start >= end {
        return "";
    }
    i.get(start..end).unwrap_or("")
}

/// Check for the header text marking a new "adopted levels" entry
fn is_header(i: &str) -> bool {
    column(i, 9, 23) == "ADOPTED LEVELS"
}

/// The record-type columns, ` L`, ` G`, ` Q` for the consumed kinds
fn record_type(i: &str) -> &str {
    column(i, 6, 8)
}

/// The nuclide identifier columns at the start of every record
fn record_nuclide(i: &str) -> String {
    column(i, 0, 6).trim().to_string()
}

/// Classify a raw line and decode the fields of the consumed record types
pub(crate) fn classify(i: &str) -> Record {
    if i.trim().is_empty() {
        return Record::Blank;
    }

    if is_header(i) {
        // the header is space-delimited, take the name from tokenization
        let nuclide = i.split_whitespace().next().unwrap_or_default().to_string();
        return Record::Header { nuclide };
    }

    match record_type(i) {
        " L" => Record::Level {
            nuclide: record_nuclide(i),
            energy: field_f64(column(i, 9, 19)).unwrap_or(0.0),
            energy_unc: field_i32(column(i, 19, 21)).unwrap_or(0),
            spins: spin_parity_from_str(column(i, 21, 36)),
            half_life: half_life_from_str(column(i, 39, 49)),
        },
        " G" => Record::Gamma {
            energy: field_f64(column(i, 9, 19)).unwrap_or(0.0),
            intensity: field_f64(column(i, 21, 28)).unwrap_or(0.0),
        },
        " Q" => Record::QValue {
            q_beta: field_f64(column(i, 9, 19)),
            s_n: field_f64(column(i, 21, 29)),
            s_p: field_f64(column(i, 31, 39)),
            q_alpha: field_f64(column(i, 41, 49)),
        },
        _ => Record::Other,
    }
}
