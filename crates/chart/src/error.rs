//! Result and Error types for the chart database module

/// Type alias for `Result<T, chart::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nucdb-chart`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialize/deserialize a byte stream
    #[error("failed binary (de)serialization")]
    FailedBinaryOp(#[from] Box<bincode::ErrorKind>),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Snapshot file does not start with the expected magic bytes
    #[error("snapshot magic bytes {found:?} are not \"NCDB\"")]
    SnapshotMagic { found: Vec<u8> },

    /// Snapshot written by an incompatible record layout
    #[error("snapshot version {found} does not match expected {expected}")]
    SnapshotVersion { expected: u8, found: u8 },

    /// Half-life unit symbol outside the ENSDF vocabulary
    #[error("unknown half-life unit symbol \"{hint}\"")]
    UnknownUnits { hint: String },
}
