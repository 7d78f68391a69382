//! Result and Error types for the ENSDF module

/// Type alias for `Result<T, ensdf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nucdb-ensdf`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// More nuclide entries than the database capacity allows
    #[error("nuclide capacity exceeded")]
    TooManyNuclides,

    /// Every source file was missing or held no adopted-levels data
    #[error("no nuclide data found in any source file")]
    NoNuclideData,
}
