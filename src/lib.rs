//! `nucdb` is a small toolkit for building a chart-of-nuclides database from
//! ENSDF evaluated nuclear structure files
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nucdb_utils as utils;

#[cfg(feature = "chart")]
#[cfg_attr(docsrs, doc(cfg(feature = "chart")))]
#[doc(inline)]
pub use nucdb_chart as chart;

#[cfg(feature = "ensdf")]
#[cfg_attr(docsrs, doc(cfg(feature = "ensdf")))]
#[doc(inline)]
pub use nucdb_ensdf as ensdf;
