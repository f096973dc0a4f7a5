//! Fatal error definitions for the cache simulator.
//!
//! This module defines the single error type surfaced by the library. It
//! covers the two fatal classes the simulator recognizes:
//! 1. **Configuration errors:** Bad bit widths or associativity detected at
//!    cache construction.
//! 2. **Trace I/O errors:** Failure to open or read the trace file.
//!
//! Malformed trace lines are deliberately *not* errors; they are skipped
//! silently by the parser (see `trace::parse_line`).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal simulator error.
///
/// Every variant terminates the run; there is no partial or degraded mode.
/// The CLI maps these to a diagnostic on standard error and a non-zero exit
/// status.
#[derive(Debug, Error)]
pub enum SimError {
    /// The set-index width would overflow the 64-bit index space.
    #[error("set-index width {0} is too large (must be below 64)")]
    SetBitsTooLarge(u32),

    /// Associativity of zero leaves every set without storage.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,

    /// The total line count (sets × ways) exceeds the addressable index space.
    #[error("cache of {sets} sets x {ways} ways exceeds the addressable index space")]
    TooManyLines {
        /// Number of sets requested.
        sets: usize,
        /// Lines per set requested.
        ways: usize,
    },

    /// The trace file could not be opened.
    #[error("failed to open trace file {path}: {source}")]
    TraceOpen {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// I/O failure while reading the trace or writing annotations.
    #[error("trace I/O error: {0}")]
    Io(#[from] io::Error),
}
