//! Trace-driven set-associative cache simulator library.
//!
//! This crate models a single-level set-associative data cache replaying a
//! memory-access trace. It provides:
//! 1. **Geometry:** Tag/set/offset decomposition of 64-bit addresses.
//! 2. **Cache model:** Per-set associative lookup with LRU replacement and
//!    owned hit/miss/eviction counters.
//! 3. **Trace replay:** Parsing of `<kind> <addr>,<size>` trace lines and
//!    sequential replay against the cache, including the double access of
//!    modify operations.
//! 4. **Reporting:** A summary seam for embedding harnesses plus an optional
//!    per-operation verbose annotation stream.
//!
//! The simulation is deterministic and single-threaded; replaying the same
//! trace against a freshly constructed cache always yields the same counters.

/// Cache model (lines, sets, LRU replacement, counters).
pub mod cache;
/// Common types (address geometry, errors).
pub mod common;
/// Simulator configuration (defaults, validation, JSON deserialization).
pub mod config;
/// Trace replay (drives the cache, verbose annotations, operation mix).
pub mod replay;
/// Summary reporting seam for embedding harnesses.
pub mod report;
/// Operation-mix statistics collection and reporting.
pub mod stats;
/// Trace-line parsing (operation kinds, silent-skip policy).
pub mod trace;

/// Cache model type; construct with [`Cache::new`] and drive with `access`.
pub use crate::cache::{Cache, Outcome};
/// Root configuration type; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Fatal simulator errors (configuration and trace I/O).
pub use crate::common::error::SimError;
/// Replayer driving a cache from parsed trace operations.
pub use crate::replay::Replayer;
/// Summary reporting trait and the standalone stdout default.
pub use crate::report::{PrintSummary, SummaryFn, SummaryReporter};
