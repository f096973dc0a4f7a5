//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides fundamental building blocks shared across the
//! simulator components. It includes:
//! 1. **Address Geometry:** Tag/set/offset decomposition of 64-bit addresses.
//! 2. **Error Handling:** The fatal error type for configuration and trace I/O.

/// Address geometry (tag/set-index/offset decomposition).
pub mod addr;

/// Fatal error definitions.
pub mod error;

pub use addr::{AddressParts, Geometry};
pub use error::SimError;
