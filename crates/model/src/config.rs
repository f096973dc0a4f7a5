//! Configuration system for the cache simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline cache geometry constants.
//! 2. **Validation:** Construction-time checks for the bit-width and
//!    associativity invariants.
//! 3. **Deserialization:** JSON-supplied configuration for embeddings, or
//!    `SimConfig::default()` for standalone use.

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline cache geometry when not explicitly
/// overridden on the command line or in a JSON configuration.
mod defaults {
    /// Default set-index bit width (16 sets).
    pub const SET_BITS: u32 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const ASSOCIATIVITY: usize = 1;

    /// Default block-offset bit width (16-byte blocks).
    pub const BLOCK_BITS: u32 = 4;
}

/// Simulation configuration.
///
/// Mirrors the classic `(s, E, b)` parameterization: `2^set_bits` sets of
/// `associativity` lines covering `2^block_bits`-byte blocks. Supplied via
/// CLI flags, JSON (see [`SimConfig::from_json`]), or [`Default`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Set-index bit width `s`; the cache holds `2^s` sets.
    pub set_bits: u32,
    /// Lines per set `E`; must be at least 1.
    pub associativity: usize,
    /// Block-offset bit width `b`.
    pub block_bits: u32,
    /// Emit a per-operation annotation line during replay.
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            set_bits: defaults::SET_BITS,
            associativity: defaults::ASSOCIATIVITY,
            block_bits: defaults::BLOCK_BITS,
            verbose: false,
        }
    }
}

impl SimConfig {
    /// Checks the construction-time invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::SetBitsTooLarge`] if `set_bits` would overflow
    /// the 64-bit index space, or [`SimError::ZeroAssociativity`] if
    /// `associativity` is zero. Both are fatal configuration errors.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.set_bits >= u64::BITS {
            return Err(SimError::SetBitsTooLarge(self.set_bits));
        }
        if self.associativity == 0 {
            return Err(SimError::ZeroAssociativity);
        }
        Ok(())
    }

    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields fall back to the defaults. The result is *not*
    /// validated; call [`SimConfig::validate`] (or construct a cache, which
    /// validates) before use.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is not
    /// valid JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
