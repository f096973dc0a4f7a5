//! Set-associative cache model with LRU replacement.
//!
//! This module implements the simulated cache itself. It provides:
//! 1. **Storage:** A flat line array allocated once at construction
//!    (index = `set * ways + way`), all lines initially invalid.
//! 2. **Lookup:** Per-set associative tag search driven by the address
//!    geometry.
//! 3. **Replacement:** LRU via a cache-wide monotonic access counter
//!    stamped on every touch; ties break toward the lowest way.
//! 4. **Counters:** Hit, miss, and eviction totals owned by the instance,
//!    so independent simulations never cross-contaminate.

use std::fmt;

use tracing::info;

use crate::common::addr::Geometry;
use crate::common::error::SimError;
use crate::config::SimConfig;

/// Outcome of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The referenced block was resident.
    Hit,
    /// The block was absent but an invalid line was available to fill.
    Miss,
    /// The block was absent and a valid line was evicted to make room.
    MissEviction,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "hit"),
            Self::Miss => write!(f, "miss"),
            Self::MissEviction => write!(f, "miss eviction"),
        }
    }
}

/// Cache line entry containing tag, validity, and the LRU recency stamp.
///
/// While `valid` is false the other fields are meaningless and never read.
/// A line becomes valid exactly once, on first fill, and stays valid:
/// eviction overwrites tag and stamp in place.
#[derive(Clone, Default)]
struct CacheLine {
    tag: u64,
    valid: bool,
    last_used: u64,
}

/// Simulated set-associative cache.
///
/// Holds `2^s` sets of `E` lines and the three aggregate counters. All
/// storage is allocated at construction; `access` never allocates.
pub struct Cache {
    lines: Vec<CacheLine>, // index = (set * ways) + way
    geometry: Geometry,
    num_sets: usize,
    ways: usize,
    access_counter: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("num_sets", &self.num_sets)
            .field("ways", &self.ways)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .field("evictions", &self.evictions)
            .finish_non_exhaustive()
    }
}

impl Cache {
    /// Creates a cache from the configured geometry, all lines invalid.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `set_bits` would overflow the index
    /// space, `associativity` is zero, or the combined line count
    /// (`2^s * E`) does not fit in the index space. An out-of-memory
    /// condition during
    /// the single line-array allocation aborts the process; there is no
    /// degraded mode.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let geometry = Geometry::new(config.set_bits, config.block_bits);
        let num_sets = geometry
            .num_sets()
            .ok_or(SimError::SetBitsTooLarge(config.set_bits))?;
        let ways = config.associativity;
        let total_lines = num_sets
            .checked_mul(ways)
            .ok_or(SimError::TooManyLines { sets: num_sets, ways })?;

        info!(
            sets = num_sets,
            ways,
            block_bits = config.block_bits,
            "constructed cache"
        );

        Ok(Self {
            lines: vec![CacheLine::default(); total_lines],
            geometry,
            num_sets,
            ways,
            access_counter: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        })
    }

    /// Simulates one memory reference to `addr`.
    ///
    /// Increments the cache-wide access counter (the LRU recency token),
    /// then resolves the reference against the target set:
    /// tag match on a valid line is a hit; otherwise the first invalid line
    /// is filled; otherwise the least-recently-used line (lowest way on a
    /// stamp tie) is evicted and overwritten.
    ///
    /// Exactly one line is mutated per miss. Masking keeps the set index in
    /// range, so this never fails at runtime.
    pub fn access(&mut self, addr: u64) -> Outcome {
        self.access_counter += 1;
        let parts = self.geometry.split(addr);
        let base_idx = parts.set_index * self.ways;

        for way in 0..self.ways {
            let line = &mut self.lines[base_idx + way];
            if line.valid && line.tag == parts.tag {
                self.hits += 1;
                line.last_used = self.access_counter;
                return Outcome::Hit;
            }
        }

        self.misses += 1;

        for way in 0..self.ways {
            let line = &mut self.lines[base_idx + way];
            if !line.valid {
                line.valid = true;
                line.tag = parts.tag;
                line.last_used = self.access_counter;
                return Outcome::Miss;
            }
        }

        // Set full: evict the strictly smallest stamp, keeping the first on ties.
        let mut victim_idx = base_idx;
        let mut min_used = u64::MAX;
        for way in 0..self.ways {
            let line = &self.lines[base_idx + way];
            if line.last_used < min_used {
                min_used = line.last_used;
                victim_idx = base_idx + way;
            }
        }

        self.evictions += 1;
        let line = &mut self.lines[victim_idx];
        line.tag = parts.tag;
        line.last_used = self.access_counter;
        Outcome::MissEviction
    }

    /// Returns the hit count.
    #[inline]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns the miss count.
    #[inline]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Returns the eviction count.
    #[inline]
    pub const fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Returns the number of sets `S = 2^s`.
    #[inline]
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the associativity `E`.
    #[inline]
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Returns the address geometry this cache was constructed with.
    #[inline]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns how many lines of the given set currently hold valid data.
    ///
    /// Introspection for diagnostics and tests; never more than `ways()`.
    pub fn valid_lines(&self, set_index: usize) -> usize {
        let base_idx = set_index * self.ways;
        self.lines[base_idx..base_idx + self.ways]
            .iter()
            .filter(|line| line.valid)
            .count()
    }
}
