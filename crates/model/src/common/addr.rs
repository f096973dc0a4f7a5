//! Address geometry for set-associative caches.
//!
//! This module owns the decomposition of 64-bit addresses into the three
//! fields a set-associative cache cares about. It provides:
//! 1. **Geometry:** The `(s, b)` bit-width pair fixed at cache construction.
//! 2. **Decomposition:** Pure, stateless extraction of tag, set index, and
//!    block offset from an address.
//! 3. **Overflow Safety:** Checked shifts so oversized bit widths produce
//!    zero fields instead of undefined shift behavior.
//!
//! An address splits as `[tag][s-bit set index][b-bit block offset]`. Only
//! the tag and set index participate in hit testing; the offset is carried
//! for completeness and never consulted by the model.

/// The fields of one decomposed address.
///
/// Produced by [`Geometry::split`]. Decomposition is pure: the parts have no
/// persistent identity of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressParts {
    /// High-order bits identifying the memory block within its set.
    pub tag: u64,
    /// Middle bits selecting the set; always in `[0, num_sets)`.
    pub set_index: usize,
    /// Low-order bits locating the byte within the block (unused by lookup).
    pub offset: u64,
}

/// Bit-width parameters of a cache, fixed at construction.
///
/// `set_bits` is the set-index width `s` (so the cache has `2^s` sets) and
/// `block_bits` is the block-offset width `b`. Construction-time validation
/// guarantees `set_bits < 64`; `block_bits` is unconstrained and oversized
/// shift amounts saturate to a zero field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    set_bits: u32,
    block_bits: u32,
}

/// Mask covering the low `bits` bits of a 64-bit value.
#[inline]
fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

impl Geometry {
    /// Creates a geometry from the set-index and block-offset bit widths.
    ///
    /// Callers are expected to have validated `set_bits < 64` (see
    /// `SimConfig::validate`); the decomposition itself never panics even
    /// for oversized widths.
    #[inline]
    pub const fn new(set_bits: u32, block_bits: u32) -> Self {
        Self {
            set_bits,
            block_bits,
        }
    }

    /// Returns the set-index bit width `s`.
    #[inline]
    pub const fn set_bits(&self) -> u32 {
        self.set_bits
    }

    /// Returns the block-offset bit width `b`.
    #[inline]
    pub const fn block_bits(&self) -> u32 {
        self.block_bits
    }

    /// Returns the number of sets `S = 2^s`, or `None` if `s` would
    /// overflow the addressable index range.
    #[inline]
    pub fn num_sets(&self) -> Option<usize> {
        1usize.checked_shl(self.set_bits)
    }

    /// Decomposes an address into tag, set index, and block offset.
    ///
    /// The set index is masked to `[0, 2^s)` (zero when `s == 0`), so it can
    /// never select a set outside the cache. Shift amounts of 64 or more
    /// yield a zero field rather than overflowing.
    #[inline]
    pub fn split(&self, addr: u64) -> AddressParts {
        let offset = addr & low_mask(self.block_bits);
        let set_index = (addr.checked_shr(self.block_bits).unwrap_or(0) & low_mask(self.set_bits))
            as usize;
        let tag = addr
            .checked_shr(self.block_bits.saturating_add(self.set_bits))
            .unwrap_or(0);
        AddressParts {
            tag,
            set_index,
            offset,
        }
    }
}
