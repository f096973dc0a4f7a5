//! Address Geometry Unit Tests.
//!
//! Verifies the pure tag/set-index/offset decomposition for representative
//! `(s, b)` pairs, including the degenerate widths (`s == 0`, oversized
//! `b`) where shift amounts reach or exceed 64 bits.

use pretty_assertions::assert_eq;
use rstest::rstest;

use csim_core::common::addr::Geometry;

#[test]
fn split_basic_fields() {
    // s=2, b=4: [tag][2-bit set][4-bit offset]
    let geom = Geometry::new(2, 4);
    let parts = geom.split(0b1101_10_0111);

    assert_eq!(parts.offset, 0b0111);
    assert_eq!(parts.set_index, 0b10);
    assert_eq!(parts.tag, 0b1101);
}

#[test]
fn zero_set_bits_always_selects_set_zero() {
    let geom = Geometry::new(0, 3);
    for addr in [0u64, 1, 0xFF, u64::MAX] {
        assert_eq!(geom.split(addr).set_index, 0);
    }
}

#[test]
fn zero_block_bits_has_zero_offset() {
    let geom = Geometry::new(4, 0);
    assert_eq!(geom.split(0xDEAD_BEEF).offset, 0);
    // With b=0 and s=0, the tag is the whole address.
    let flat = Geometry::new(0, 0);
    assert_eq!(flat.split(0xDEAD_BEEF).tag, 0xDEAD_BEEF);
}

/// Shift amounts of 64 or more must yield zero fields, never overflow.
#[rstest]
#[case(0, 64)]
#[case(0, 100)]
#[case(32, 32)]
#[case(63, 1)]
fn oversized_widths_saturate(#[case] set_bits: u32, #[case] block_bits: u32) {
    let geom = Geometry::new(set_bits, block_bits);
    let parts = geom.split(u64::MAX);
    assert_eq!(parts.tag, 0, "tag bits exhausted by s+b >= 64");
}

#[test]
fn num_sets_is_two_to_the_s() {
    assert_eq!(Geometry::new(0, 0).num_sets(), Some(1));
    assert_eq!(Geometry::new(4, 0).num_sets(), Some(16));
    assert_eq!(Geometry::new(10, 6).num_sets(), Some(1024));
}

#[test]
fn num_sets_overflow_is_none() {
    assert_eq!(Geometry::new(64, 0).num_sets(), None);
    assert_eq!(Geometry::new(200, 0).num_sets(), None);
}

/// The three fields always reassemble into the original address when the
/// widths fit in 64 bits.
#[rstest]
#[case(0, 0, 0x12345)]
#[case(1, 0, 0x2)]
#[case(4, 4, 0xABCD_EF01)]
#[case(8, 6, u64::MAX)]
fn decomposition_is_lossless(#[case] s: u32, #[case] b: u32, #[case] addr: u64) {
    let geom = Geometry::new(s, b);
    let parts = geom.split(addr);
    let rebuilt = (parts.tag << (s + b)) | ((parts.set_index as u64) << b) | parts.offset;
    assert_eq!(rebuilt, addr);
}
