//! Portable implementation of XXH64.
//!
//! Holds the accumulator math shared by every backend (round, merge, combine,
//! tail and avalanche) and the scalar block kernel. The AVX-512 kernel only
//! replaces [`process_blocks`]; finalization always runs here.

use self::utils::{read_u32, read_u64};
use crate::kernels::constants::{
    BLOCK_SIZE, LANE_SIZE, PRIME1, PRIME2, PRIME3, PRIME4, PRIME5,
};
use crate::types::Lanes;

mod utils;

// =============================================================================
// ACCUMULATOR PRIMITIVES
// =============================================================================

/// Absorb one 64-bit lane into an accumulator.
#[inline(always)]
#[must_use]
pub const fn round(acc: u64, lane: u64) -> u64 {
    acc.wrapping_add(lane.wrapping_mul(PRIME2))
        .rotate_left(31)
        .wrapping_mul(PRIME1)
}

/// Fold a finished accumulator into the combined hash.
#[inline(always)]
#[must_use]
pub const fn merge_round(acc: u64, lane: u64) -> u64 {
    (acc ^ round(0, lane))
        .wrapping_mul(PRIME1)
        .wrapping_add(PRIME4)
}

/// Final bit diffusion.
#[inline]
#[must_use]
pub const fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(PRIME2);
    h ^= h >> 29;
    h = h.wrapping_mul(PRIME3);
    h ^= h >> 32;
    h
}

/// Seed-derived initial lanes.
#[inline]
#[must_use]
pub const fn init_lanes(seed: u64) -> Lanes {
    [
        seed.wrapping_add(PRIME1).wrapping_add(PRIME2),
        seed.wrapping_add(PRIME2),
        seed,
        seed.wrapping_sub(PRIME1),
    ]
}

/// Advance the lanes over one 32-byte block.
#[inline(always)]
pub fn process_block(acc: &mut Lanes, block: &[u8]) {
    acc[0] = round(acc[0], read_u64(block, 0));
    acc[1] = round(acc[1], read_u64(block, LANE_SIZE));
    acc[2] = round(acc[2], read_u64(block, 2 * LANE_SIZE));
    acc[3] = round(acc[3], read_u64(block, 3 * LANE_SIZE));
}

/// Merge the four lanes into one 64-bit value. Lane order and rotation
/// amounts are part of the hash definition.
#[inline]
#[must_use]
pub const fn combine(acc: &Lanes) -> u64 {
    let [v1, v2, v3, v4] = *acc;
    let mut h = v1
        .rotate_left(1)
        .wrapping_add(v2.rotate_left(7))
        .wrapping_add(v3.rotate_left(12))
        .wrapping_add(v4.rotate_left(18));
    h = merge_round(h, v1);
    h = merge_round(h, v2);
    h = merge_round(h, v3);
    merge_round(h, v4)
}

// =============================================================================
// BLOCK KERNEL
// =============================================================================

/// Scalar block kernel.
///
/// Consumes `extra` (when present) and then every complete block of `input`.
/// Returns the number of bytes of `input` consumed.
pub fn process_blocks(acc: &mut Lanes, extra: Option<&[u8; BLOCK_SIZE]>, input: &[u8]) -> usize {
    let [mut v1, mut v2, mut v3, mut v4] = *acc;

    if let Some(block) = extra {
        v1 = round(v1, read_u64(block, 0));
        v2 = round(v2, read_u64(block, LANE_SIZE));
        v3 = round(v3, read_u64(block, 2 * LANE_SIZE));
        v4 = round(v4, read_u64(block, 3 * LANE_SIZE));
    }

    let blocks = input.chunks_exact(BLOCK_SIZE);
    let consumed = input.len() - blocks.remainder().len();
    for block in blocks {
        v1 = round(v1, read_u64(block, 0));
        v2 = round(v2, read_u64(block, LANE_SIZE));
        v3 = round(v3, read_u64(block, 2 * LANE_SIZE));
        v4 = round(v4, read_u64(block, 3 * LANE_SIZE));
    }

    *acc = [v1, v2, v3, v4];
    consumed
}

// =============================================================================
// FINALIZATION
// =============================================================================

/// Produce the digest from the lanes, the total input length, and the
/// pending tail (fewer than 32 bytes).
///
/// Inputs that never completed a block start from `v3 + P5`; `v1`, `v2`
/// and `v4` still hold their seed values then and do not take part.
#[must_use]
pub fn finish(acc: &Lanes, total_len: u64, tail: &[u8]) -> u64 {
    debug_assert!(tail.len() < BLOCK_SIZE);

    let mut h = if total_len >= BLOCK_SIZE as u64 {
        combine(acc)
    } else {
        acc[2].wrapping_add(PRIME5)
    };
    h = h.wrapping_add(total_len);

    let mut lanes = tail.chunks_exact(LANE_SIZE);
    for lane in &mut lanes {
        h ^= round(0, read_u64(lane, 0));
        h = h.rotate_left(27).wrapping_mul(PRIME1).wrapping_add(PRIME4);
    }

    let mut rest = lanes.remainder();
    if rest.len() >= 4 {
        h ^= u64::from(read_u32(rest, 0)).wrapping_mul(PRIME1);
        h = h.rotate_left(23).wrapping_mul(PRIME2).wrapping_add(PRIME3);
        rest = &rest[4..];
    }

    for &byte in rest {
        h ^= u64::from(byte).wrapping_mul(PRIME5);
        h = h.rotate_left(11).wrapping_mul(PRIME1);
    }

    avalanche(h)
}

/// One-shot hash using only the scalar kernel.
#[must_use]
pub fn oneshot(input: &[u8], seed: u64) -> u64 {
    let mut acc = init_lanes(seed);
    let consumed = process_blocks(&mut acc, None, input);
    finish(&acc, input.len() as u64, &input[consumed..])
}
