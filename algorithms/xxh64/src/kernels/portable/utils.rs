//! Little-endian lane readers.
//!
//! Input bytes are always decoded as little-endian, independent of the host.

use crate::kernels::constants::LANE_SIZE;

/// Read the 8-byte little-endian lane starting at `offset`.
#[inline(always)]
pub fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    let mut lane = [0u8; LANE_SIZE];
    lane.copy_from_slice(&bytes[offset..offset + LANE_SIZE]);
    u64::from_le_bytes(lane)
}

/// Read the 4-byte little-endian word starting at `offset`.
#[inline(always)]
pub fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}
