//! State Codec
//!
//! Fixed 76-byte checkpoint of a streaming hasher:
//!
//! ```text
//! offset  size  field
//! 0       4     tag  "xxh" + version 0x06
//! 4       32    v1..v4 (little-endian u64 each)
//! 36      8     total length (little-endian u64)
//! 44      32    carry buffer, first (total % 32) bytes meaningful, rest zero
//! ```
//!
//! The carry length is not stored; it is recovered as `total % 32`.

use crate::kernels::constants::{
    BLOCK_SIZE, LANE_SIZE, NUM_LANES, SERIALIZED_SIZE, STATE_MAGIC,
};
use crate::types::{Lanes, StateError};

const LANES_OFFSET: usize = STATE_MAGIC.len();
const TOTAL_OFFSET: usize = LANES_OFFSET + NUM_LANES * LANE_SIZE;
const CARRY_OFFSET: usize = TOTAL_OFFSET + LANE_SIZE;

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Plain copy of the serializable part of a hasher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub acc: Lanes,
    pub total_len: u64,
    pub carry: [u8; BLOCK_SIZE],
    pub carry_len: usize,
}

impl Snapshot {
    /// Encode into the fixed layout. Carry bytes past `carry_len` are zeroed.
    pub fn encode(&self) -> [u8; SERIALIZED_SIZE] {
        let mut out = [0u8; SERIALIZED_SIZE];
        out[..LANES_OFFSET].copy_from_slice(&STATE_MAGIC);

        for (i, lane) in self.acc.iter().enumerate() {
            let at = LANES_OFFSET + i * LANE_SIZE;
            out[at..at + LANE_SIZE].copy_from_slice(&lane.to_le_bytes());
        }

        out[TOTAL_OFFSET..CARRY_OFFSET].copy_from_slice(&self.total_len.to_le_bytes());
        out[CARRY_OFFSET..CARRY_OFFSET + self.carry_len]
            .copy_from_slice(&self.carry[..self.carry_len]);
        out
    }

    /// Decode and validate. Nothing is produced unless the whole buffer is valid.
    ///
    /// # Errors
    /// `InvalidMagic` if the tag is missing or wrong (checked first),
    /// `InvalidLength` if the size is not exactly [`SERIALIZED_SIZE`].
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        if bytes.len() < STATE_MAGIC.len() || bytes[..LANES_OFFSET] != STATE_MAGIC {
            tracing::debug!(len = bytes.len(), "rejected xxh64 state: bad identifier");
            return Err(StateError::InvalidMagic);
        }
        if bytes.len() != SERIALIZED_SIZE {
            tracing::debug!(len = bytes.len(), "rejected xxh64 state: bad size");
            return Err(StateError::invalid_length(bytes.len()));
        }

        let acc: Lanes = core::array::from_fn(|i| read_le(bytes, LANES_OFFSET + i * LANE_SIZE));
        let total_len = read_le(bytes, TOTAL_OFFSET);

        #[allow(clippy::cast_possible_truncation)] // always < 32
        let carry_len = (total_len % BLOCK_SIZE as u64) as usize;
        let mut carry = [0u8; BLOCK_SIZE];
        carry[..carry_len].copy_from_slice(&bytes[CARRY_OFFSET..CARRY_OFFSET + carry_len]);

        Ok(Self {
            acc,
            total_len,
            carry,
            carry_len,
        })
    }
}

fn read_le(bytes: &[u8], at: usize) -> u64 {
    let mut word = [0u8; LANE_SIZE];
    word.copy_from_slice(&bytes[at..at + LANE_SIZE]);
    u64::from_le_bytes(word)
}
