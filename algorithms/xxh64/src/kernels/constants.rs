//! XXH64 Kernel Constants
//!
//! The five primes are part of the hash definition: changing any of them
//! changes every output. They are the 64-bit primes published with XXH64:
//!
//! ```text
//! P1 = 11400714785074694791    P4 = 9650029242287828579
//! P2 = 14029467366897019727    P5 = 2870177450012600261
//! P3 = 1609587929392839161
//! ```

// =============================================================================
// PRIMES
// =============================================================================

/// Lane multiplier applied after rotation.
pub const PRIME1: u64 = 0x9E37_79B1_85EB_CA87;
/// Input multiplier applied before rotation.
pub const PRIME2: u64 = 0xC2B2_AE3D_27D4_EB4F;
/// Avalanche and 4-byte tail constant.
pub const PRIME3: u64 = 0x1656_67B1_9E37_79F9;
/// Merge and 8-byte tail offset.
pub const PRIME4: u64 = 0x85EB_CA77_C2B2_AE63;
/// Short-input seed offset and single-byte tail multiplier.
pub const PRIME5: u64 = 0x27D4_EB2F_1656_67C5;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Block size consumed by one accumulator round (in bytes).
pub const BLOCK_SIZE: usize = 32;

/// Number of 64-bit accumulator lanes.
pub const NUM_LANES: usize = 4;

/// Size of one accumulator lane in bytes.
pub const LANE_SIZE: usize = 8;

/// Digest size in bytes (64-bit output).
pub const DIGEST_SIZE: usize = 8;

// =============================================================================
// STATE SERIALIZATION
// =============================================================================

/// Leading tag of a serialized hasher state. The last byte is the layout version.
pub const STATE_MAGIC: [u8; 4] = *b"xxh\x06";

/// Serialized state size: tag + `v1..v4` + `total` + carry buffer.
pub const SERIALIZED_SIZE: usize = STATE_MAGIC.len() + 5 * LANE_SIZE + BLOCK_SIZE;

// =============================================================================
// KNOWN OUTPUTS
// =============================================================================

/// XXH64 of the empty input with seed 0.
pub const EMPTY_HASH: u64 = 0xEF46_DB37_51D8_E999;
