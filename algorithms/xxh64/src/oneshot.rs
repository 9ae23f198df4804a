//! Public API Layer
//!
use crate::engine;
use crate::kernels::constants::BLOCK_SIZE;
use crate::kernels::portable;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the XXH64 hash of `input` with seed 0.
///
/// # Example
/// ```rust
/// assert_eq!(xxh64::hash(b""), 0xef46_db37_51d8_e999);
/// assert_eq!(xxh64::hash(b"a"), 0xd24e_c4f1_a98c_6e5b);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> u64 {
    hash_seeded(input, 0)
}

/// Compute the XXH64 hash of `input` with a seed.
///
/// Equal to `Hasher::with_seed(seed)`, one `write(input)`, then `finalize()`,
/// but blocks are read straight from `input` without touching a carry buffer.
///
/// # Example
/// ```rust
/// let data = b"seeded";
/// assert_eq!(xxh64::hash_seeded(data, 0), xxh64::hash(data));
/// assert_ne!(xxh64::hash_seeded(data, 1), xxh64::hash(data));
/// ```
#[must_use]
pub fn hash_seeded(input: &[u8], seed: u64) -> u64 {
    let mut acc = portable::init_lanes(seed);
    let consumed = if input.len() >= BLOCK_SIZE {
        let kernel = engine::get_block_kernel();
        kernel(&mut acc, None, input)
    } else {
        0
    };
    portable::finish(&acc, input.len() as u64, &input[consumed..])
}
