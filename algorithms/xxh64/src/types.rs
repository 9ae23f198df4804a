//! Shared types used across the XXH64 library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::{BLOCK_SIZE, NUM_LANES, SERIALIZED_SIZE};

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Accumulator lanes `v1..v4`.
pub type Lanes = [u64; NUM_LANES];

/// Unified block kernel signature: `(lanes, extra_block, blocks) -> bytes_consumed`.
///
/// Every backend advances the lanes over the optional leading `extra_block`
/// and then over each complete 32-byte block of `blocks`, in order. Trailing
/// bytes that do not fill a block are left untouched and excluded from the
/// returned count. All backends implement this same signature so the
/// dispatcher can swap them at runtime.
pub type BlockFn = fn(&mut Lanes, Option<&[u8; BLOCK_SIZE]>, &[u8]) -> usize;

// =============================================================================
// BACKENDS
// =============================================================================

/// Block-processing backends. All of them produce bit-identical lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable scalar kernel, four lanes held in registers.
    Scalar,
    /// x86_64 kernel holding all four lanes in one 256-bit register
    /// (AVX-512F/VL/DQ for the 64-bit multiply and rotate).
    Avx512,
}

impl Backend {
    /// Human-readable backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::Avx512 => "AVX-512",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error returned when a serialized hasher state is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The buffer does not start with the expected state tag.
    InvalidMagic,
    /// The buffer carries the right tag but has the wrong size.
    InvalidLength {
        /// Required size in bytes.
        expected: usize,
        /// Size of the rejected buffer.
        actual: usize,
    },
}

impl StateError {
    /// Length error for a buffer of `actual` bytes.
    pub const fn invalid_length(actual: usize) -> Self {
        Self::InvalidLength {
            expected: SERIALIZED_SIZE,
            actual,
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMagic => f.write_str("invalid hash state identifier"),
            Self::InvalidLength { expected, actual } => write!(
                f,
                "invalid hash state size: expected {expected} bytes, got {actual}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for StateError {}
