#![cfg_attr(not(feature = "std"), no_std)]

//! # xxh64
//!
//! Streaming, seeded XXH64 (64-bit xxHash).
//! Block processing is dispatched once per process to a scalar or AVX-512 kernel.

//! # Usage
//! ```rust
//! // 1. One-shot
//! let hash = xxh64::hash(b"Call me Ishmael. Some years ago--never mind how long precisely-");
//! assert_eq!(hash, 0x02a2_e854_70d6_fd96);
//!
//! // 2. Streaming
//! use xxh64::Hasher;
//!
//! let mut hasher = Hasher::with_seed(0);
//! hasher.write(b"Call me Ishmael. ");
//! hasher.write(b"Some years ago--never mind how long precisely-");
//! assert_eq!(hasher.finalize(), hash);
//!
//! // 3. Checkpoint / restore
//! let mut hasher = Hasher::new();
//! hasher.write(b"Call me Ishmael. Some years ago");
//! let saved = hasher.serialize();
//!
//! let mut resumed = Hasher::deserialize(&saved)?;
//! resumed.write(b"--never mind how long precisely-");
//! assert_eq!(resumed.finalize(), hash);
//! # Ok::<(), xxh64::StateError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
mod state;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use kernels::constants::{BLOCK_SIZE, DIGEST_SIZE, SERIALIZED_SIZE};
pub use oneshot::{hash, hash_seeded};
pub use streaming::{Xxh64Builder, Xxh64Hasher as Hasher};
pub use types::{Backend, BlockFn, Lanes, StateError};

/// Returns the block-processing backend selected for this process.
#[must_use]
pub fn active_backend() -> Backend {
    engine::selected_backend()
}
