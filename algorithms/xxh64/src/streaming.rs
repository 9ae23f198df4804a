//! Streaming Hasher
//!
//! Incremental XXH64 with a 32-byte carry buffer. Any split of the input
//! across `write` calls yields the same digest as the one-shot API.

use crate::engine;
use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE, SERIALIZED_SIZE};
use crate::kernels::portable;
use crate::state::Snapshot;
use crate::types::{Backend, BlockFn, Lanes, StateError};

use core::hash::BuildHasher;

#[cfg(feature = "digest-trait")]
use digest::typenum::U8;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, Output, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming XXH64 hasher.
///
/// Holds the four lanes, the byte count, and up to 31 pending bytes.
/// The block kernel is fixed at construction.
#[derive(Clone, Debug)]
pub struct Xxh64Hasher {
    /// Lanes advanced over every completed block
    acc: Lanes,
    /// Total bytes written, including the carry
    total_len: u64,
    /// Pending bytes of an incomplete block
    carry: [u8; BLOCK_SIZE],
    /// Valid prefix of `carry` (always < `BLOCK_SIZE`)
    carry_len: usize,
    /// Seed used by `reset`
    seed: u64,
    backend: Backend,
    kernel: BlockFn,
}

impl Xxh64Hasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher with seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a seeded hasher on the process-wide backend.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_backend(seed, engine::selected_backend())
    }

    /// Create a seeded hasher on a specific backend.
    ///
    /// A backend this CPU cannot run falls back to [`Backend::Scalar`];
    /// all backends produce the same digest.
    #[must_use]
    pub fn with_backend(seed: u64, backend: Backend) -> Self {
        let backend = backend.resolve();
        Self {
            acc: portable::init_lanes(seed),
            total_len: 0,
            carry: [0u8; BLOCK_SIZE],
            carry_len: 0,
            seed,
            backend,
            kernel: backend.kernel(),
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Absorb `data`. Always consumes all of it and returns `data.len()`.
    ///
    /// Completed blocks go to the kernel straight from `data`; only a block
    /// straddling the previous carry is assembled in the carry buffer.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let n = data.len();
        self.total_len = self.total_len.wrapping_add(n as u64);

        // Still short of a block: buffer only
        if self.carry_len + n < BLOCK_SIZE {
            self.carry[self.carry_len..self.carry_len + n].copy_from_slice(data);
            self.carry_len += n;
            return n;
        }

        let mut input = data;
        let consumed = if self.carry_len > 0 {
            // Complete the pending block and pass it as the leading extra block
            let fill = BLOCK_SIZE - self.carry_len;
            self.carry[self.carry_len..].copy_from_slice(&input[..fill]);
            input = &input[fill..];
            self.carry_len = 0;
            (self.kernel)(&mut self.acc, Some(&self.carry), input)
        } else {
            (self.kernel)(&mut self.acc, None, input)
        };

        let tail = &input[consumed..];
        self.carry[..tail.len()].copy_from_slice(tail);
        self.carry_len = tail.len();
        n
    }

    /// Reset to the empty state, keeping the seed.
    pub fn reset(&mut self) {
        self.reset_with_seed(self.seed);
    }

    /// Reset to the empty state under a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.acc = portable::init_lanes(seed);
        self.total_len = 0;
        self.carry_len = 0;
        self.seed = seed;
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Digest of everything written so far. Does not consume or modify the
    /// hasher; writing may continue afterwards.
    #[must_use]
    pub fn finalize(&self) -> u64 {
        portable::finish(&self.acc, self.total_len, &self.carry[..self.carry_len])
    }

    /// Digest in canonical big-endian byte order.
    #[must_use]
    pub fn digest(&self) -> [u8; DIGEST_SIZE] {
        self.finalize().to_be_bytes()
    }

    /// Total number of bytes written since the last reset.
    #[must_use]
    pub const fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Seed applied by [`reset`](Self::reset).
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Backend executing this hasher's blocks.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    // =========================================================================
    // CHECKPOINT / RESTORE
    // =========================================================================

    /// Serialize the hashing state (not the seed or backend).
    #[must_use]
    pub fn serialize(&self) -> [u8; SERIALIZED_SIZE] {
        self.snapshot().encode()
    }

    /// Rebuild a hasher from [`serialize`](Self::serialize) output.
    ///
    /// The result runs on the process-wide backend and resets to seed 0.
    ///
    /// # Errors
    /// [`StateError::InvalidMagic`] or [`StateError::InvalidLength`] for a
    /// malformed buffer.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, StateError> {
        let snap = Snapshot::decode(bytes)?;
        let mut hasher = Self::new();
        hasher.apply(&snap);
        Ok(hasher)
    }

    /// Replace this hasher's state with a serialized one, keeping its seed
    /// and backend. On error the hasher is left untouched.
    ///
    /// # Errors
    /// Same as [`deserialize`](Self::deserialize).
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        let snap = Snapshot::decode(bytes)?;
        self.apply(&snap);
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            acc: self.acc,
            total_len: self.total_len,
            carry: self.carry,
            carry_len: self.carry_len,
        }
    }

    fn apply(&mut self, snap: &Snapshot) {
        self.acc = snap.acc;
        self.total_len = snap.total_len;
        self.carry = snap.carry;
        self.carry_len = snap.carry_len;
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Xxh64Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl core::hash::Hasher for Xxh64Hasher {
    fn write(&mut self, bytes: &[u8]) {
        Self::write(self, bytes);
    }

    fn finish(&self) -> u64 {
        self.finalize()
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Xxh64Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(Self::write(self, buf))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Xxh64Hasher {
    type OutputSize = U8;
}

#[cfg(feature = "digest-trait")]
impl Update for Xxh64Hasher {
    fn update(&mut self, data: &[u8]) {
        self.write(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Xxh64Hasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.digest());
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for Xxh64Hasher {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.digest());
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Xxh64Hasher {
    fn reset(&mut self) {
        Self::reset(self);
    }
}

// =============================================================================
// BUILD HASHER
// =============================================================================

/// Seeded [`BuildHasher`] for hash maps.
///
/// ```rust
/// use std::collections::HashMap;
/// use xxh64::Xxh64Builder;
///
/// let mut map: HashMap<&str, u32, Xxh64Builder> = HashMap::with_hasher(Xxh64Builder::new(7));
/// map.insert("answer", 42);
/// assert_eq!(map["answer"], 42);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh64Builder {
    seed: u64,
}

impl Xxh64Builder {
    /// Builder producing hashers with `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BuildHasher for Xxh64Builder {
    type Hasher = Xxh64Hasher;

    fn build_hasher(&self) -> Xxh64Hasher {
        Xxh64Hasher::with_seed(self.seed)
    }
}
