//! Hardware Dispatcher
//!
//! Selects the block kernel (AVX-512 or scalar) once per process. Every
//! kernel produces identical lanes, so the choice is performance-only.

use crate::kernels;
use crate::kernels::constants::BLOCK_SIZE;
use crate::types::{Backend, BlockFn, Lanes};

#[cfg(feature = "std")]
use std::sync::OnceLock;

#[cfg(feature = "std")]
static SELECTED: OnceLock<Backend> = OnceLock::new();

// =============================================================================
// CAPABILITY
// =============================================================================

/// AVX-512F/VL/DQ (+ AVX2) present on this CPU.
#[cfg(all(feature = "std", target_arch = "x86_64"))]
fn has_wide_multiply() -> bool {
    is_x86_feature_detected!("avx2")
        && is_x86_feature_detected!("avx512f")
        && is_x86_feature_detected!("avx512vl")
        && is_x86_feature_detected!("avx512dq")
}

/// Compile-time capability when runtime detection is unavailable (`no_std`).
#[cfg(not(all(feature = "std", target_arch = "x86_64")))]
const fn has_wide_multiply() -> bool {
    cfg!(all(
        target_arch = "x86_64",
        target_feature = "avx2",
        target_feature = "avx512f",
        target_feature = "avx512vl",
        target_feature = "avx512dq"
    ))
}

/// `AuthenticAMD` vendor string in CPUID leaf 0.
#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
#[allow(unused_unsafe)]
fn is_amd() -> bool {
    // SAFETY: CPUID leaf 0 is available on every x86_64 processor.
    let leaf = unsafe { core::arch::x86_64::__cpuid(0) };
    leaf.ebx == 0x6874_7541 // "Auth"
        && leaf.edx == 0x6974_6e65 // "enti"
        && leaf.ecx == 0x444d_4163 // "cAMD"
}

#[cfg(not(target_arch = "x86_64"))]
const fn is_amd() -> bool {
    false
}

impl Backend {
    /// Whether this CPU can execute the backend.
    #[must_use]
    pub fn is_available(self) -> bool {
        match self {
            Self::Scalar => true,
            Self::Avx512 => has_wide_multiply(),
        }
    }

    /// This backend if available, otherwise [`Backend::Scalar`].
    #[must_use]
    pub fn resolve(self) -> Self {
        if self.is_available() {
            self
        } else {
            Self::Scalar
        }
    }

    /// Fastest backend for this CPU.
    ///
    /// AMD parts stay on the scalar kernel: their scalar 64-bit multiply has
    /// lower latency than `VPMULLQ`.
    #[must_use]
    pub fn detect() -> Self {
        if has_wide_multiply() && !is_amd() {
            Self::Avx512
        } else {
            Self::Scalar
        }
    }

    /// Block kernel for this backend (scalar if unavailable).
    #[must_use]
    pub fn kernel(self) -> BlockFn {
        match self.resolve() {
            Self::Avx512 => safe_avx512_wrapper,
            Self::Scalar => kernels::portable::process_blocks,
        }
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Process-wide backend, detected on first use and fixed afterwards.
#[must_use]
pub fn selected_backend() -> Backend {
    #[cfg(feature = "std")]
    {
        *SELECTED.get_or_init(|| {
            let backend = Backend::detect();
            tracing::debug!(
                %backend,
                avx512_capable = Backend::Avx512.is_available(),
                "selected xxh64 block kernel"
            );
            backend
        })
    }
    #[cfg(not(feature = "std"))]
    {
        Backend::detect()
    }
}

/// Returns the block kernel for this process.
#[must_use]
pub fn get_block_kernel() -> BlockFn {
    selected_backend().kernel()
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AVX-512 wrapper with the safe [`BlockFn`] signature.
#[inline]
#[allow(unsafe_code)]
fn safe_avx512_wrapper(acc: &mut Lanes, extra: Option<&[u8; BLOCK_SIZE]>, input: &[u8]) -> usize {
    #[cfg(target_arch = "x86_64")]
    // SAFETY: Only handed out by `Backend::kernel` after `is_available`
    // confirmed AVX2 + AVX-512F/VL/DQ.
    unsafe {
        kernels::avx512::process_blocks(acc, extra, input)
    }
    #[cfg(not(target_arch = "x86_64"))]
    kernels::portable::process_blocks(acc, extra, input)
}
