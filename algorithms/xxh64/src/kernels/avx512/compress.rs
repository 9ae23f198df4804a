//! AVX-512 Block Compression
//!
//! All four lanes live in one YMM register (`v1` in the low 64 bits). One
//! block is one unaligned 256-bit load, so a round is four instructions:
//! `VPMULLQ`, `VPADDQ`, `VPROLQ`, `VPMULLQ`.

#![allow(clippy::cast_possible_wrap)]

use crate::kernels::constants::{BLOCK_SIZE, PRIME1, PRIME2};
use crate::types::Lanes;

use core::arch::x86_64::{
    __m256i, _mm256_add_epi64, _mm256_loadu_si256, _mm256_mullo_epi64, _mm256_rol_epi64,
    _mm256_set1_epi64x, _mm256_storeu_si256,
};

// =============================================================================
// ROUND
// =============================================================================

/// One XXH64 round on all four lanes.
// SAFETY: Requires AVX-512F/VL/DQ (enforced by caller). Register-only.
#[inline]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "avx512f")]
#[target_feature(enable = "avx512vl")]
#[target_feature(enable = "avx512dq")]
#[allow(unsafe_code)]
unsafe fn round(state: __m256i, input: __m256i, prime1: __m256i, prime2: __m256i) -> __m256i {
    let mixed = _mm256_add_epi64(state, _mm256_mullo_epi64(input, prime2));
    _mm256_mullo_epi64(_mm256_rol_epi64::<31>(mixed), prime1)
}

// =============================================================================
// BLOCK LOOP
// =============================================================================

/// AVX-512 block kernel. Same contract as the scalar kernel.
///
/// # Safety
/// The CPU must support AVX2, AVX-512F, AVX-512VL and AVX-512DQ.
// SAFETY: Loads read exactly 32 bytes from `extra` (a `[u8; 32]`), from each
// `chunks_exact(32)` slice, and from/to `acc` (a `[u64; 4]`); all unaligned.
#[target_feature(enable = "avx2")]
#[target_feature(enable = "avx512f")]
#[target_feature(enable = "avx512vl")]
#[target_feature(enable = "avx512dq")]
#[allow(unsafe_code)]
pub unsafe fn process_blocks(
    acc: &mut Lanes,
    extra: Option<&[u8; BLOCK_SIZE]>,
    input: &[u8],
) -> usize {
    let prime1 = _mm256_set1_epi64x(PRIME1 as i64);
    let prime2 = _mm256_set1_epi64x(PRIME2 as i64);
    let mut state = _mm256_loadu_si256(acc.as_ptr().cast());

    if let Some(block) = extra {
        state = round(
            state,
            _mm256_loadu_si256(block.as_ptr().cast()),
            prime1,
            prime2,
        );
    }

    let blocks = input.chunks_exact(BLOCK_SIZE);
    let consumed = input.len() - blocks.remainder().len();
    for block in blocks {
        state = round(
            state,
            _mm256_loadu_si256(block.as_ptr().cast()),
            prime1,
            prime2,
        );
    }

    _mm256_storeu_si256(acc.as_mut_ptr().cast(), state);
    consumed
}
