//! Kernel Dispatcher
//!
//! Contains the XXH64 block kernels: portable scalar and x86_64 AVX-512.

#[cfg(target_arch = "x86_64")]
pub mod avx512;
pub mod constants;
pub mod portable;
