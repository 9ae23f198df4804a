//! AVX-512 Kernel Module
//!
//! Vectorized block processing; finalization is shared with the portable kernel.

mod compress;

// Re-export public API
pub use compress::process_blocks;
