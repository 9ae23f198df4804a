//! Execution Engine
//!
//! CPU dispatch for the block kernels.

pub mod dispatcher;

pub use dispatcher::{get_block_kernel, selected_backend};
