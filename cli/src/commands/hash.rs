//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use xxh64::{Backend, Hasher};

const READ_BUFFER: usize = 128 * 1024;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum BackendArg {
    /// Detected once per process
    Auto,
    /// Portable 64-bit kernel
    Scalar,
    /// AVX-512 kernel (falls back to scalar if unsupported)
    Avx512,
}

impl BackendArg {
    pub fn resolve(self) -> Backend {
        match self {
            Self::Auto => xxh64::active_backend(),
            Self::Scalar => Backend::Scalar,
            Self::Avx512 => {
                if !Backend::Avx512.is_available() {
                    tracing::warn!("AVX-512 not supported on this CPU, using scalar kernel");
                }
                Backend::Avx512.resolve()
            }
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct HashOptions {
    pub seed: u64,
    pub backend: Backend,
}

/// Hash a reader to its big-endian hex digest.
pub fn hash_reader(reader: &mut impl Read, options: HashOptions) -> std::io::Result<String> {
    let mut hasher = Hasher::with_backend(options.seed, options.backend);
    let mut buffer = vec![0u8; READ_BUFFER];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.write(&buffer[..n]);
    }

    Ok(hex::encode(hasher.digest()))
}

/// Hash a path, `-` meaning stdin.
pub fn hash_path(path: &Path, options: HashOptions) -> Result<String> {
    if path == Path::new("-") {
        return hash_reader(&mut std::io::stdin().lock(), options).context("Failed to read stdin");
    }

    let mut file =
        std::fs::File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    hash_reader(&mut file, options).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], options: HashOptions) -> Result<()> {
    // `collect` keeps the input order
    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|path| (path, hash_path(path, options)))
        .collect();

    let mut failed = 0usize;
    for (path, result) in results {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, path.display()),
            Err(e) => {
                eprintln!("Error: {e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
