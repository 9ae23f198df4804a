//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::hash::{hash_path, HashOptions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of checking one line.
#[derive(Debug, PartialEq, Eq)]
enum LineStatus {
    Ok,
    Mismatch,
    Error(String),
}

/// Split `"hash  filename"` (two spaces) into its parts.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (hash, path) = line.split_once("  ")?;
    let (hash, path) = (hash.trim(), path.trim());
    (!hash.is_empty() && !path.is_empty()).then_some((hash, path))
}

fn check_entry(expected_hash: &str, file_path: &str, options: HashOptions) -> LineStatus {
    match hash_path(Path::new(file_path), options) {
        Ok(actual) if actual.eq_ignore_ascii_case(expected_hash) => LineStatus::Ok,
        Ok(_) => LineStatus::Mismatch,
        Err(e) => LineStatus::Error(format!("{e:#}")),
    }
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf, options: HashOptions) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((expected_hash, file_path)) = parse_line(line) else {
            tracing::warn!(line, "invalid checksum line");
            continue;
        };
        total += 1;

        match check_entry(expected_hash, file_path, options) {
            LineStatus::Ok => println!("{file_path}: OK"),
            LineStatus::Mismatch => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            LineStatus::Error(e) => {
                println!("{file_path}: FAILED ({e})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
