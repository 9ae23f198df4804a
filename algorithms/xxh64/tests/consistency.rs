//! Consistency & Regression Tests
//!
//! Verifies internal logic consistency, boundary conditions, and streaming invariants.
//! - Streaming vs One-shot consistency
//! - Block boundary sizes (carry fill, carry flush, direct block runs)
//! - Repeatable finalize and continued writes
//! - Reset idempotence

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use xxh64::{hash, Hasher, BLOCK_SIZE};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
}

// =============================================================================
// STREAMING CONSISTENCY
// =============================================================================

#[test]
fn test_streaming_consistency() {
    // Verify that one-shot and streaming produce SAME results around every
    // block boundary up to a few blocks.
    for size in 0..=(4 * BLOCK_SIZE + 1) {
        let input = pattern(size);
        let h_oneshot = hash(&input);

        let mut hasher = Hasher::new();
        hasher.write(&input);
        let h_streaming = hasher.finalize();

        assert_eq!(
            h_oneshot, h_streaming,
            "CONSISTENCY FAILURE at size {size}: one-shot and streaming produced different hashes!",
        );
    }
}

#[test]
fn test_every_two_way_split() {
    let input = pattern(3 * BLOCK_SIZE + 5);
    let expected = hash(&input);

    for split in 0..=input.len() {
        let (first, second) = input.split_at(split);
        let mut hasher = Hasher::new();
        hasher.write(first);
        hasher.write(second);
        assert_eq!(hasher.finalize(), expected, "Split at {split} mismatch");
    }
}

#[test]
fn test_uneven_chunk_sequences() {
    // Chunk lengths chosen to leave every carry length behind at some point
    // and to complete carries with runs of several blocks.
    let input = pattern(2048);
    let expected = hash(&input);

    let stride_sets: [&[usize]; 4] = [
        &[1, 31, 32, 33],
        &[7, 64, 3, 100],
        &[31, 1, 30, 2, 29, 3],
        &[200, 1, 95],
    ];

    for stride_set in stride_sets {
        let mut hasher = Hasher::new();
        let mut offset = 0;
        let mut i = 0;
        while offset < input.len() {
            let len = stride_set[i % stride_set.len()].min(input.len() - offset);
            assert_eq!(hasher.write(&input[offset..offset + len]), len);
            offset += len;
            i += 1;
        }
        assert_eq!(hasher.finalize(), expected, "Stride set {stride_set:?} mismatch");
    }
}

// =============================================================================
// FINALIZE SEMANTICS
// =============================================================================

#[test]
fn test_finalize_then_continue() {
    let input = pattern(100);
    let mut hasher = Hasher::new();

    for (i, byte) in input.iter().enumerate() {
        hasher.write(&[*byte]);
        // Intermediate digests must match the one-shot hash of the prefix.
        assert_eq!(hasher.finalize(), hash(&input[..=i]), "Prefix {i} mismatch");
    }
    assert_eq!(hasher.total_len(), 100);
}

#[test]
fn test_short_input_uses_degenerate_path() {
    // Exactly one block flips from the v3 + P5 path to the lane merge.
    let below = hash(&[0u8; BLOCK_SIZE - 1]);
    let at = hash(&[0u8; BLOCK_SIZE]);
    assert_ne!(below, at);
}

// =============================================================================
// RESET
// =============================================================================

#[test]
fn test_reset_idempotent_restart() {
    let parts: [&[u8]; 7] = [
        b"The quic",
        b"k br",
        b"o",
        b"wn fox jumps",
        b" ov",
        b"er the lazy ",
        b"dog.",
    ];
    let mut hasher = Hasher::new();
    for part in parts {
        hasher.write(part);
    }
    let h0 = hasher.finalize();

    hasher.reset();
    hasher.write(&parts.concat());
    let h1 = hasher.finalize();

    assert_eq!(h0, h1);
    assert_eq!(h0, hash(b"The quick brown fox jumps over the lazy dog."));
}

#[test]
fn test_padding_correctness() {
    // "A" and "A\0" differ only by the committed length.
    assert_ne!(hash(b"A"), hash(b"A\0"));
}
