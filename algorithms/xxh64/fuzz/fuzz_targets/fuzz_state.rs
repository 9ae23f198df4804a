#![no_main]

use libfuzzer_sys::fuzz_target;
use xxh64::{Hasher, StateError, SERIALIZED_SIZE};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // 1. ARBITRARY BUFFERS
    // =============================================================================

    // Decoding must never panic, and must accept only well-formed buffers
    match Hasher::deserialize(data) {
        Ok(hasher) => {
            assert_eq!(data.len(), SERIALIZED_SIZE);
            let _ = hasher.finalize();
        }
        Err(StateError::InvalidMagic) => {
            assert!(data.len() < 4 || &data[..4] != b"xxh\x06");
        }
        Err(StateError::InvalidLength { actual, .. }) => {
            assert_ne!(actual, SERIALIZED_SIZE);
        }
    }

    // =============================================================================
    // 2. CHECKPOINT / RESUME
    // =============================================================================

    let cut = data.first().map_or(0, |&b| usize::from(b) % (data.len() + 1));
    let (head, tail) = data.split_at(cut);

    let mut hasher = Hasher::new();
    hasher.write(head);
    let mut resumed = Hasher::deserialize(&hasher.serialize()).expect("own state must decode");
    resumed.write(tail);

    assert_eq!(
        resumed.finalize(),
        xxh64::hash(data),
        "Resumed hasher diverged from one-shot"
    );
});
