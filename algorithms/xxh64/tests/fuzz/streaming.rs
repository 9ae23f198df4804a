use bolero::check;
use xxh64::{hash, Hasher};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash(data);

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Write
        let mut hasher = Hasher::new();
        hasher.write(data);
        assert_eq!(hasher.finalize(), expected, "Streaming single write mismatch");

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut hasher = Hasher::new();
            for b in data {
                hasher.write(&[*b]);
            }
            assert_eq!(hasher.finalize(), expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new();
                let (first, second) = data.split_at(split_idx);
                hasher.write(first);
                hasher.write(second);
                assert_eq!(hasher.finalize(), expected, "Split at {split_idx} mismatch");
            }
        }

        // 4. Chunk size derived from the data itself
        if let Some(&first) = data.first() {
            let chunk_size = usize::from(first % 67) + 1;
            let mut hasher = Hasher::new();
            for chunk in data.chunks(chunk_size) {
                hasher.write(chunk);
            }
            assert_eq!(hasher.finalize(), expected, "Chunk size {chunk_size} mismatch");
        }
    });
}
