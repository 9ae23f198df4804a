// =============================================================================
// REFERENCE IMPLEMENTATION CROSS-CHECK (xxhash-rust)
// =============================================================================

use bolero::check;
use xxh64::{hash_seeded, Hasher};

#[test]
fn fuzz_matches_reference() {
    check!()
        .with_type::<(Vec<u8>, u64)>()
        .for_each(|(data, seed)| {
            let reference = xxhash_rust::xxh64::xxh64(data, *seed);

            assert_eq!(hash_seeded(data, *seed), reference, "One-shot vs reference");

            let mut hasher = Hasher::with_seed(*seed);
            for chunk in data.chunks(13) {
                hasher.write(chunk);
            }
            assert_eq!(hasher.finalize(), reference, "Streaming vs reference");
        });
}
