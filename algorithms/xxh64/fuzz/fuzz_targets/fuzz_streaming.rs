#![no_main]

use libfuzzer_sys::fuzz_target;
use xxh64::{Backend, Hasher};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    // First 8 bytes select the seed, the 9th the chunk size (1 to 64)
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&data[..8]);
    let seed = u64::from_le_bytes(seed);
    let chunk_size = (data[8] as usize % 64) + 1;
    let msg = &data[9..];

    // One-shot result as reference
    let reference_hash = xxh64::hash_seeded(msg, seed);

    // Every backend, fed in arbitrary small chunks
    for backend in [Backend::Scalar, Backend::Avx512] {
        let mut hasher = Hasher::with_backend(seed, backend);
        for chunk in msg.chunks(chunk_size) {
            hasher.write(chunk);
        }

        assert_eq!(
            reference_hash,
            hasher.finalize(),
            "Streaming ({backend}) and one-shot approaches differ!"
        );
    }
});
