//! XXH64 Basic Example
//!
//! Minimal usage: `let hash = xxh64::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::expect_used)]

fn main() {
    let data = b"Hello, World!";
    let hash = xxh64::hash(data);

    println!("Data:    {:?}", String::from_utf8_lossy(data));
    println!("Hash:    {hash:016x}");
    println!("Backend: {}", xxh64::active_backend());

    // Same digest, fed in pieces and checkpointed halfway
    let mut hasher = xxh64::Hasher::new();
    hasher.write(b"Hello, ");
    let saved = hasher.serialize();

    let mut resumed = xxh64::Hasher::deserialize(&saved).expect("state produced by serialize");
    resumed.write(b"World!");
    println!("Resumed: {}", hex::encode(resumed.digest()));
}
