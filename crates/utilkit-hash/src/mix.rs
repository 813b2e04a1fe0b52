//! Helpers for building wide hashes out of several fields.

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// Hashes a byte slice with xxh3 (64-bit).
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    xxh3_64(bytes)
}

/// Mixes `hash` into `seed`.
///
/// Order-sensitive, so `combine(combine(s, a), b)` generally differs from
/// `combine(combine(s, b), a)`. Use it to fold the wide hashes of several
/// fields into one.
pub fn combine(seed: u64, hash: u64) -> u64 {
    xxh3_64_with_seed(&hash.to_le_bytes(), seed)
}
