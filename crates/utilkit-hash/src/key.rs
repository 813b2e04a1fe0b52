//! Adapter for keying std collections on a wide hash.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::ops::Deref;

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

use crate::mix::combine;
use crate::wide::WideHashEq;

/// Map keyed on the wide hash of `K`.
pub type WideHashMap<K, V> = HashMap<WideKey<K>, V, BuildHasherDefault<WideKeyHasher>>;

/// Set keyed on the wide hash of `K`.
pub type WideHashSet<K> = HashSet<WideKey<K>, BuildHasherDefault<WideKeyHasher>>;

/// Wraps a `WideHashEq` value so it can be used as a std map or set key.
///
/// `Hash` feeds the single `u64` from `wide_hash`, and `Eq` delegates to
/// `wide_eq`, so the std container inherits the contract's consistency.
#[derive(Clone, Copy, Default)]
pub struct WideKey<K>(pub K);

impl<K> WideKey<K> {
    /// Wraps a key.
    pub fn new(key: K) -> Self {
        Self(key)
    }

    /// Returns the wrapped key.
    pub fn into_inner(self) -> K {
        self.0
    }
}

impl<K> Deref for WideKey<K> {
    type Target = K;

    fn deref(&self) -> &K {
        &self.0
    }
}

impl<K: fmt::Debug> fmt::Debug for WideKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WideKey").field(&self.0).finish()
    }
}

impl<K: WideHashEq> PartialEq for WideKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0.wide_eq(&other.0)
    }
}

impl<K: WideHashEq> Eq for WideKey<K> {}

impl<K: WideHashEq> Hash for WideKey<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.wide_hash());
    }
}

/// Hasher that passes a `WideKey`'s 64-bit hash through unchanged.
///
/// Any later writes, and arbitrary byte writes, are mixed in with xxh3 so the
/// hasher stays usable for types other than `WideKey`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WideKeyHasher {
    state: Option<u64>,
}

impl Hasher for WideKeyHasher {
    fn finish(&self) -> u64 {
        self.state.unwrap_or_default()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = Some(match self.state {
            Some(seed) => xxh3_64_with_seed(bytes, seed),
            None => xxh3_64(bytes),
        });
    }

    fn write_u64(&mut self, value: u64) {
        self.state = Some(match self.state {
            Some(seed) => combine(seed, value),
            None => value,
        });
    }
}
