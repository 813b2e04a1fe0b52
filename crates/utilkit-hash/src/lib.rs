//! Equality with a 64-bit hash for hash-based containers.
//!
//! The native `Hash` trait lets a type feed arbitrary bytes into whatever
//! hasher the container picks. Some containers would rather key on a single
//! wide hash computed by the type itself, which keeps collision rates low in
//! large collections. This crate provides:
//!
//! - **wide**: the `WideHashEq` capability trait and impls for primitives
//! - **key**: `WideKey`, an adapter that lets `WideHashEq` types key std maps
//! - **mix**: helpers for folding field hashes together
//!
//! # Example
//!
//! ```
//! use utilkit_hash::{WideHashEq, WideHashMap, WideKey};
//!
//! let mut counts: WideHashMap<String, u32> = WideHashMap::default();
//! *counts.entry(WideKey::new("apple".to_string())).or_insert(0) += 1;
//! assert_eq!(counts[&WideKey::new("apple".to_string())], 1);
//! assert_eq!("apple".wide_hash(), "apple".to_string().wide_hash());
//! ```

pub mod key;
pub mod mix;
pub mod wide;

pub use key::{WideHashMap, WideHashSet, WideKey, WideKeyHasher};
pub use mix::{combine, hash_bytes};
pub use wide::WideHashEq;
