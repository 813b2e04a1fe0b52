//! The wide-hash equality contract.

use xxhash_rust::xxh3::xxh3_64;

use crate::mix::combine;

/// Hash of `None`; `Some` values are folded in with a different seed.
const NONE_HASH: u64 = 0;
const SOME_SEED: u64 = 1;

/// Custom equality paired with a 64-bit hash.
///
/// Implementors must keep the two consistent: whenever `a.wide_eq(b)` is
/// true, `a.wide_hash() == b.wide_hash()`. The reverse is not required;
/// unequal values may collide.
pub trait WideHashEq<Rhs: ?Sized = Self> {
    /// Returns true if `self` and `other` are equal under this contract.
    fn wide_eq(&self, other: &Rhs) -> bool;

    /// Returns the 64-bit hash of `self`.
    fn wide_hash(&self) -> u64;
}

macro_rules! impl_wide_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WideHashEq for $ty {
                fn wide_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn wide_hash(&self) -> u64 {
                    xxh3_64(&self.to_le_bytes())
                }
            }
        )*
    };
}

impl_wide_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl WideHashEq for bool {
    fn wide_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn wide_hash(&self) -> u64 {
        xxh3_64(&[u8::from(*self)])
    }
}

impl WideHashEq for char {
    fn wide_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn wide_hash(&self) -> u64 {
        xxh3_64(&u32::from(*self).to_le_bytes())
    }
}

impl WideHashEq for str {
    fn wide_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn wide_hash(&self) -> u64 {
        xxh3_64(self.as_bytes())
    }
}

impl WideHashEq for String {
    fn wide_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn wide_hash(&self) -> u64 {
        self.as_str().wide_hash()
    }
}

impl<T: WideHashEq> WideHashEq for Option<T> {
    fn wide_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.wide_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn wide_hash(&self) -> u64 {
        match self {
            Some(value) => combine(SOME_SEED, value.wide_hash()),
            None => NONE_HASH,
        }
    }
}

impl<A: WideHashEq, B: WideHashEq> WideHashEq for (A, B) {
    fn wide_eq(&self, other: &Self) -> bool {
        self.0.wide_eq(&other.0) && self.1.wide_eq(&other.1)
    }

    fn wide_hash(&self) -> u64 {
        combine(combine(0, self.0.wide_hash()), self.1.wide_hash())
    }
}
