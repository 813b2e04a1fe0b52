//! Generic single-value fixture.

use serde::{Deserialize, Serialize};

/// Holds one value of any type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueStub<T> {
    /// The stored value.
    pub value: T,
}

impl<T> ValueStub<T> {
    /// Creates a stub holding `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Consumes the stub and returns the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for ValueStub<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_holds_default_value() {
        let stub: ValueStub<i32> = ValueStub::default();
        assert_eq!(*stub.get(), 0);

        let stub: ValueStub<String> = ValueStub::default();
        assert!(stub.value.is_empty());
    }

    #[test]
    fn test_set_replaces_value() {
        let mut stub = ValueStub::new("first");
        stub.set("second");
        assert_eq!(stub.into_inner(), "second");
    }

    #[test]
    fn test_from_value() {
        let stub: ValueStub<u8> = 7.into();
        assert_eq!(stub.value, 7);
    }
}
