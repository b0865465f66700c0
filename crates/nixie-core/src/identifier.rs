//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used for message, activation, and
//! frame identifiers. Diagram models repeat the same opaque ids many times
//! (every message referencing an activation carries its id), so interning
//! keeps comparisons and hash lookups cheap.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// Ids identify elements inside a single diagram model: messages, activation
/// occurrences, and frames. Equality and hashing compare interned symbols,
/// not string contents.
///
/// # Examples
///
/// ```
/// use nixie_core::identifier::Id;
///
/// let message_id = Id::new("msg-1");
/// let activation_id = Id::new("act-7");
///
/// assert_eq!(message_id, Id::new("msg-1"));
/// assert_ne!(message_id, activation_id);
/// assert_eq!(message_id, "msg-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    /// Ids serialize as their interned string, matching the diagram wire format.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Id::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("msg-1");
        let id2 = Id::new("msg-1");
        let id3 = Id::new("msg-2");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "msg-1");
    }

    #[test]
    fn test_display() {
        let id = Id::new("activation-42");
        assert_eq!(id.to_string(), "activation-42");
    }

    #[test]
    fn test_serde_round_trip() {
        let id = Id::new("frame-3");
        let json = serde_json::to_string(&id).expect("Id should serialize");
        assert_eq!(json, "\"frame-3\"");

        let back: Id = serde_json::from_str(&json).expect("Id should deserialize");
        assert_eq!(back, id);
    }
}
