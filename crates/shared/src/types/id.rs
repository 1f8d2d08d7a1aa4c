//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `DonationId` where a `ProjectId` is expected.
//! IDs are positive integers assigned by the store.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw integer.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the inner integer.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(ProjectId, "Unique identifier for a fundraising project.");
typed_id!(DonationId, "Unique identifier for a donation.");
typed_id!(ExpenseId, "Unique identifier for an expense.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrip() {
        let id = ProjectId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(ProjectId::from(42), id);
    }

    #[test]
    fn test_typed_id_display() {
        assert_eq!(DonationId::new(7).to_string(), "7");
    }

    #[test]
    fn test_typed_id_from_str() {
        assert_eq!(ExpenseId::from_str(" 12 ").unwrap(), ExpenseId::new(12));
        assert!(ExpenseId::from_str("twelve").is_err());
    }

    #[test]
    fn test_typed_id_ordering() {
        assert!(ProjectId::new(1) < ProjectId::new(2));
    }

    #[test]
    fn test_typed_id_serializes_as_number() {
        let json = serde_json::to_string(&ProjectId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ProjectId = serde_json::from_str("3").unwrap();
        assert_eq!(back, ProjectId::new(3));
    }
}
