//! Stable identifiers for stations and lines.
//!
//! Identifiers wrap an `Arc<str>` so handles are cheap to clone and compare by
//! value, which keeps values rebuilt from storage equal to the originals.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

impl_identifier!(StationIdentifier);
impl_identifier!(LineIdentifier);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuilt_identifier_matches_stored() {
        let stored = StationIdentifier::new("gangnam");
        let rebuilt: StationIdentifier = String::from("gangnam").into();
        let handle = stored.clone();

        assert_eq!(stored, rebuilt);
        assert!(!Arc::ptr_eq(&stored.0, &rebuilt.0));
        assert!(Arc::ptr_eq(&stored.0, &handle.0));
        assert_ne!(stored, StationIdentifier::new("yeoksam"));
    }

    #[test]
    fn test_line_ids_as_map_keys() {
        use std::collections::HashSet;

        let ids: HashSet<LineIdentifier> = (1..=3).map(|n| LineIdentifier::new(n.to_string())).collect();

        assert!(ids.contains(&LineIdentifier::new("2")));
        assert!(!ids.contains(&LineIdentifier::new("02")));
        assert_eq!(LineIdentifier::new("2").as_str(), "2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_identifier_serializes_as_plain_string() {
        let id = StationIdentifier::new("kkachisan");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""kkachisan""#);

        let back: StationIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert_eq!(back.to_string(), "kkachisan");
    }
}
