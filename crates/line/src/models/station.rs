use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::identifiers::StationIdentifier;

/// A station referenced by a line.
///
/// Identity is the identifier alone; two values with the same id are the same
/// station even if their display names differ.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
}

impl Station {
    pub fn new(id: impl Into<StationIdentifier>, name: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
