use std::sync::Arc;

use crate::identifiers::LineIdentifier;
use crate::models::{types::*, Section, Station};
use crate::path::SectionPath;

/// A named line and the sections it runs over.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Line {
    pub id: LineIdentifier,
    pub name: Arc<str>,
    pub color: Arc<str>,
    pub sections: SectionPath,
}

impl Line {
    pub fn new(id: LineIdentifier, name: impl Into<Arc<str>>, color: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            sections: SectionPath::new(),
        }
    }

    pub fn add_section(&mut self, section: Section) -> Result<()> {
        self.sections.add(section)
    }

    /// Stations in travel order
    pub fn stations(&self) -> Result<Vec<Station>> {
        self.sections.sorted_stations()
    }
}
