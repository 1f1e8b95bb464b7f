//! The set of sections making up one line.
//!
//! Every successful [`SectionPath::add`] leaves the sections forming a single
//! simple path: each station is the up-station of at most one section and the
//! down-station of at most one section, and every station is reachable from
//! the first one.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{types::*, Section, Station};

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SectionPath {
    sections: Vec<Section>,
}

impl SectionPath {
    /// Create an empty path
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Build a path by adding `sections` one by one, in order.
    pub fn try_from_sections(sections: impl IntoIterator<Item = Section>) -> Result<Self> {
        let mut path = Self::new();
        for section in sections {
            path.add(section)?;
        }
        Ok(path)
    }

    /// Skips validation; used to exercise traversal on broken edge sets.
    #[cfg(test)]
    pub(crate) fn from_sections_unchecked(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in storage order, which is not travel order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every station on the path, unordered.
    pub fn stations(&self) -> HashSet<&Station> {
        self.sections
            .iter()
            .flat_map(|s| [s.up_station(), s.down_station()])
            .collect()
    }

    pub fn contains_station(&self, station: &Station) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    /// Add a section, splitting an existing one if the new section lands inside it.
    ///
    /// The first section of an empty path is always accepted. Afterwards a
    /// section must share exactly one station with the path.
    pub fn add(&mut self, section: Section) -> Result<()> {
        if self.sections.is_empty() {
            debug!(
                up = %section.up_station().id,
                down = %section.down_station().id,
                "first section establishes the path"
            );
            self.sections.push(section);
            return Ok(());
        }

        self.validate(&section)?;

        if let Some(index) = self.position(|s| s.up_station() == section.up_station()) {
            debug!(
                up = %section.up_station().id,
                down = %section.down_station().id,
                "splitting section after its up-station"
            );
            self.sections[index] = self.sections[index].shortened_from_front(&section);
        } else if let Some(index) = self.position(|s| s.down_station() == section.down_station()) {
            debug!(
                up = %section.up_station().id,
                down = %section.down_station().id,
                "splitting section before its down-station"
            );
            self.sections[index] = self.sections[index].shortened_from_back(&section);
        } else {
            debug!(
                up = %section.up_station().id,
                down = %section.down_station().id,
                "extending path at an open end"
            );
        }

        self.sections.push(section);
        Ok(())
    }

    fn validate(&self, section: &Section) -> Result<()> {
        let stations = self.stations();
        let reason = match (
            stations.contains(section.up_station()),
            stations.contains(section.down_station()),
        ) {
            (false, false) => InvalidSectionReason::NeitherStationRegistered,
            (true, true) => InvalidSectionReason::AlreadyConnected,
            _ => return Ok(()),
        };

        debug!(
            up = %section.up_station().id,
            down = %section.down_station().id,
            %reason,
            "rejecting section"
        );
        Err(SectionError::invalid(reason, section))
    }

    fn position(&self, predicate: impl Fn(&Section) -> bool) -> Option<usize> {
        self.sections.iter().position(predicate)
    }
}

/// Paths are equal when they hold the same sections, in any order.
impl PartialEq for SectionPath {
    fn eq(&self, other: &Self) -> bool {
        let ours: HashSet<&Section> = self.sections.iter().collect();
        let theirs: HashSet<&Section> = other.sections.iter().collect();
        ours == theirs
    }
}

impl Eq for SectionPath {}
