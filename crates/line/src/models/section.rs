use crate::models::station::Station;
use crate::models::types::*;

/// A directed connection between two adjacent stations of a line.
///
/// Sections are values: a split replaces the affected section with a new one
/// rather than editing it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Section {
    /// Returns `Err` if both endpoints are the same station.
    pub fn new(up_station: Station, down_station: Station, distance: Distance) -> Result<Self> {
        let section = Self {
            up_station,
            down_station,
            distance,
        };

        if section.up_station == section.down_station {
            return Err(SectionError::invalid(InvalidSectionReason::SameStation, &section));
        }

        Ok(section)
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn touches(&self, station: &Station) -> bool {
        &self.up_station == station || &self.down_station == station
    }

    /// The part of `self` left after `inserted` takes over its front.
    pub(crate) fn shortened_from_front(&self, inserted: &Section) -> Self {
        Self {
            up_station: inserted.down_station.clone(),
            down_station: self.down_station.clone(),
            distance: self.distance.saturating_sub(inserted.distance),
        }
    }

    /// The part of `self` left after `inserted` takes over its back.
    pub(crate) fn shortened_from_back(&self, inserted: &Section) -> Self {
        Self {
            up_station: self.up_station.clone(),
            down_station: inserted.up_station.clone(),
            distance: self.distance.saturating_sub(inserted.distance),
        }
    }
}
