//! Payload types and errors shared across the crate.

use std::fmt;

use crate::identifiers::*;
use crate::models::section::Section;

// ============================================================================
// Payload
// ============================================================================

/// Length of a section in line-specific units.
///
/// Carried as opaque payload: ordering never looks at it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Distance(u32);

impl Distance {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn saturating_sub(self, other: Distance) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl From<u32> for Distance {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why a section was refused by a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidSectionReason {
    /// Neither endpoint is on the path yet.
    NeitherStationRegistered,
    /// Both endpoints are already on the path.
    AlreadyConnected,
    /// Up- and down-station are the same station.
    SameStation,
}

impl fmt::Display for InvalidSectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NeitherStationRegistered => "neither up nor down station is registered on the line",
            Self::AlreadyConnected => "up and down stations are already registered on the line",
            Self::SameStation => "up and down stations must differ",
        };
        f.write_str(message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("Invalid section {up} -> {down}: {reason}")]
    InvalidSection {
        reason: InvalidSectionReason,
        up: StationIdentifier,
        down: StationIdentifier,
    },

    #[error("Section path is inconsistent: {0}")]
    PathInconsistency(String),
}

impl SectionError {
    pub(crate) fn invalid(reason: InvalidSectionReason, section: &Section) -> Self {
        Self::InvalidSection {
            reason,
            up: section.up_station().id.clone(),
            down: section.down_station().id.clone(),
        }
    }

    /// The refusal reason, if this is a rejected input rather than a defect.
    pub fn invalid_reason(&self) -> Option<InvalidSectionReason> {
        match self {
            Self::InvalidSection { reason, .. } => Some(*reason),
            Self::PathInconsistency(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SectionError>;

/// Coarse classification for whoever turns errors into responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was refused; retrying the same input fails again.
    InvalidInput,
    NotFound,
    /// Stored data violates an invariant.
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("Line name already in use: {0}")]
    DuplicateName(String),

    #[error("Line not found: {0}")]
    LineNotFound(LineIdentifier),

    #[error(transparent)]
    Section(#[from] SectionError),
}

impl LineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateName(_) => ErrorKind::InvalidInput,
            Self::LineNotFound(_) => ErrorKind::NotFound,
            Self::Section(SectionError::InvalidSection { .. }) => ErrorKind::InvalidInput,
            Self::Section(SectionError::PathInconsistency(_)) => ErrorKind::Internal,
        }
    }
}

pub type LineResult<T> = std::result::Result<T, LineError>;
