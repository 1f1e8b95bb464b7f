//! Line data models and errors.

pub mod section;
pub mod station;
pub mod types;

// Re-exports for convenience
pub use section::Section;
pub use station::Station;
pub use types::{
    Distance, ErrorKind, InvalidSectionReason, LineError, LineResult, Result, SectionError,
};
