//! Section paths: insertion with splitting, and travel-order traversal.

pub mod sections;
pub mod traversal;

pub use sections::SectionPath;
