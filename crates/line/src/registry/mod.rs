//! In-memory line management.

pub mod line;
pub mod line_registry;

pub use line::Line;
pub use line_registry::LineRegistry;
