//! # subway-line
//!
//! Keeps the sections of a subway line as one simple path and lists its
//! stations in travel order.
//!
//! ## Features
//!
//! - **Mid-path insertion**: a section landing inside an existing one splits it
//! - **Validation**: disconnected and already-connected sections are refused
//! - **Travel order**: stations are rebuilt from the sections on demand
//! - **Line registry**: in-memory line management with error classification
//!
//! ## Example
//!
//! ```
//! use subway_line::prelude::*;
//!
//! let a = Station::new("a", "Hwagok");
//! let b = Station::new("b", "Kkachisan");
//! let c = Station::new("c", "Sinjeong");
//! let d = Station::new("d", "Mokdong");
//!
//! let mut path = SectionPath::new();
//! path.add(Section::new(a.clone(), b.clone(), Distance::new(10))?)?;
//! path.add(Section::new(b.clone(), c.clone(), Distance::new(10))?)?;
//!
//! // Lands inside a -> b
//! path.add(Section::new(a.clone(), d.clone(), Distance::new(4))?)?;
//!
//! assert_eq!(path.sorted_stations()?, vec![a, d, b, c]);
//! # Ok::<(), SectionError>(())
//! ```

pub mod identifiers;
pub mod models;
pub mod path;
pub mod registry;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{section::Section, station::Station, types::*};
    pub use crate::path::SectionPath;
    pub use crate::registry::{Line, LineRegistry};
}

pub use prelude::*;
