//! Airspace area module
//!
//! Maintains named geographic regions with a horizontal footprint and an
//! altitude band, and tests batches of aircraft positions for containment.
//!
//! # Components
//!
//! - [`shape`] - `Shape` variants (box, circle, polygon), `AreaType`,
//!   `AltitudeBand`, and the batch containment test
//! - [`registry`] - `AreaRegistry`, the name-to-shape lifecycle store
//! - [`display`] - `AreaDisplay` notification trait and `NullDisplay`
//! - [`error`] - `ShapeConstructionError` and `DimensionMismatchError`
//!
//! # Usage
//!
//! ```
//! use skyfence::area::{AreaRegistry, AreaType};
//!
//! let mut registry = AreaRegistry::new();
//! registry
//!     .define_area("TMA1", AreaType::Circle, &[52.3, 4.8, 25.0], None, None)
//!     .expect("valid circle definition");
//!
//! assert!(registry.has_area("TMA1"));
//! let inside = registry
//!     .check_inside("TMA1", &[52.3], &[4.8], &[3000.0])
//!     .expect("matching input lengths");
//! assert_eq!(inside, vec![true]);
//! ```

mod display;
mod error;
mod registry;
mod shape;

pub use display::{AreaDisplay, NullDisplay};
pub use error::{DimensionMismatchError, ShapeConstructionError};
pub use registry::AreaRegistry;
pub use shape::{AltitudeBand, AreaType, Shape, ALT_UNBOUNDED_BOTTOM, ALT_UNBOUNDED_TOP};
