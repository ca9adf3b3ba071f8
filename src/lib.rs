//! SkyFence - Airspace area containment for flight simulation
//!
//! This library maintains a registry of named geographic regions ("areas")
//! and answers, for batches of aircraft positions at once, whether each
//! position currently lies inside a given area.
//!
//! # High-Level API
//!
//! The [`area`] module provides the registry facade:
//!
//! ```
//! use skyfence::area::{AreaRegistry, AreaType};
//!
//! let mut registry = AreaRegistry::new();
//!
//! // Define a box from (10, 10) to (20, 20), floor at 0 ft, no ceiling
//! registry
//!     .define_area("A1", AreaType::Box, &[10.0, 10.0, 20.0, 20.0], None, Some(0.0))
//!     .expect("valid box definition");
//!
//! // Test a batch of aircraft positions against it
//! let inside = registry
//!     .check_inside("A1", &[15.0, 5.0], &[15.0, 5.0], &[500.0, 500.0])
//!     .expect("matching input lengths");
//! assert_eq!(inside, vec![true, false]);
//! ```
//!
//! # Components
//!
//! - [`area`] - Shape variants, the area registry, and the display
//!   notification boundary
//! - [`geo`] - Great-circle surface distance used by circular areas
//! - [`logging`] - Logging initialization for host applications

pub mod area;
pub mod geo;
pub mod logging;

/// Version of the SkyFence library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
