//! Display notification boundary.
//!
//! The registry announces shape additions and removals to an external
//! rendering collaborator through the [`AreaDisplay`] trait. The calls are
//! one-way and best-effort: the registry does not observe their outcome
//! and never retries them, so implementations must not panic to signal
//! failure.

use super::shape::AreaType;

/// Rendering collaborator notified of area lifecycle changes.
///
/// Implementations must be `Send + Sync` so a host can share one display
/// handle across its rendering and command-processing threads.
pub trait AreaDisplay: Send + Sync {
    /// An area of `kind` now exists under `name`, with the flat coordinate
    /// sequence it was defined from. Also fired on redefinition.
    fn announce_shape(&self, kind: AreaType, name: &str, coordinates: &[f64]);

    /// The area under `name` no longer exists.
    fn retract_shape(&self, name: &str);
}

/// Display that ignores all notifications.
///
/// Used when the host runs without a rendering surface (headless batch
/// simulation, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl AreaDisplay for NullDisplay {
    fn announce_shape(&self, _kind: AreaType, _name: &str, _coordinates: &[f64]) {}

    fn retract_shape(&self, _name: &str) {}
}
