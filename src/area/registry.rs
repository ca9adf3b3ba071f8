//! Area registry - the name-to-shape lifecycle store.
//!
//! The registry owns every currently-defined area and is the only place
//! the display collaborator is notified from; shape values themselves are
//! pure and side-effect free.
//!
//! # Thread Safety
//!
//! The registry is not internally synchronized. Containment queries take
//! `&self` and are safe to run in parallel; definitions, deletions, and
//! resets take `&mut self` and must be serialized against queries by the
//! host, e.g. by confining mutation to the command-processing phase of a
//! simulation tick.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use super::display::{AreaDisplay, NullDisplay};
use super::error::{DimensionMismatchError, ShapeConstructionError};
use super::shape::{AreaType, Shape};

/// Mapping from area name to its shape.
///
/// Names are case-sensitive and unique among currently-defined areas; the
/// command boundary supplies them non-empty. A shape is immutable once
/// defined; redefining a name replaces the entry outright.
pub struct AreaRegistry {
    areas: HashMap<String, Shape>,
    display: Arc<dyn AreaDisplay>,
}

impl AreaRegistry {
    /// Create an empty registry with no rendering surface attached.
    pub fn new() -> Self {
        Self::with_display(Arc::new(NullDisplay))
    }

    /// Create an empty registry that notifies `display` of shape
    /// additions and removals.
    pub fn with_display(display: Arc<dyn AreaDisplay>) -> Self {
        Self {
            areas: HashMap::new(),
            display,
        }
    }

    /// Check if an area with this name exists.
    pub fn has_area(&self, name: &str) -> bool {
        self.areas.contains_key(name)
    }

    /// Define a new area, replacing any existing area under the same name.
    ///
    /// The shape is built per [`Shape::build`]; on success the display is
    /// notified that the area now exists. On failure the registry is left
    /// unmodified.
    pub fn define_area(
        &mut self,
        name: &str,
        kind: AreaType,
        coordinates: &[f64],
        top: Option<f64>,
        bottom: Option<f64>,
    ) -> Result<(), ShapeConstructionError> {
        let shape = Shape::build(kind, coordinates, top, bottom)?;
        self.areas.insert(name.to_string(), shape);
        debug!(area = name, kind = %kind, "Defined area");

        // Pass the shape on to the display collaborator
        self.display.announce_shape(kind, name, coordinates);
        Ok(())
    }

    /// Test a batch of points against the named area.
    ///
    /// Returns one boolean per point, positionally. An unknown name yields
    /// an empty result, not an error: this call alone cannot distinguish
    /// "no matching points" from "no such area". Callers that need the
    /// distinction use [`has_area`](Self::has_area) first.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatchError`] if the slices differ in length.
    pub fn check_inside(
        &self,
        name: &str,
        lats: &[f64],
        lons: &[f64],
        alts: &[f64],
    ) -> Result<Vec<bool>, DimensionMismatchError> {
        match self.areas.get(name) {
            Some(shape) => shape.check_inside(lats, lons, alts),
            None => {
                trace!(area = name, "Containment query for unknown area");
                Ok(Vec::new())
            }
        }
    }

    /// Delete the named area.
    ///
    /// Absent names are a no-op, not an error; the display is only
    /// notified when an entry was actually removed.
    pub fn delete_area(&mut self, name: &str) {
        if self.areas.remove(name).is_some() {
            debug!(area = name, "Deleted area");
            self.display.retract_shape(name);
        }
    }

    /// Remove all areas.
    ///
    /// Does not notify the display per area; bulk-clearing the rendering
    /// surface is the caller's concern.
    pub fn reset(&mut self) {
        debug!(count = self.areas.len(), "Clearing all areas");
        self.areas.clear();
    }

    /// Get the shape defined under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.areas.get(name)
    }

    /// Names of all currently-defined areas, in no particular order.
    pub fn area_names(&self) -> Vec<&str> {
        self.areas.keys().map(String::as_str).collect()
    }

    /// Number of currently-defined areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if no areas are defined.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl Default for AreaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Display fake that records every notification it receives.
    #[derive(Default)]
    struct RecordingDisplay {
        announced: Mutex<Vec<(AreaType, String, Vec<f64>)>>,
        retracted: Mutex<Vec<String>>,
    }

    impl AreaDisplay for RecordingDisplay {
        fn announce_shape(&self, kind: AreaType, name: &str, coordinates: &[f64]) {
            self.announced
                .lock()
                .unwrap()
                .push((kind, name.to_string(), coordinates.to_vec()));
        }

        fn retract_shape(&self, name: &str) {
            self.retracted.lock().unwrap().push(name.to_string());
        }
    }

    fn registry_with_recorder() -> (AreaRegistry, Arc<RecordingDisplay>) {
        let display = Arc::new(RecordingDisplay::default());
        let registry = AreaRegistry::with_display(display.clone());
        (registry, display)
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = AreaRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(!registry.has_area("A1"));
    }

    #[test]
    fn test_define_and_query() {
        let mut registry = AreaRegistry::new();
        registry
            .define_area("A1", AreaType::Box, &[10.0, 10.0, 20.0, 20.0], None, Some(0.0))
            .unwrap();

        assert!(registry.has_area("A1"));
        assert_eq!(
            registry.check_inside("A1", &[15.0], &[15.0], &[500.0]),
            Ok(vec![true])
        );
        assert_eq!(
            registry.check_inside("A1", &[5.0], &[5.0], &[500.0]),
            Ok(vec![false])
        );
    }

    #[test]
    fn test_unknown_area_yields_empty_result() {
        let registry = AreaRegistry::new();
        assert_eq!(registry.check_inside("GHOST", &[], &[], &[]), Ok(vec![]));
        assert_eq!(
            registry.check_inside("GHOST", &[1.0, 2.0], &[1.0, 2.0], &[0.0, 0.0]),
            Ok(vec![]),
            "Unknown names yield empty output for any input size"
        );
    }

    #[test]
    fn test_dimension_mismatch_surfaces_from_known_area() {
        let mut registry = AreaRegistry::new();
        registry
            .define_area("A1", AreaType::Box, &[0.0, 0.0, 1.0, 1.0], None, None)
            .unwrap();

        let result = registry.check_inside("A1", &[1.0], &[1.0, 2.0], &[0.0]);
        assert_eq!(
            result,
            Err(DimensionMismatchError {
                lats: 1,
                lons: 2,
                alts: 1,
            })
        );
    }

    #[test]
    fn test_failed_definition_leaves_registry_unmodified() {
        let (mut registry, display) = registry_with_recorder();

        let result = registry.define_area("BAD", AreaType::Circle, &[0.0, 0.0, -5.0], None, None);
        assert!(result.is_err());
        assert!(!registry.has_area("BAD"));
        assert!(
            display.announced.lock().unwrap().is_empty(),
            "Failed definitions must not reach the display"
        );
    }

    #[test]
    fn test_redefinition_replaces_outright() {
        let mut registry = AreaRegistry::new();
        registry
            .define_area("A1", AreaType::Box, &[10.0, 10.0, 20.0, 20.0], None, None)
            .unwrap();
        registry
            .define_area("A1", AreaType::Circle, &[0.0, 0.0, 50.0], None, None)
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("A1").map(Shape::kind),
            Some(AreaType::Circle),
            "Redefinition overwrites, never merges"
        );
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (mut registry, display) = registry_with_recorder();
        registry
            .define_area("A1", AreaType::Box, &[0.0, 0.0, 1.0, 1.0], None, None)
            .unwrap();

        registry.delete_area("A1");
        assert!(!registry.has_area("A1"));

        // Second delete is a no-op: no error, no extra notification
        registry.delete_area("A1");
        assert_eq!(display.retracted.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_reset_clears_everything_without_retractions() {
        let (mut registry, display) = registry_with_recorder();
        registry
            .define_area("A1", AreaType::Box, &[0.0, 0.0, 1.0, 1.0], None, None)
            .unwrap();
        registry
            .define_area("C1", AreaType::Circle, &[0.0, 0.0, 50.0], None, None)
            .unwrap();

        registry.reset();

        assert!(registry.is_empty());
        assert!(!registry.has_area("A1"));
        assert!(!registry.has_area("C1"));
        assert!(
            display.retracted.lock().unwrap().is_empty(),
            "Reset does not notify per area"
        );
    }

    #[test]
    fn test_display_receives_definition_coordinates() {
        let (mut registry, display) = registry_with_recorder();
        registry
            .define_area("C1", AreaType::Circle, &[0.0, 0.0, 50.0], None, None)
            .unwrap();

        let announced = display.announced.lock().unwrap();
        assert_eq!(announced.len(), 1);
        let (kind, name, coordinates) = &announced[0];
        assert_eq!(*kind, AreaType::Circle);
        assert_eq!(name, "C1");
        assert_eq!(coordinates, &vec![0.0, 0.0, 50.0]);
    }

    #[test]
    fn test_area_names_lists_current_entries() {
        let mut registry = AreaRegistry::new();
        registry
            .define_area("A1", AreaType::Box, &[0.0, 0.0, 1.0, 1.0], None, None)
            .unwrap();
        registry
            .define_area("A2", AreaType::Box, &[0.0, 0.0, 1.0, 1.0], None, None)
            .unwrap();

        let mut names = registry.area_names();
        names.sort_unstable();
        assert_eq!(names, vec!["A1", "A2"]);

        registry.delete_area("A1");
        assert_eq!(registry.area_names(), vec!["A2"]);
    }
}
