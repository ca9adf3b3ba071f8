//! Error types for the area module.

use thiserror::Error;

use super::shape::AreaType;

/// Errors that can occur when constructing an area shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeConstructionError {
    /// Area type string is not part of the command vocabulary.
    #[error("Unknown area type '{0}' (expected BOX, CIRCLE, POLY or POLYALT)")]
    UnknownAreaType(String),

    /// Coordinate count does not match the variant's required arity.
    #[error("{kind} expects {expected}, got {actual} coordinates")]
    CoordinateArity {
        kind: AreaType,
        expected: &'static str,
        actual: usize,
    },

    /// Polygon coordinate sequence has an odd number of values.
    #[error("Polygon coordinates must come in lat/lon pairs, got {0} values")]
    OddPolygonCoordinates(usize),

    /// Polygon has fewer than three vertices.
    #[error("Polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Circle radius is negative.
    #[error("Circle radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    /// A coordinate, radius, or altitude value is NaN or infinite.
    #[error("Non-finite numeric input: {0}")]
    NonFinite(f64),

    /// An explicitly-supplied altitude band has its top below its bottom.
    #[error("Altitude band is inverted: top {top} is below bottom {bottom}")]
    InvertedAltitudeBand { bottom: f64, top: f64 },
}

/// Containment query input sequences differ in length.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Coordinate sequences differ in length: {lats} latitudes, {lons} longitudes, {alts} altitudes"
)]
pub struct DimensionMismatchError {
    /// Number of latitude values supplied.
    pub lats: usize,
    /// Number of longitude values supplied.
    pub lons: usize,
    /// Number of altitude values supplied.
    pub alts: usize,
}
