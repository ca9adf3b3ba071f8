//! Area shape variants and the batch containment test.
//!
//! A [`Shape`] is a tagged union over the three supported footprints:
//! an axis-aligned lat/lon box, a circle with a great-circle radius, and
//! a planar polygon. Every variant carries an inclusive [`AltitudeBand`];
//! a point is inside a shape only when both the horizontal test and the
//! altitude test hold.
//!
//! Shapes are pure values: construction validates the inputs once, and
//! containment tests have no side effects.

use std::fmt;
use std::str::FromStr;

use crate::geo::surface_distance_nm;

use super::error::{DimensionMismatchError, ShapeConstructionError};

/// Altitude ceiling substituted when no upper bound is given.
pub const ALT_UNBOUNDED_TOP: f64 = 1e9;

/// Altitude floor substituted when no lower bound is given.
pub const ALT_UNBOUNDED_BOTTOM: f64 = -1e9;

/// Area type vocabulary used at the command boundary.
///
/// `PolyAlt` is the polygon variant whose coordinate sequence leads with
/// an explicit altitude pair (top, bottom) before the vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaType {
    Box,
    Circle,
    Poly,
    PolyAlt,
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AreaType::Box => "BOX",
            AreaType::Circle => "CIRCLE",
            AreaType::Poly => "POLY",
            AreaType::PolyAlt => "POLYALT",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AreaType {
    type Err = ShapeConstructionError;

    /// Parses the command-boundary vocabulary. Matching is case-sensitive,
    /// as area commands arrive already upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOX" => Ok(AreaType::Box),
            "CIRCLE" => Ok(AreaType::Circle),
            "POLY" => Ok(AreaType::Poly),
            "POLYALT" => Ok(AreaType::PolyAlt),
            other => Err(ShapeConstructionError::UnknownAreaType(other.to_string())),
        }
    }
}

/// Inclusive altitude band `[bottom, top]` restricting a shape vertically.
///
/// Callers express "no limit" by omitting a bound; the omission converts
/// to the numeric sentinels [`ALT_UNBOUNDED_TOP`] / [`ALT_UNBOUNDED_BOTTOM`]
/// here, at the single construction point, so no queried altitude can
/// collide with an unset bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeBand {
    /// Lower bound, inclusive.
    pub bottom: f64,
    /// Upper bound, inclusive.
    pub top: f64,
}

impl AltitudeBand {
    /// Create a band from optional bounds.
    ///
    /// `None` substitutes the unbounded sentinel for that side. Explicit
    /// bounds must be finite and must not invert the band.
    pub fn new(top: Option<f64>, bottom: Option<f64>) -> Result<Self, ShapeConstructionError> {
        for bound in [top, bottom].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(ShapeConstructionError::NonFinite(bound));
            }
        }

        let top = top.unwrap_or(ALT_UNBOUNDED_TOP);
        let bottom = bottom.unwrap_or(ALT_UNBOUNDED_BOTTOM);
        if top < bottom {
            return Err(ShapeConstructionError::InvertedAltitudeBand { bottom, top });
        }

        Ok(Self { bottom, top })
    }

    /// Band with no altitude restriction on either side.
    pub fn unbounded() -> Self {
        Self {
            bottom: ALT_UNBOUNDED_BOTTOM,
            top: ALT_UNBOUNDED_TOP,
        }
    }

    /// Inclusive test on both ends.
    #[inline]
    pub fn contains(&self, alt: f64) -> bool {
        self.bottom <= alt && alt <= self.top
    }
}

/// A named area's geometry: horizontal footprint plus altitude band.
///
/// The containment test dispatches exhaustively over the variants, so a
/// new footprint kind cannot be added without the compiler pointing at
/// every site that must handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned lat/lon box. Bounds are normalized at construction so
    /// `lat_min <= lat_max` and `lon_min <= lon_max` regardless of which
    /// two corners were given.
    Box {
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
        band: AltitudeBand,
    },
    /// Circle around a center point, radius in nautical miles measured as
    /// great-circle surface distance.
    Circle {
        center_lat: f64,
        center_lon: f64,
        radius_nm: f64,
        band: AltitudeBand,
    },
    /// Closed vertex ring (the last vertex connects back to the first;
    /// callers do not repeat it).
    Polygon {
        vertices: Vec<(f64, f64)>,
        band: AltitudeBand,
    },
}

impl Shape {
    /// Build a shape from the command boundary's flat coordinate layout.
    ///
    /// Layout per variant:
    /// - `Box`: `[lat1, lon1, lat2, lon2]`, any two opposite corners
    /// - `Circle`: `[center_lat, center_lon, radius_nm]`
    /// - `Poly`: `[lat1, lon1, lat2, lon2, lat3, lon3, ...]`
    /// - `PolyAlt`: `[alt_top, alt_bottom, lat1, lon1, ...]`; the leading
    ///   pair defines the altitude band and takes precedence over the
    ///   `top`/`bottom` arguments
    ///
    /// Omitted altitude bounds default to the unbounded sentinels.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeConstructionError`] when the coordinate count does
    /// not match the variant's arity, a polygon has fewer than three
    /// vertices or an odd coordinate count, a circle radius is negative,
    /// or any numeric input is NaN or infinite.
    pub fn build(
        kind: AreaType,
        coordinates: &[f64],
        top: Option<f64>,
        bottom: Option<f64>,
    ) -> Result<Self, ShapeConstructionError> {
        if let Some(&bad) = coordinates.iter().find(|c| !c.is_finite()) {
            return Err(ShapeConstructionError::NonFinite(bad));
        }

        match kind {
            AreaType::Box => {
                if coordinates.len() != 4 {
                    return Err(ShapeConstructionError::CoordinateArity {
                        kind,
                        expected: "4 (two corner points)",
                        actual: coordinates.len(),
                    });
                }
                let band = AltitudeBand::new(top, bottom)?;
                // Sort the corner points so the bounds hold per axis
                Ok(Shape::Box {
                    lat_min: coordinates[0].min(coordinates[2]),
                    lat_max: coordinates[0].max(coordinates[2]),
                    lon_min: coordinates[1].min(coordinates[3]),
                    lon_max: coordinates[1].max(coordinates[3]),
                    band,
                })
            }
            AreaType::Circle => {
                if coordinates.len() != 3 {
                    return Err(ShapeConstructionError::CoordinateArity {
                        kind,
                        expected: "3 (center point and radius)",
                        actual: coordinates.len(),
                    });
                }
                let radius_nm = coordinates[2];
                if radius_nm < 0.0 {
                    return Err(ShapeConstructionError::NegativeRadius(radius_nm));
                }
                Ok(Shape::Circle {
                    center_lat: coordinates[0],
                    center_lon: coordinates[1],
                    radius_nm,
                    band: AltitudeBand::new(top, bottom)?,
                })
            }
            AreaType::Poly => {
                let band = AltitudeBand::new(top, bottom)?;
                Self::polygon_from(coordinates, band)
            }
            AreaType::PolyAlt => {
                if coordinates.len() < 2 {
                    return Err(ShapeConstructionError::CoordinateArity {
                        kind,
                        expected: "at least 8 (altitude pair plus three vertices)",
                        actual: coordinates.len(),
                    });
                }
                let band = AltitudeBand::new(Some(coordinates[0]), Some(coordinates[1]))?;
                Self::polygon_from(&coordinates[2..], band)
            }
        }
    }

    /// Assemble a polygon from a flat, already finite-checked vertex list.
    fn polygon_from(flat: &[f64], band: AltitudeBand) -> Result<Self, ShapeConstructionError> {
        if flat.len() % 2 != 0 {
            return Err(ShapeConstructionError::OddPolygonCoordinates(flat.len()));
        }
        let vertices: Vec<(f64, f64)> = flat.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
        if vertices.len() < 3 {
            return Err(ShapeConstructionError::TooFewVertices(vertices.len()));
        }
        Ok(Shape::Polygon { vertices, band })
    }

    /// The command-boundary type this shape answers to.
    ///
    /// Polygons report [`AreaType::Poly`] regardless of whether their band
    /// came from a leading altitude pair.
    pub fn kind(&self) -> AreaType {
        match self {
            Shape::Box { .. } => AreaType::Box,
            Shape::Circle { .. } => AreaType::Circle,
            Shape::Polygon { .. } => AreaType::Poly,
        }
    }

    /// The altitude band restricting this shape vertically.
    pub fn altitude_band(&self) -> AltitudeBand {
        match self {
            Shape::Box { band, .. } | Shape::Circle { band, .. } | Shape::Polygon { band, .. } => {
                *band
            }
        }
    }

    /// Test a batch of points for containment.
    ///
    /// The three slices are positional: entry `i` of the result answers
    /// for point `(lats[i], lons[i], alts[i])`. `true` means the point is
    /// inside the horizontal footprint AND within the altitude band,
    /// inclusive on both ends. Empty input yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatchError`] if the slices differ in length.
    pub fn check_inside(
        &self,
        lats: &[f64],
        lons: &[f64],
        alts: &[f64],
    ) -> Result<Vec<bool>, DimensionMismatchError> {
        if lats.len() != lons.len() || lats.len() != alts.len() {
            return Err(DimensionMismatchError {
                lats: lats.len(),
                lons: lons.len(),
                alts: alts.len(),
            });
        }

        Ok(lats
            .iter()
            .zip(lons.iter())
            .zip(alts.iter())
            .map(|((&lat, &lon), &alt)| self.contains_point(lat, lon, alt))
            .collect())
    }

    /// Test a single point for containment.
    ///
    /// The box test has no wraparound handling at the ±180° longitude
    /// seam: a box spanning the seam must be given as two areas. The
    /// polygon test treats lat/lon as planar Cartesian coordinates, so it
    /// is inexact near the poles and across the seam; points exactly on a
    /// polygon edge may resolve either way.
    pub fn contains_point(&self, lat: f64, lon: f64, alt: f64) -> bool {
        let (horizontal, band) = match self {
            Shape::Box {
                lat_min,
                lat_max,
                lon_min,
                lon_max,
                band,
            } => (
                *lat_min <= lat && lat <= *lat_max && *lon_min <= lon && lon <= *lon_max,
                band,
            ),
            Shape::Circle {
                center_lat,
                center_lon,
                radius_nm,
                band,
            } => (
                surface_distance_nm(*center_lat, *center_lon, lat, lon) <= *radius_nm,
                band,
            ),
            Shape::Polygon { vertices, band } => (point_in_ring(lat, lon, vertices), band),
        };
        horizontal && band.contains(alt)
    }
}

/// Planar ray-casting point-in-polygon test over (lat, lon) pairs.
///
/// Casts a ray northward along the latitude axis and counts edge
/// crossings; an odd count means inside. The half-open longitude interval
/// per edge keeps shared vertices from double-counting.
fn point_in_ring(lat: f64, lon: f64, vertices: &[(f64, f64)]) -> bool {
    let n = vertices.len();
    let mut crossings = 0;

    for i in 0..n {
        let (lat0, lon0) = vertices[i];
        let (lat1, lon1) = vertices[(i + 1) % n];

        // Skip edges that do not straddle the query longitude
        let (lon_min, lon_max) = if lon0 < lon1 { (lon0, lon1) } else { (lon1, lon0) };
        if lon < lon_min || lon >= lon_max {
            continue;
        }

        // Latitude at which the edge crosses the query longitude
        let t = (lon - lon0) / (lon1 - lon0);
        let lat_crossing = lat0 + t * (lat1 - lat0);

        if lat_crossing > lat {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}
