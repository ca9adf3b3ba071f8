//! Great-circle distance module
//!
//! Provides surface-distance calculations between geographic coordinates
//! (latitude/longitude), used by circular area containment tests to compare
//! each query point against an area's radius.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Metres per international nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1_852.0;

/// Computes the great-circle surface distance between two points.
///
/// Uses the haversine formula over a sphere of radius [`EARTH_RADIUS_M`].
/// Coincident points yield exactly 0 (no singularity at zero separation).
///
/// # Arguments
///
/// * `lat1`, `lon1` - First point in degrees
/// * `lat2`, `lon2` - Second point in degrees
///
/// # Returns
///
/// Surface distance in nautical miles.
#[inline]
pub fn surface_distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon * 0.5).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c / METERS_PER_NAUTICAL_MILE
}

/// Computes surface distances from a fixed center to a batch of points.
///
/// Each distance is computed independently per point. The two slices must
/// be the same length; the caller validates lengths before reaching this
/// function.
pub fn surface_distances_nm(
    center_lat: f64,
    center_lon: f64,
    lats: &[f64],
    lons: &[f64],
) -> Vec<f64> {
    lats.iter()
        .zip(lons.iter())
        .map(|(&lat, &lon)| surface_distance_nm(center_lat, center_lon, lat, lon))
        .collect()
}
