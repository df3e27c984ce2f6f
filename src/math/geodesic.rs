use super::{Coord, EARTH_RADIUS_NM, METERS_PER_NM};

/// Solves the direct geodesic problem on a spherical Earth.
///
/// Angles are in degrees and bearings run clockwise from true north. Returns the `(lat, lon)` reached by travelling `distance_nm` nautical miles
/// from `(lat, lon)` along the initial bearing `bearing_deg`. Longitude is not
/// wrapped, so tracks near 180° stay continuous in a `[0, 360)` frame.
#[must_use]
pub fn point_at_bearing(lat: f64, lon: f64, distance_nm: f64, bearing_deg: f64) -> (f64, f64) {
    let lat1 = lat.to_radians();
    let lon1 = lon.to_radians();
    let brng = bearing_deg.to_radians();
    let delta = distance_nm / EARTH_RADIUS_NM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * brng.cos()).asin();
    let lon2 = lon1
        + (brng.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    (lat2.to_degrees(), lon2.to_degrees())
}

/// Great-circle (haversine) distance in nautical miles between two positions.
#[cfg(test)]
pub(crate) fn distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi * 0.5).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);
    2.0 * EARTH_RADIUS_NM * a.sqrt().clamp(0.0, 1.0).asin()
}

/// Initial great-circle bearing in degrees `[0, 360)` from the first position to the second.
#[cfg(test)]
pub(crate) fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Samples `n_samples` points evenly around a geodesic circle as `(lon, lat)`
/// coordinates.
///
/// The ring is open (the first point is not repeated). A zero radius yields
/// `n_samples` copies of the center; callers must handle that degenerate ring.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circle_points(lat: f64, lon: f64, radius_m: f64, n_samples: usize) -> Vec<Coord> {
    let radius_nm = radius_m / METERS_PER_NM;
    (0..n_samples)
        .map(|i| {
            let bearing = 360.0 * i as f64 / n_samples as f64;
            let (plat, plon) = point_at_bearing(lat, lon, radius_nm, bearing);
            Coord { x: plon, y: plat }
        })
        .collect()
}

/// Samples a geodesic arc at every whole degree from `start_bearing` to
/// `end_bearing`, both inclusive.
///
/// Returns an empty vector when `end_bearing < start_bearing`.
#[must_use]
pub fn arc_points(
    lat: f64,
    lon: f64,
    radius_nm: f64,
    start_bearing: i32,
    end_bearing: i32,
) -> Vec<Coord> {
    (start_bearing..=end_bearing)
        .map(|bearing| {
            let (plat, plon) = point_at_bearing(lat, lon, radius_nm, f64::from(bearing));
            Coord { x: plon, y: plat }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    /// Arc length of one degree of latitude on the model sphere.
    fn one_degree_nm() -> f64 {
        EARTH_RADIUS_NM * 1.0_f64.to_radians()
    }

    #[test]
    fn due_north_one_degree() {
        let (lat, lon) = point_at_bearing(0.0, 100.0, one_degree_nm(), 0.0);
        assert!((lat - 1.0).abs() < TOL, "lat={lat}");
        assert!((lon - 100.0).abs() < TOL, "lon={lon}");
    }

    #[test]
    fn due_east_along_equator() {
        let (lat, lon) = point_at_bearing(0.0, 100.0, one_degree_nm(), 90.0);
        assert!(lat.abs() < TOL, "lat={lat}");
        assert!((lon - 101.0).abs() < TOL, "lon={lon}");
    }

    #[test]
    fn zero_distance_is_identity() {
        let (lat, lon) = point_at_bearing(22.1, 144.9, 0.0, 237.0);
        assert!((lat - 22.1).abs() < TOL);
        assert!((lon - 144.9).abs() < TOL);
    }

    #[test]
    fn longitude_is_not_wrapped() {
        let (_, lon) = point_at_bearing(10.0, 359.5, 120.0, 90.0);
        assert!(lon > 360.0, "lon={lon}");
    }

    #[test]
    fn distance_inverts_direct_solution() {
        let (lat, lon) = point_at_bearing(22.1, 144.9, 150.0, 45.0);
        let d = distance_nm(22.1, 144.9, lat, lon);
        assert!((d - 150.0).abs() < 1e-6, "d={d}");
        let b = initial_bearing(22.1, 144.9, lat, lon);
        assert!((b - 45.0).abs() < 1e-6, "b={b}");
    }

    #[test]
    fn circle_points_are_equidistant() {
        let ring = circle_points(21.4, 142.9, 89_490.0, 100);
        assert_eq!(ring.len(), 100);
        let expected_nm = 89_490.0 / METERS_PER_NM;
        for c in &ring {
            let d = distance_nm(21.4, 142.9, c.y, c.x);
            assert!((d - expected_nm).abs() < 1e-6, "d={d}");
        }
    }

    #[test]
    fn zero_radius_circle_collapses() {
        let ring = circle_points(22.1, 144.9, 0.0, 100);
        assert_eq!(ring.len(), 100);
        assert!(ring
            .iter()
            .all(|c| (c.x - 144.9).abs() < TOL && (c.y - 22.1).abs() < TOL));
    }

    #[test]
    fn arc_is_inclusive_per_degree() {
        let arc = arc_points(22.1, 144.9, 100.0, 90, 181);
        assert_eq!(arc.len(), 92);
        let first = initial_bearing(22.1, 144.9, arc[0].y, arc[0].x);
        let last = initial_bearing(22.1, 144.9, arc[91].y, arc[91].x);
        assert!((first - 90.0).abs() < 1e-6, "first={first}");
        assert!((last - 181.0).abs() < 1e-6, "last={last}");
    }

    #[test]
    fn reversed_arc_is_empty() {
        assert!(arc_points(0.0, 0.0, 10.0, 10, 5).is_empty());
    }
}
