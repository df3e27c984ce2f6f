pub mod geodesic;
pub mod polygon_2d;
pub mod spline_1d;

/// Planar (lon, lat) coordinate in degrees: `x` is longitude, `y` is latitude.
pub type Coord = geo::Coord<f64>;

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Meters in one nautical mile.
pub const METERS_PER_NM: f64 = 1852.0;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
