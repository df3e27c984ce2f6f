use super::IntensityCategory;

/// An observed or forecast storm position at a lead time.
///
/// Latitude is in degrees north (south is negative). Longitude is in degrees
/// east in `[0, 360)`, so west longitudes are stored as `360 - value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastFix {
    /// Hours after the advisory issue time (`0` for the initial position).
    pub lead_hours: u32,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees east, `[0, 360)`.
    pub lon: f64,
    /// Maximum sustained wind in knots.
    pub wind_kt: u32,
}

impl ForecastFix {
    /// Creates a fix from already-normalized coordinates.
    #[must_use]
    pub fn new(lead_hours: u32, lat: f64, lon: f64, wind_kt: u32) -> Self {
        Self {
            lead_hours,
            lat,
            lon,
            wind_kt,
        }
    }

    /// Creates a fix from unsigned advisory coordinates with hemisphere letters.
    ///
    /// `'S'` negates the latitude and `'W'` maps the longitude to `360 - lon`.
    /// Any other letter is treated as north or east.
    #[must_use]
    pub fn from_hemispheres(
        lead_hours: u32,
        lat: f64,
        lat_hemisphere: char,
        lon: f64,
        lon_hemisphere: char,
        wind_kt: u32,
    ) -> Self {
        let lat = if lat_hemisphere.eq_ignore_ascii_case(&'S') {
            -lat
        } else {
            lat
        };
        let lon = if lon_hemisphere.eq_ignore_ascii_case(&'W') {
            360.0 - lon
        } else {
            lon
        };
        Self::new(lead_hours, lat, lon, wind_kt)
    }

    /// Intensity class derived from the fix's wind speed.
    #[must_use]
    pub fn category(&self) -> IntensityCategory {
        IntensityCategory::from_wind_kt(self.wind_kt)
    }
}
