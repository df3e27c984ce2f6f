mod advisory;
mod error_curve;
mod fix;
mod intensity;
mod wind_radii;

pub use advisory::Advisory;
pub use error_curve::{ErrorCurve, CLIMATOLOGICAL_ERRORS_M};
pub use fix::ForecastFix;
pub use intensity::IntensityCategory;
pub use wind_radii::{NestingViolation, Quadrant, QuadrantRadii, WindRadii, WindThreshold};
