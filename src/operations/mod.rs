mod build_cone;
mod build_wind_wedge;
mod compute_extent;
mod interpolate_track;

pub use build_cone::{BuildCone, ForecastCone, BOUNDARY_TOLERANCE_DEG};
pub use build_wind_wedge::{BuildWindWedge, WindWedge};
pub use compute_extent::{ComputeExtent, MapExtent};
pub use interpolate_track::{DensifiedTrack, InterpolateTrack, TrackSample, MIN_FIXES};

/// Parameters controlling track densification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackParams {
    /// Nominal spacing between samples in hours.
    pub step_hours: u32,
}

impl TrackParams {
    /// Sets the sample spacing.
    #[must_use]
    pub fn with_step_hours(mut self, step_hours: u32) -> Self {
        self.step_hours = step_hours;
        self
    }
}

impl Default for TrackParams {
    fn default() -> Self {
        Self { step_hours: 3 }
    }
}

/// Parameters controlling cone construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConeParams {
    /// Number of points sampled around each error circle.
    pub circle_samples: usize,
}

impl ConeParams {
    /// Sets the number of points per error circle.
    #[must_use]
    pub fn with_circle_samples(mut self, circle_samples: usize) -> Self {
        self.circle_samples = circle_samples;
        self
    }
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            circle_samples: 100,
        }
    }
}

/// Parameters controlling wind wedge construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WedgeParams {
    /// Angular span of each quadrant slice in whole degrees.
    ///
    /// Slightly more than 90 so adjacent slices overlap and union without slivers.
    pub arc_span_deg: i32,
}

impl Default for WedgeParams {
    fn default() -> Self {
        Self { arc_span_deg: 91 }
    }
}

/// Parameters controlling the map viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentParams {
    /// Margin added on every side of the geometry, in degrees.
    pub padding_deg: f64,
    /// Required width:height ratio of the viewport.
    pub aspect_ratio: f64,
}

impl ExtentParams {
    /// Sets the margin in degrees.
    #[must_use]
    pub fn with_padding_deg(mut self, padding_deg: f64) -> Self {
        self.padding_deg = padding_deg;
        self
    }

    /// Sets the width:height ratio.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
}

impl Default for ExtentParams {
    fn default() -> Self {
        Self {
            padding_deg: 1.0,
            aspect_ratio: 1.7,
        }
    }
}
