use tracing::{debug, trace};

use crate::error::{InputError, Result, TrackError};
use crate::math::spline_1d::{check_increasing, linear_interp, CubicSpline, MIN_CUBIC_KNOTS};
use crate::math::Coord;
use crate::model::{ErrorCurve, ForecastFix};

use super::TrackParams;

/// Minimum number of fixes needed to build a track.
pub const MIN_FIXES: usize = 2;

/// One sample of a densified track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    /// Hours after the advisory issue time.
    pub time_hours: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees east.
    pub lon: f64,
    /// Position-error radius in meters.
    pub error_radius_m: f64,
}

/// A forecast track resampled at a fixed time step.
#[derive(Debug, Clone, PartialEq)]
pub struct DensifiedTrack {
    samples: Vec<TrackSample>,
    cubic: bool,
}

impl DensifiedTrack {
    /// The samples, ordered by time.
    #[must_use]
    pub fn samples(&self) -> &[TrackSample] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the track has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `true` if positions came from the cubic spline rather than the
    /// linear fallback.
    #[must_use]
    pub fn is_cubic(&self) -> bool {
        self.cubic
    }

    /// Track line as `(lon, lat)` coordinates.
    #[must_use]
    pub fn line(&self) -> Vec<Coord> {
        self.samples
            .iter()
            .map(|s| Coord { x: s.lon, y: s.lat })
            .collect()
    }
}

/// Position interpolant for one coordinate axis.
enum Interpolant<'a> {
    Cubic(CubicSpline),
    Linear { knots: &'a [f64], values: Vec<f64> },
}

impl Interpolant<'_> {
    fn evaluate(&self, t: f64) -> f64 {
        match self {
            Interpolant::Cubic(spline) => spline.evaluate(t),
            Interpolant::Linear { knots, values } => linear_interp(knots, values, t),
        }
    }
}

/// Densifies a sequence of forecast fixes into a regularly sampled track.
///
/// Positions follow a not-a-knot cubic spline through every fix when at least
/// four fixes are present, and straight segments otherwise. Error radii are
/// always interpolated linearly so they keep the error curve's monotonicity.
pub struct InterpolateTrack<'a> {
    fixes: &'a [ForecastFix],
    error_curve: &'a ErrorCurve,
    params: TrackParams,
}

impl<'a> InterpolateTrack<'a> {
    /// Creates a new `InterpolateTrack` operation with default parameters.
    #[must_use]
    pub fn new(fixes: &'a [ForecastFix], error_curve: &'a ErrorCurve) -> Self {
        Self {
            fixes,
            error_curve,
            params: TrackParams::default(),
        }
    }

    /// Sets custom track parameters.
    #[must_use]
    pub fn with_params(mut self, params: TrackParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the interpolation.
    ///
    /// # Errors
    ///
    /// Returns `TrackError::InsufficientData` for fewer than two fixes,
    /// `InputError::UnorderedLeadTimes` if lead times do not strictly increase,
    /// `TrackError::OutOfRange` if a lead time falls outside the error curve,
    /// and `InputError::InvalidParameters` for a zero time step.
    pub fn execute(&self) -> Result<DensifiedTrack> {
        let n = self.fixes.len();
        if n < MIN_FIXES {
            return Err(TrackError::InsufficientData {
                required: MIN_FIXES,
                actual: n,
            }
            .into());
        }
        if self.params.step_hours == 0 {
            return Err(InputError::InvalidParameters("track step must be positive".into()).into());
        }

        let times: Vec<f64> = self.fixes.iter().map(|f| f64::from(f.lead_hours)).collect();
        check_increasing(&times)?;

        let errors = times
            .iter()
            .map(|&t| self.error_curve.radius_at(t))
            .collect::<Result<Vec<f64>>>()?;

        let lats: Vec<f64> = self.fixes.iter().map(|f| f.lat).collect();
        let lons: Vec<f64> = self.fixes.iter().map(|f| f.lon).collect();
        let cubic = n >= MIN_CUBIC_KNOTS;
        let (lat_curve, lon_curve) = if cubic {
            (
                Interpolant::Cubic(CubicSpline::not_a_knot(&times, &lats)?),
                Interpolant::Cubic(CubicSpline::not_a_knot(&times, &lons)?),
            )
        } else {
            (
                Interpolant::Linear {
                    knots: &times,
                    values: lats,
                },
                Interpolant::Linear {
                    knots: &times,
                    values: lons,
                },
            )
        };

        let samples: Vec<TrackSample> = sample_times(
            self.fixes[0].lead_hours,
            self.fixes[n - 1].lead_hours,
            self.params.step_hours,
        )
        .into_iter()
        .map(|t| TrackSample {
            time_hours: t,
            lat: lat_curve.evaluate(t),
            lon: lon_curve.evaluate(t),
            error_radius_m: linear_interp(&times, &errors, t),
        })
        .collect();

        for s in &samples {
            trace!(
                t = s.time_hours,
                lat = s.lat,
                lon = s.lon,
                err_m = s.error_radius_m,
                "track sample"
            );
        }
        debug!(fixes = n, samples = samples.len(), cubic, "densified forecast track");

        Ok(DensifiedTrack { samples, cubic })
    }
}

/// Evenly spaced sample times from `first` to `last`, both inclusive.
///
/// The count is fixed at `floor(span / step) + 1` (at least two) so the last
/// sample lands exactly on `last` even when the span is not a whole number of
/// steps.
fn sample_times(first: u32, last: u32, step: u32) -> Vec<f64> {
    let span = last - first;
    let count = (span / step + 1).max(2);
    let denom = f64::from(count - 1);
    (0..count)
        .map(|k| {
            if k == count - 1 {
                f64::from(last)
            } else {
                f64::from(first) + f64::from(span) * f64::from(k) / denom
            }
        })
        .collect()
}
