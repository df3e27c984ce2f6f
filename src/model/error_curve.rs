use crate::error::{InputError, Result, TrackError};
use crate::math::spline_1d::linear_interp;

/// Climatological cumulative position error in meters at
/// 0, 12, 24, 36, 48, 72, 96 and 120 hours.
pub const CLIMATOLOGICAL_ERRORS_M: [(u32, f64); 8] = [
    (0, 0.0),
    (12, 56_529.0),
    (24, 89_490.0),
    (36, 122_451.0),
    (48, 155_412.0),
    (72, 236_818.0),
    (96, 338_263.0),
    (120, 456_217.0),
];

/// Lookup table from lead time to position-error radius.
///
/// Lead hours are strictly increasing and errors never decrease, so linear
/// interpolation between entries is itself non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCurve {
    hours: Vec<f64>,
    errors_m: Vec<f64>,
}

impl ErrorCurve {
    /// Creates a curve from `(lead_hours, error_meters)` entries.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidErrorCurve` if the table is empty, lead
    /// hours are not strictly increasing, or errors are negative, non-finite
    /// or decreasing.
    pub fn new(entries: &[(u32, f64)]) -> Result<Self> {
        if entries.is_empty() {
            return Err(InputError::InvalidErrorCurve("table is empty".into()).into());
        }
        for (i, w) in entries.windows(2).enumerate() {
            if w[1].0 <= w[0].0 {
                return Err(InputError::InvalidErrorCurve(format!(
                    "lead hours not strictly increasing at entry {}",
                    i + 1
                ))
                .into());
            }
            if w[1].1 < w[0].1 {
                return Err(InputError::InvalidErrorCurve(format!(
                    "error decreases at {} h",
                    w[1].0
                ))
                .into());
            }
        }
        if let Some(&(h, e)) = entries.iter().find(|(_, e)| !e.is_finite() || *e < 0.0) {
            return Err(
                InputError::InvalidErrorCurve(format!("invalid error {e} m at {h} h")).into(),
            );
        }

        Ok(Self {
            hours: entries.iter().map(|&(h, _)| f64::from(h)).collect(),
            errors_m: entries.iter().map(|&(_, e)| e).collect(),
        })
    }

    /// The default climatological table.
    #[must_use]
    pub fn climatological() -> Self {
        Self {
            hours: CLIMATOLOGICAL_ERRORS_M.iter().map(|&(h, _)| f64::from(h)).collect(),
            errors_m: CLIMATOLOGICAL_ERRORS_M.iter().map(|&(_, e)| e).collect(),
        }
    }

    /// First and last lead hour covered by the table.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.hours[0], self.hours[self.hours.len() - 1])
    }

    /// Position-error radius in meters at `lead_hours`, linearly interpolated.
    ///
    /// # Errors
    ///
    /// Returns `TrackError::OutOfRange` outside the table's domain; the table
    /// is never extrapolated.
    pub fn radius_at(&self, lead_hours: f64) -> Result<f64> {
        let (min, max) = self.domain();
        if !(min..=max).contains(&lead_hours) {
            return Err(TrackError::OutOfRange {
                lead_hours,
                min,
                max,
            }
            .into());
        }
        Ok(linear_interp(&self.hours, &self.errors_m, lead_hours))
    }
}

impl Default for ErrorCurve {
    fn default() -> Self {
        Self::climatological()
    }
}
