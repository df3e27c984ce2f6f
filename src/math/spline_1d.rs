use nalgebra::{DMatrix, DVector};

use crate::error::{InputError, Result, TrackError};

/// Minimum number of knots for a not-a-knot cubic spline.
pub const MIN_CUBIC_KNOTS: usize = 4;

/// C2 cubic spline with not-a-knot end conditions over strictly increasing knots.
///
/// The third derivative is continuous across the second and the second-to-last
/// knot, so four knots reproduce the unique interpolating cubic polynomial.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    second_derivs: Vec<f64>,
}

impl CubicSpline {
    /// Fits a not-a-knot spline through `(knots[i], values[i])`.
    ///
    /// # Errors
    ///
    /// Returns `TrackError::InsufficientData` for fewer than four knots,
    /// `InputError::UnorderedLeadTimes` if the knots are not strictly increasing,
    /// and `InputError::InvalidParameters` if the lengths differ or the system is singular.
    pub fn not_a_knot(knots: &[f64], values: &[f64]) -> Result<Self> {
        let n = knots.len();
        if values.len() != n {
            return Err(InputError::InvalidParameters(format!(
                "spline has {n} knots but {} values",
                values.len()
            ))
            .into());
        }
        if n < MIN_CUBIC_KNOTS {
            return Err(TrackError::InsufficientData {
                required: MIN_CUBIC_KNOTS,
                actual: n,
            }
            .into());
        }
        check_increasing(knots)?;

        let h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut b = DVector::<f64>::zeros(n);

        // Third derivative continuous at knots[1].
        a[(0, 0)] = h[1];
        a[(0, 1)] = -(h[0] + h[1]);
        a[(0, 2)] = h[0];

        for i in 1..n - 1 {
            a[(i, i - 1)] = h[i - 1];
            a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            a[(i, i + 1)] = h[i];
            b[i] = 6.0
                * ((values[i + 1] - values[i]) / h[i] - (values[i] - values[i - 1]) / h[i - 1]);
        }

        // Third derivative continuous at knots[n - 2].
        a[(n - 1, n - 3)] = h[n - 2];
        a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
        a[(n - 1, n - 1)] = h[n - 3];

        let m = a.lu().solve(&b).ok_or_else(|| {
            InputError::InvalidParameters("singular not-a-knot spline system".into())
        })?;

        Ok(Self {
            knots: knots.to_vec(),
            values: values.to_vec(),
            second_derivs: m.iter().copied().collect(),
        })
    }

    /// Evaluates the spline at `t`.
    ///
    /// Values at a knot are returned exactly. Outside the knot range the end
    /// polynomial pieces are extended.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&self, t: f64) -> f64 {
        if let Some(i) = self.knots.iter().position(|&k| k == t) {
            return self.values[i];
        }
        let i = segment_index(&self.knots, t);
        let (x0, x1) = (self.knots[i], self.knots[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);
        let (m0, m1) = (self.second_derivs[i], self.second_derivs[i + 1]);
        let h = x1 - x0;
        let l = x1 - t;
        let r = t - x0;

        m0 * l.powi(3) / (6.0 * h)
            + m1 * r.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * l
            + (y1 / h - m1 * h / 6.0) * r
    }
}

/// Piecewise linear interpolation of `(knots, values)` at `t`.
///
/// Keeps monotone data such as the position error radius monotone.
///
/// Knots must be strictly increasing and non-empty. Values at a knot are
/// returned exactly; outside the range the end segments are extended.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn linear_interp(knots: &[f64], values: &[f64], t: f64) -> f64 {
    if let Some(i) = knots.iter().position(|&k| k == t) {
        return values[i];
    }
    if knots.len() < 2 {
        return values[0];
    }
    let i = segment_index(knots, t);
    let frac = (t - knots[i]) / (knots[i + 1] - knots[i]);
    values[i] + frac * (values[i + 1] - values[i])
}

/// Fails with `UnorderedLeadTimes` at the first knot not greater than its predecessor.
pub(crate) fn check_increasing(knots: &[f64]) -> Result<()> {
    match knots.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(InputError::UnorderedLeadTimes { index: i + 1 }.into()),
        None => Ok(()),
    }
}

/// Index `i` of the segment `[knots[i], knots[i + 1]]` used to evaluate `t`.
fn segment_index(knots: &[f64], t: f64) -> usize {
    let last_segment = knots.len().saturating_sub(2);
    knots
        .windows(2)
        .position(|w| t < w[1])
        .unwrap_or(last_segment)
        .min(last_segment)
}
