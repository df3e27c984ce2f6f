use super::{ErrorCurve, ForecastFix, WindRadii};

/// Validated advisory content handed to the geometry pipeline.
///
/// Produced by the text-parsing collaborator; this crate never reads raw
/// advisory text.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    /// Initial fix followed by forecast fixes, by increasing lead time.
    pub fixes: Vec<ForecastFix>,
    /// Position-error table covering the fixes' lead times.
    pub error_curve: ErrorCurve,
    /// Wind radii at the initial fix.
    pub wind_radii: WindRadii,
}

impl Advisory {
    /// Creates an advisory bundle.
    #[must_use]
    pub fn new(fixes: Vec<ForecastFix>, error_curve: ErrorCurve, wind_radii: WindRadii) -> Self {
        Self {
            fixes,
            error_curve,
            wind_radii,
        }
    }

    /// The observed position, if any fix is present.
    #[must_use]
    pub fn initial_fix(&self) -> Option<&ForecastFix> {
        self.fixes.first()
    }
}
