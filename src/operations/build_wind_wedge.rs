use geo::{Area, MultiPolygon};
use tracing::{debug, trace};

use crate::error::{InputError, Result};
use crate::math::geodesic::arc_points;
use crate::math::polygon_2d::{polygon_from_ring, union_all};
use crate::math::Coord;
use crate::model::{ForecastFix, QuadrantRadii, WindThreshold};

use super::WedgeParams;

/// Area around the initial fix where winds reach a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct WindWedge {
    threshold: WindThreshold,
    geometry: MultiPolygon<f64>,
}

impl WindWedge {
    /// The wind threshold this wedge represents.
    #[must_use]
    pub fn threshold(&self) -> WindThreshold {
        self.threshold
    }

    /// The wedge outline in `(lon, lat)` degrees.
    #[must_use]
    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    /// Returns `true` if no quadrant was reported for this threshold.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    /// Planar area of the outline in square degrees.
    #[must_use]
    pub fn area_sq_deg(&self) -> f64 {
        self.geometry.unsigned_area()
    }
}

/// Builds the wind wedge for one threshold from its quadrant radii.
///
/// Each reported quadrant becomes a pie slice anchored at the initial fix;
/// unreported (zero) quadrants are skipped.
pub struct BuildWindWedge<'a> {
    anchor: &'a ForecastFix,
    threshold: WindThreshold,
    radii: &'a QuadrantRadii,
    params: WedgeParams,
}

impl<'a> BuildWindWedge<'a> {
    /// Creates a new `BuildWindWedge` operation with default parameters.
    #[must_use]
    pub fn new(anchor: &'a ForecastFix, threshold: WindThreshold, radii: &'a QuadrantRadii) -> Self {
        Self {
            anchor,
            threshold,
            radii,
            params: WedgeParams::default(),
        }
    }

    /// Sets custom wedge parameters.
    #[must_use]
    pub fn with_params(mut self, params: WedgeParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidParameters` if the arc span is outside `1..=360` degrees.
    pub fn execute(&self) -> Result<WindWedge> {
        let span = self.params.arc_span_deg;
        if !(1..=360).contains(&span) {
            return Err(InputError::InvalidParameters(format!(
                "quadrant arc span must be within 1..=360 degrees, got {span}"
            ))
            .into());
        }

        if self.radii.is_empty() {
            debug!(threshold_kt = self.threshold.knots(), "no quadrants reported");
            return Ok(WindWedge {
                threshold: self.threshold,
                geometry: MultiPolygon::new(vec![]),
            });
        }

        let (lat, lon) = (self.anchor.lat, self.anchor.lon);
        let slices: Vec<_> = self
            .radii
            .reported()
            .filter_map(|(quadrant, radius_nm)| {
                let start = quadrant.start_bearing();
                let mut ring = vec![Coord { x: lon, y: lat }];
                ring.extend(arc_points(lat, lon, radius_nm, start, start + span));
                trace!(?quadrant, radius_nm, vertices = ring.len(), "quadrant slice");
                polygon_from_ring(ring)
            })
            .collect();

        let slice_count = slices.len();
        let geometry = union_all(slices);
        debug!(
            threshold_kt = self.threshold.knots(),
            slices = slice_count,
            parts = geometry.0.len(),
            "built wind wedge"
        );

        Ok(WindWedge {
            threshold: self.threshold,
            geometry,
        })
    }
}
