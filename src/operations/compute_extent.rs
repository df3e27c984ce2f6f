use geo::{Area, BooleanOps, MultiPolygon};
use tracing::debug;

use crate::error::{GeometryError, InputError, Result};
use crate::math::TOLERANCE;

use super::{ExtentParams, ForecastCone, WindWedge};

/// Map viewport in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapExtent {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl MapExtent {
    /// Longitude span.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Latitude span.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Width:height ratio.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width() / self.height()
    }

}

/// Pads a bounding box and widens its narrower side about the center until
/// the width:height ratio equals `params.aspect_ratio`.
///
/// The result always covers the padded box; it is never cropped. Callers
/// must pass a non-negative padding, a positive ratio and a box with height.
#[must_use]
pub(crate) fn frame_bounds(bounds: &MapExtent, params: &ExtentParams) -> MapExtent {
    let lat_mid = (bounds.lat_max + bounds.lat_min) * 0.5;
    let lon_mid = (bounds.lon_max + bounds.lon_min) * 0.5;
    let mut dlat = bounds.height() + 2.0 * params.padding_deg;
    let mut dlon = bounds.width() + 2.0 * params.padding_deg;

    if dlon / dlat < params.aspect_ratio {
        dlon = dlat * params.aspect_ratio;
    } else {
        dlat = dlon / params.aspect_ratio;
    }

    MapExtent {
        lon_min: lon_mid - dlon * 0.5,
        lon_max: lon_mid + dlon * 0.5,
        lat_min: lat_mid - dlat * 0.5,
        lat_max: lat_mid + dlat * 0.5,
    }
}

/// Computes the viewport framing the cone and the outermost wind wedge.
pub struct ComputeExtent<'a> {
    cone: &'a ForecastCone,
    wedge: &'a WindWedge,
    params: ExtentParams,
}

impl<'a> ComputeExtent<'a> {
    /// Creates a new `ComputeExtent` query with default parameters.
    #[must_use]
    pub fn new(cone: &'a ForecastCone, wedge: &'a WindWedge) -> Self {
        Self {
            cone,
            wedge,
            params: ExtentParams::default(),
        }
    }

    /// Sets custom extent parameters.
    #[must_use]
    pub fn with_params(mut self, params: ExtentParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyGeometry` if the union of cone and wedge
    /// has no area, and `InputError::InvalidParameters` for a negative
    /// padding or a non-positive aspect ratio.
    pub fn execute(&self) -> Result<MapExtent> {
        let ExtentParams {
            padding_deg,
            aspect_ratio,
        } = self.params;
        if !(padding_deg.is_finite() && padding_deg >= 0.0) {
            return Err(InputError::InvalidParameters(format!(
                "extent padding must be non-negative, got {padding_deg}"
            ))
            .into());
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(InputError::InvalidParameters(format!(
                "aspect ratio must be positive, got {aspect_ratio}"
            ))
            .into());
        }

        let union = self.cone.geometry().union(self.wedge.geometry());
        let bounds = exterior_bounds(&union).ok_or(GeometryError::EmptyGeometry)?;
        if union.unsigned_area() < TOLERANCE || bounds.height() < TOLERANCE {
            return Err(GeometryError::EmptyGeometry.into());
        }

        let extent = frame_bounds(&bounds, &self.params);
        debug!(
            lon_min = extent.lon_min,
            lon_max = extent.lon_max,
            lat_min = extent.lat_min,
            lat_max = extent.lat_max,
            "computed map extent"
        );
        Ok(extent)
    }
}

/// Bounding box of all exterior rings, or `None` if there are none.
fn exterior_bounds(geometry: &MultiPolygon<f64>) -> Option<MapExtent> {
    geometry
        .0
        .iter()
        .flat_map(|polygon| polygon.exterior().coords())
        .fold(None, |acc: Option<MapExtent>, c| {
            Some(match acc {
                None => MapExtent {
                    lon_min: c.x,
                    lon_max: c.x,
                    lat_min: c.y,
                    lat_max: c.y,
                },
                Some(e) => MapExtent {
                    lon_min: e.lon_min.min(c.x),
                    lon_max: e.lon_max.max(c.x),
                    lat_min: e.lat_min.min(c.y),
                    lat_max: e.lat_max.max(c.y),
                },
            })
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StormconeError;
    use crate::model::{ErrorCurve, ForecastFix, QuadrantRadii, WindThreshold};
    use crate::operations::{BuildCone, BuildWindWedge, InterpolateTrack};

    fn covers(outer: &MapExtent, inner: &MapExtent) -> bool {
        inner.lon_min >= outer.lon_min - TOLERANCE
            && inner.lon_max <= outer.lon_max + TOLERANCE
            && inner.lat_min >= outer.lat_min - TOLERANCE
            && inner.lat_max <= outer.lat_max + TOLERANCE
    }

    fn bounds(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> MapExtent {
        MapExtent {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }

    /// A cone built from a track without position error.
    fn empty_cone() -> ForecastCone {
        let fixes = [
            ForecastFix::new(0, 20.0, 140.0, 35),
            ForecastFix::new(12, 21.0, 139.0, 45),
        ];
        let curve = ErrorCurve::new(&[(0, 0.0), (12, 0.0)]).unwrap();
        let track = InterpolateTrack::new(&fixes, &curve).execute().unwrap();
        BuildCone::new(&track).execute().unwrap()
    }

    #[test]
    fn tall_box_is_widened() {
        let framed = frame_bounds(&bounds(140.0, 142.0, 20.0, 26.0), &ExtentParams::default());
        assert!((framed.aspect() - 1.7).abs() < 1e-12);
        assert!((framed.height() - 8.0).abs() < 1e-12);
        assert!((framed.width() - 13.6).abs() < 1e-12);
        assert!((framed.lon_min + framed.lon_max - 282.0).abs() < 1e-12);
    }

    #[test]
    fn wide_box_is_heightened() {
        let framed = frame_bounds(&bounds(130.0, 150.0, 20.0, 22.0), &ExtentParams::default());
        assert!((framed.aspect() - 1.7).abs() < 1e-12);
        assert!((framed.width() - 22.0).abs() < 1e-12);
        assert!((framed.lat_min + framed.lat_max - 42.0).abs() < 1e-12);
    }

    #[test]
    fn framed_box_covers_padded_input() {
        for b in [
            bounds(140.0, 142.0, 20.0, 26.0),
            bounds(130.0, 150.0, 20.0, 22.0),
            bounds(0.0, 17.0, 0.0, 10.0),
        ] {
            let framed = frame_bounds(&b, &ExtentParams::default());
            let padded = bounds(b.lon_min - 1.0, b.lon_max + 1.0, b.lat_min - 1.0, b.lat_max + 1.0);
            assert!(covers(&framed, &padded));
        }
    }

    #[test]
    fn wedge_alone_is_enough() {
        let fix = ForecastFix::new(0, 22.1, 144.9, 35);
        let radii = QuadrantRadii::new(60.0, 60.0, 60.0, 60.0);
        let wedge = BuildWindWedge::new(&fix, WindThreshold::Kt34, &radii)
            .execute()
            .unwrap();
        let cone = empty_cone();
        let extent = ComputeExtent::new(&cone, &wedge).execute().unwrap();
        assert!((extent.aspect() - 1.7).abs() < 1e-9);
        assert!(extent.lon_min < 144.9 && extent.lon_max > 144.9);
    }

    #[test]
    fn zero_padding_frames_the_wedge_tightly() {
        let fix = ForecastFix::new(0, 22.1, 144.9, 35);
        let radii = QuadrantRadii::new(60.0, 0.0, 0.0, 0.0);
        let wedge = BuildWindWedge::new(&fix, WindThreshold::Kt34, &radii)
            .execute()
            .unwrap();
        let cone = empty_cone();
        let extent = ComputeExtent::new(&cone, &wedge)
            .with_params(ExtentParams::default().with_padding_deg(0.0))
            .execute()
            .unwrap();
        for v in [extent.lon_min, extent.lon_max, extent.lat_min, extent.lat_max] {
            assert!(v.is_finite());
        }
        assert!((extent.aspect() - 1.7).abs() < 1e-9);
        let tight = exterior_bounds(wedge.geometry()).unwrap();
        assert!(covers(&extent, &tight));
        // one axis is not widened at all
        assert!(
            (extent.height() - tight.height()).abs() < 1e-9
                || (extent.width() - tight.width()).abs() < 1e-9
        );
    }

    #[test]
    fn rejects_negative_padding() {
        let fix = ForecastFix::new(0, 22.1, 144.9, 35);
        let radii = QuadrantRadii::new(60.0, 0.0, 0.0, 0.0);
        let wedge = BuildWindWedge::new(&fix, WindThreshold::Kt34, &radii)
            .execute()
            .unwrap();
        let cone = empty_cone();
        let err = ComputeExtent::new(&cone, &wedge)
            .with_params(ExtentParams::default().with_padding_deg(-1.0))
            .execute()
            .unwrap_err();
        assert!(matches!(err, StormconeError::Input(InputError::InvalidParameters(_))));
    }

    #[test]
    fn nothing_to_frame() {
        let fix = ForecastFix::new(0, 22.1, 144.9, 35);
        let radii = QuadrantRadii::default();
        let wedge = BuildWindWedge::new(&fix, WindThreshold::Kt34, &radii)
            .execute()
            .unwrap();
        let cone = empty_cone();
        let err = ComputeExtent::new(&cone, &wedge).execute().unwrap_err();
        assert!(matches!(err, StormconeError::Geometry(GeometryError::EmptyGeometry)));
    }

    #[test]
    fn rejects_bad_ratio() {
        let fix = ForecastFix::new(0, 22.1, 144.9, 35);
        let radii = QuadrantRadii::new(60.0, 0.0, 0.0, 0.0);
        let wedge = BuildWindWedge::new(&fix, WindThreshold::Kt34, &radii)
            .execute()
            .unwrap();
        let cone = empty_cone();
        let r = ComputeExtent::new(&cone, &wedge)
            .with_params(ExtentParams::default().with_aspect_ratio(0.0))
            .execute();
        assert!(r.is_err());
    }
}
