use geo::{Area, Closest, ClosestPoint, Contains, MultiPolygon, Point};
use tracing::{debug, trace};

use crate::error::{InputError, Result};
use crate::math::geodesic::circle_points;
use crate::math::polygon_2d::{convex_hull, union_all};
use crate::math::Coord;

use super::{ConeParams, DensifiedTrack};

/// Distance in degrees within which a point on the outline counts as covered.
///
/// The polygon union snaps vertices, so boundary points such as the apex can
/// land a few nanodegrees outside the unioned outline.
pub const BOUNDARY_TOLERANCE_DEG: f64 = 1e-7;

/// The cone of uncertainty: the area swept by the growing position-error circle.
///
/// May consist of several disjoint parts, or be empty when every error radius is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCone {
    geometry: MultiPolygon<f64>,
}

impl ForecastCone {
    /// The cone outline in `(lon, lat)` degrees.
    #[must_use]
    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    /// Consumes the cone, returning its outline.
    #[must_use]
    pub fn into_geometry(self) -> MultiPolygon<f64> {
        self.geometry
    }

    /// Returns `true` if the cone has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    /// Planar area of the outline in square degrees.
    #[must_use]
    pub fn area_sq_deg(&self) -> f64 {
        self.geometry.unsigned_area()
    }

    /// Returns `true` if `(lon, lat)` lies strictly inside the cone.
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.geometry.contains(&Point::new(lon, lat))
    }

    /// Returns `true` if `(lon, lat)` lies inside the cone or on its outline,
    /// within [`BOUNDARY_TOLERANCE_DEG`].
    #[must_use]
    pub fn covers(&self, lon: f64, lat: f64) -> bool {
        let point = Point::new(lon, lat);
        if self.geometry.contains(&point) {
            return true;
        }
        match self.geometry.closest_point(&point) {
            Closest::Intersection(_) => true,
            Closest::SinglePoint(nearest) => {
                let d = nearest.0 - point.0;
                d.x.hypot(d.y) <= BOUNDARY_TOLERANCE_DEG
            }
            Closest::Indeterminate => false,
        }
    }
}

/// Builds the cone of uncertainty from a densified track.
///
/// Every sample contributes a geodesic error circle. Consecutive circles are
/// joined by the convex hull of the pair, which bridges the gap between
/// circles that do not overlap, and the resulting sleeves are unioned.
pub struct BuildCone<'a> {
    track: &'a DensifiedTrack,
    params: ConeParams,
}

impl<'a> BuildCone<'a> {
    /// Creates a new `BuildCone` operation with default parameters.
    #[must_use]
    pub fn new(track: &'a DensifiedTrack) -> Self {
        Self {
            track,
            params: ConeParams::default(),
        }
    }

    /// Sets custom cone parameters.
    #[must_use]
    pub fn with_params(mut self, params: ConeParams) -> Self {
        self.params = params;
        self
    }

    /// Samples the error circle of every track sample as an open `(lon, lat)` ring.
    ///
    /// Zero-radius samples yield rings whose points all coincide.
    #[must_use]
    pub fn error_circles(&self) -> Vec<Vec<Coord>> {
        self.track
            .samples()
            .iter()
            .map(|s| circle_points(s.lat, s.lon, s.error_radius_m, self.params.circle_samples))
            .collect()
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidParameters` for fewer than three circle
    /// samples and `GeometryError::Hull` if a hull cannot be built.
    pub fn execute(&self) -> Result<ForecastCone> {
        if self.params.circle_samples < 3 {
            return Err(InputError::InvalidParameters(format!(
                "error circles need at least 3 samples, got {}",
                self.params.circle_samples
            ))
            .into());
        }

        let circles = self.error_circles();
        let mut sleeves = Vec::with_capacity(circles.len().saturating_sub(1));
        for (i, pair) in circles.windows(2).enumerate() {
            let mut points = Vec::with_capacity(pair[0].len() + pair[1].len());
            points.extend_from_slice(&pair[0]);
            points.extend_from_slice(&pair[1]);
            match convex_hull(&points)? {
                Some(hull) => sleeves.push(hull),
                None => trace!(segment = i, "degenerate sleeve skipped"),
            }
        }

        let sleeve_count = sleeves.len();
        let geometry = union_all(sleeves);
        debug!(
            circles = circles.len(),
            sleeves = sleeve_count,
            parts = geometry.0.len(),
            "built forecast cone"
        );

        Ok(ForecastCone { geometry })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ErrorCurve, ForecastFix};
    use crate::operations::InterpolateTrack;

    fn track(fixes: &[ForecastFix], curve: &ErrorCurve) -> DensifiedTrack {
        InterpolateTrack::new(fixes, curve).execute().unwrap()
    }

    fn scenario() -> (Vec<ForecastFix>, ErrorCurve) {
        (
            vec![
                ForecastFix::new(0, 22.1, 144.9, 35),
                ForecastFix::new(12, 21.8, 144.1, 45),
                ForecastFix::new(24, 21.4, 142.9, 55),
                ForecastFix::new(36, 21.6, 141.5, 65),
            ],
            ErrorCurve::new(&[(0, 0.0), (12, 56_529.0), (24, 89_490.0), (36, 122_451.0)])
                .unwrap(),
        )
    }

    #[test]
    fn cone_is_single_part_with_area() {
        let (fixes, curve) = scenario();
        let track = track(&fixes, &curve);
        let cone = BuildCone::new(&track).execute().unwrap();
        assert!(!cone.is_empty());
        assert_eq!(cone.geometry().0.len(), 1);
        assert!(cone.area_sq_deg() > 0.0);
    }

    #[test]
    fn every_circle_vertex_is_covered() {
        let (fixes, curve) = scenario();
        let track = track(&fixes, &curve);
        let op = BuildCone::new(&track);
        let cone = op.execute().unwrap();
        for ring in op.error_circles() {
            for c in ring {
                assert!(cone.covers(c.x, c.y), "({}, {}) outside cone", c.x, c.y);
            }
        }
    }

    #[test]
    fn every_fix_is_covered() {
        let (fixes, curve) = scenario();
        let track = track(&fixes, &curve);
        let cone = BuildCone::new(&track).execute().unwrap();
        for fix in &fixes {
            assert!(cone.covers(fix.lon, fix.lat), "fix at {} h outside", fix.lead_hours);
        }
        assert!(!cone.covers(150.0, 22.1));
    }

    #[test]
    fn interior_points_are_strictly_contained() {
        let (fixes, curve) = scenario();
        let track = track(&fixes, &curve);
        let op = BuildCone::new(&track);
        let cone = op.execute().unwrap();
        for (sample, ring) in track.samples().iter().zip(op.error_circles()) {
            if sample.error_radius_m <= 0.0 {
                continue;
            }
            for c in ring {
                let lon = sample.lon + 0.999 * (c.x - sample.lon);
                let lat = sample.lat + 0.999 * (c.y - sample.lat);
                assert!(cone.contains(lon, lat), "({lon}, {lat}) outside cone");
            }
        }
    }

    #[test]
    fn apex_tapers_from_point() {
        let (fixes, curve) = scenario();
        let track = track(&fixes, &curve);
        let circles = BuildCone::new(&track).error_circles();
        assert!(circles[0].iter().all(|c| (c.x - 144.9).abs() < 1e-12));
        let cone = BuildCone::new(&track).execute().unwrap();
        // a point just down-track of the apex is inside
        let s1 = track.samples()[1];
        let lon = 144.9 + 0.1 * (s1.lon - 144.9);
        let lat = 22.1 + 0.1 * (s1.lat - 22.1);
        assert!(cone.contains(lon, lat));
    }

    #[test]
    fn zero_error_everywhere_gives_empty_cone() {
        let fixes = [
            ForecastFix::new(0, 20.0, 140.0, 35),
            ForecastFix::new(12, 21.0, 139.0, 45),
        ];
        let curve = ErrorCurve::new(&[(0, 0.0), (12, 0.0)]).unwrap();
        let track = track(&fixes, &curve);
        let cone = BuildCone::new(&track).execute().unwrap();
        assert!(cone.is_empty());
        assert!(cone.area_sq_deg().abs() < 1e-12);
    }

    #[test]
    fn rejects_too_few_circle_samples() {
        let (fixes, curve) = scenario();
        let track = track(&fixes, &curve);
        let r = BuildCone::new(&track)
            .with_params(ConeParams::default().with_circle_samples(2))
            .execute();
        assert!(r.is_err());
    }
}
