use tracing::{debug, warn};

use crate::error::{Result, TrackError};
use crate::model::{Advisory, ForecastFix, IntensityCategory, WindThreshold};
use crate::operations::{
    BuildCone, BuildWindWedge, ComputeExtent, ConeParams, DensifiedTrack, ExtentParams,
    ForecastCone, InterpolateTrack, MapExtent, TrackParams, WedgeParams, WindWedge, MIN_FIXES,
};

/// Parameters for every stage of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GraphicParams {
    pub track: TrackParams,
    pub cone: ConeParams,
    pub wedge: WedgeParams,
    pub extent: ExtentParams,
}

/// A forecast position marker with its intensity class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMarker {
    pub lead_hours: u32,
    pub lon: f64,
    pub lat: f64,
    pub category: IntensityCategory,
}

/// Everything the renderer needs to draw one advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastGraphic {
    current: ForecastFix,
    track: DensifiedTrack,
    cone: ForecastCone,
    wedges: Vec<WindWedge>,
    markers: Vec<TrackMarker>,
    extent: MapExtent,
}

impl ForecastGraphic {
    /// The observed position at issue time.
    #[must_use]
    pub fn current(&self) -> &ForecastFix {
        &self.current
    }

    /// The densified track.
    #[must_use]
    pub fn track(&self) -> &DensifiedTrack {
        &self.track
    }

    /// The cone of uncertainty.
    #[must_use]
    pub fn cone(&self) -> &ForecastCone {
        &self.cone
    }

    /// Wind wedges ordered from 34 kt to 64 kt.
    #[must_use]
    pub fn wedges(&self) -> &[WindWedge] {
        &self.wedges
    }

    /// Wedge for one threshold.
    #[must_use]
    pub fn wedge(&self, threshold: WindThreshold) -> Option<&WindWedge> {
        self.wedges.iter().find(|w| w.threshold() == threshold)
    }

    /// Markers for the forecast fixes after the initial one.
    #[must_use]
    pub fn markers(&self) -> &[TrackMarker] {
        &self.markers
    }

    /// The map viewport.
    #[must_use]
    pub fn extent(&self) -> &MapExtent {
        &self.extent
    }
}

/// Runs the whole geometry pipeline for one advisory.
///
/// Stages run in order: track interpolation, cone, wind wedges, extent. The
/// first failing stage aborts the run.
pub struct BuildGraphic<'a> {
    advisory: &'a Advisory,
    params: GraphicParams,
}

impl<'a> BuildGraphic<'a> {
    /// Creates a new `BuildGraphic` operation with default parameters.
    #[must_use]
    pub fn new(advisory: &'a Advisory) -> Self {
        Self {
            advisory,
            params: GraphicParams::default(),
        }
    }

    /// Sets custom parameters for all stages.
    #[must_use]
    pub fn with_params(mut self, params: GraphicParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by any stage.
    pub fn execute(&self) -> Result<ForecastGraphic> {
        let advisory = self.advisory;
        let current = *advisory
            .initial_fix()
            .ok_or(TrackError::InsufficientData {
                required: MIN_FIXES,
                actual: 0,
            })?;

        let track = InterpolateTrack::new(&advisory.fixes, &advisory.error_curve)
            .with_params(self.params.track)
            .execute()?;
        let cone = BuildCone::new(&track)
            .with_params(self.params.cone)
            .execute()?;

        for v in advisory.wind_radii.nesting_violations() {
            warn!(
                quadrant = ?v.quadrant,
                outer_kt = v.outer.knots(),
                outer_nm = v.outer_nm,
                inner_kt = v.inner.knots(),
                inner_nm = v.inner_nm,
                "wind radii not nested; drawing as reported"
            );
        }

        let wedges = WindThreshold::ALL
            .iter()
            .map(|&threshold| {
                BuildWindWedge::new(&current, threshold, advisory.wind_radii.get(threshold))
                    .with_params(self.params.wedge)
                    .execute()
            })
            .collect::<Result<Vec<_>>>()?;

        let extent = ComputeExtent::new(&cone, &wedges[0])
            .with_params(self.params.extent)
            .execute()?;

        let markers = advisory.fixes[1..]
            .iter()
            .map(|f| TrackMarker {
                lead_hours: f.lead_hours,
                lon: f.lon,
                lat: f.lat,
                category: f.category(),
            })
            .collect();

        debug!(
            samples = track.len(),
            cone_parts = cone.geometry().0.len(),
            "forecast graphic ready"
        );

        Ok(ForecastGraphic {
            current,
            track,
            cone,
            wedges,
            markers,
            extent,
        })
    }
}
