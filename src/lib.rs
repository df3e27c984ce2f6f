pub mod error;
pub mod graphic;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{Result, StormconeError};
pub use graphic::{BuildGraphic, ForecastGraphic, GraphicParams, TrackMarker};
