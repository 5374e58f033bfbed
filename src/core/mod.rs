pub mod chart_type;
pub mod primitives;
pub mod series;
pub mod types;

pub use chart_type::{ChartType, MixedType, XAxisType};
pub use series::{
    ChartSeries, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_DASH, DEFAULT_STROKE_WIDTH,
    SeriesDeclaration, SeriesStroke,
};
pub use types::{DataPoint, Dimension, XValue};
