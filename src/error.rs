use thiserror::Error;

use crate::core::ChartType;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart type `{chart_type}` cannot be mixed with other series types")]
    UnsupportedMixedType { chart_type: ChartType },

    #[error(
        "selection out of range: series_index={series_index}, data_point_index={data_point_index}"
    )]
    SelectionOutOfRange {
        series_index: usize,
        data_point_index: usize,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
