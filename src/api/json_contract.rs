use crate::error::{ChartError, ChartResult};
use crate::options::ChartOptions;

use super::SelectionEvent;

/// Serializes options into the compact JSON the host library consumes.
pub fn serialize_chart_options<T>(options: &ChartOptions<T>) -> ChartResult<String> {
    serde_json::to_string(options)
        .map_err(|e| ChartError::Serialization(format!("failed to serialize chart options: {e}")))
}

impl<T> ChartOptions<T> {
    /// Parses base options, e.g. from a theme or config file.
    ///
    /// Series-derived fields are never read from input.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse chart options: {e}")))
    }
}

impl SelectionEvent {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse selection payload: {e}"))
        })
    }
}
