//! Serializable chart configuration consumed by the host charting library.

mod resolved_series;
mod sections;

use serde::{Deserialize, Serialize};

use crate::core::ChartType;

pub use resolved_series::ResolvedSeries;
pub use sections::{
    ChartSection, DataLabels, Markers, PlotOptions, PlotOptionsBar, Stroke, StrokeCurve, Title,
    TitleAlign, Tooltip, XAxis,
};

/// Chart-wide options aggregate.
///
/// Hosts supply a base value; every render pass clones it and derives the
/// series-dependent fields from scratch. `series`, `series_non_x_axis` and
/// `labels` are owned by reconciliation and never read from JSON input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(serialize = "", deserialize = ""))]
pub struct ChartOptions<T> {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    #[serde(default)]
    pub chart: ChartSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<XAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<Markers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<ResolvedSeries<T>>>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub series_non_x_axis: Option<Vec<f64>>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl<T> Default for ChartOptions<T> {
    fn default() -> Self {
        Self {
            debug: false,
            chart: ChartSection::default(),
            xaxis: None,
            title: None,
            colors: None,
            stroke: None,
            data_labels: None,
            tooltip: None,
            markers: None,
            plot_options: None,
            series: None,
            series_non_x_axis: None,
            labels: None,
        }
    }
}

impl<T> ChartOptions<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart.chart_type = Some(chart_type);
        self
    }

    #[must_use]
    pub fn with_chart_id(mut self, id: impl Into<String>) -> Self {
        self.chart.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_horizontal_bars(mut self, horizontal: bool) -> Self {
        self.plot_options
            .get_or_insert_with(PlotOptions::default)
            .bar
            .get_or_insert_with(PlotOptionsBar::default)
            .horizontal = Some(horizontal);
        self
    }

    #[must_use]
    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.markers.get_or_insert_with(Markers::default).size = Some(size);
        self
    }

    #[must_use]
    pub fn chart_type(&self) -> Option<ChartType> {
        self.chart.chart_type
    }

    #[must_use]
    pub fn chart_id(&self) -> Option<&str> {
        self.chart.id.as_deref()
    }

    #[must_use]
    pub fn is_non_axis_chart(&self) -> bool {
        self.chart.chart_type.is_some_and(ChartType::is_non_axis)
    }

    #[must_use]
    pub fn horizontal_bars(&self) -> bool {
        self.plot_options
            .as_ref()
            .and_then(|plot| plot.bar.as_ref())
            .and_then(|bar| bar.horizontal)
            .unwrap_or(false)
    }
}
