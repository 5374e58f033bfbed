use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ChartType, DataPoint};

pub const DEFAULT_STROKE_WIDTH: u32 = 4;
pub const DEFAULT_STROKE_COLOR: &str = "#d3d3d3";
pub const DEFAULT_STROKE_DASH: u32 = 0;

/// Optional per-series stroke settings.
///
/// Missing fields fall back to the chart-wide defaults when strokes are
/// derived for a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesStroke {
    pub width: Option<u32>,
    pub color: Option<String>,
    pub dash: Option<u32>,
}

impl SeriesStroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: u32) -> Self {
        self.dash = Some(dash);
        self
    }

    #[must_use]
    pub fn resolved_width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_STROKE_WIDTH)
    }

    #[must_use]
    pub fn resolved_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_STROKE_COLOR)
    }

    #[must_use]
    pub fn resolved_dash(&self) -> u32 {
        self.dash.unwrap_or(DEFAULT_STROKE_DASH)
    }
}

/// Contract implemented by child series declarations.
///
/// A chart holds declarations by `Rc` identity, so implementors may compute
/// their data lazily or from interior state owned by the UI element.
pub trait ChartSeries<T>: fmt::Debug {
    fn name(&self) -> &str;
    fn chart_type(&self) -> ChartType;
    fn data(&self) -> Vec<DataPoint<T>>;

    fn stroke(&self) -> Option<&SeriesStroke> {
        None
    }

    fn show_data_labels(&self) -> bool {
        false
    }
}

/// Plain series declaration with fixed data.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDeclaration<T> {
    name: String,
    chart_type: ChartType,
    points: Vec<DataPoint<T>>,
    stroke: Option<SeriesStroke>,
    show_data_labels: bool,
}

impl<T> SeriesDeclaration<T> {
    #[must_use]
    pub fn new(name: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            name: name.into(),
            chart_type,
            points: Vec::new(),
            stroke: None,
            show_data_labels: false,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint<T>>) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: SeriesStroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_data_labels(mut self, show: bool) -> Self {
        self.show_data_labels = show;
        self
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint<T>] {
        &self.points
    }
}

impl<T: Clone + fmt::Debug> ChartSeries<T> for SeriesDeclaration<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    fn data(&self) -> Vec<DataPoint<T>> {
        self.points.clone()
    }

    fn stroke(&self) -> Option<&SeriesStroke> {
        self.stroke.as_ref()
    }

    fn show_data_labels(&self) -> bool {
        self.show_data_labels
    }
}
