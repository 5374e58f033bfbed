use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart and series sub-types understood by the host charting library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Line,
    Area,
    Bar,
    Pie,
    Donut,
    RadialBar,
    Scatter,
    Bubble,
    Heatmap,
    Treemap,
    BoxPlot,
    Candlestick,
    Radar,
    PolarArea,
    RangeBar,
}

impl ChartType {
    /// Returns `true` for chart types without Cartesian axes.
    ///
    /// These consume a flat value list plus labels instead of axis series.
    #[must_use]
    pub const fn is_non_axis(self) -> bool {
        matches!(
            self,
            Self::Pie | Self::Donut | Self::PolarArea | Self::RadialBar
        )
    }

    /// Returns `true` for chart types whose points need visible markers to be
    /// selectable.
    #[must_use]
    pub const fn needs_selectable_markers(self) -> bool {
        matches!(self, Self::Line | Self::Area | Self::Radar)
    }

    /// Maps this sub-type into the mixed-chart vocabulary.
    ///
    /// Bars become `bar` when the chart is horizontal and `column` otherwise.
    pub fn to_mixed(self, horizontal_bars: bool) -> ChartResult<MixedType> {
        match self {
            Self::Line => Ok(MixedType::Line),
            Self::Scatter => Ok(MixedType::Scatter),
            Self::Area => Ok(MixedType::Area),
            Self::Bubble => Ok(MixedType::Bubble),
            Self::Bar if horizontal_bars => Ok(MixedType::Bar),
            Self::Bar => Ok(MixedType::Column),
            Self::Pie
            | Self::Donut
            | Self::RadialBar
            | Self::Heatmap
            | Self::Treemap
            | Self::BoxPlot
            | Self::Candlestick
            | Self::Radar
            | Self::PolarArea
            | Self::RangeBar => Err(ChartError::UnsupportedMixedType { chart_type: self }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::RadialBar => "radialBar",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::Heatmap => "heatmap",
            Self::Treemap => "treemap",
            Self::BoxPlot => "boxPlot",
            Self::Candlestick => "candlestick",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::RangeBar => "rangeBar",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-series type tag emitted when a chart combines several sub-types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixedType {
    Line,
    Area,
    Column,
    Bar,
    Scatter,
    Bubble,
}

/// Scale type of the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisType {
    Category,
    Datetime,
    Numeric,
}

#[cfg(test)]
mod tests {
    use super::{ChartType, MixedType};
    use crate::error::ChartError;

    #[test]
    fn non_axis_set_is_pie_donut_polar_and_radial() {
        let non_axis = [
            ChartType::Pie,
            ChartType::Donut,
            ChartType::PolarArea,
            ChartType::RadialBar,
        ];
        for chart_type in non_axis {
            assert!(chart_type.is_non_axis(), "{chart_type} must be non-axis");
        }
        assert!(!ChartType::Line.is_non_axis());
        assert!(!ChartType::Bar.is_non_axis());
        assert!(!ChartType::Radar.is_non_axis());
    }

    #[test]
    fn bar_maps_by_orientation() {
        assert_eq!(ChartType::Bar.to_mixed(false).expect("column"), MixedType::Column);
        assert_eq!(ChartType::Bar.to_mixed(true).expect("bar"), MixedType::Bar);
    }

    #[test]
    fn unmixable_type_reports_its_name() {
        let err = ChartType::Heatmap.to_mixed(false).expect_err("heatmap cannot mix");
        assert!(matches!(
            err,
            ChartError::UnsupportedMixedType {
                chart_type: ChartType::Heatmap
            }
        ));
        assert!(err.to_string().contains("heatmap"));
    }

    #[test]
    fn serde_names_match_host_vocabulary() {
        let json = serde_json::to_string(&ChartType::RadialBar).expect("serialize");
        assert_eq!(json, "\"radialBar\"");
        let json = serde_json::to_string(&MixedType::Column).expect("serialize");
        assert_eq!(json, "\"column\"");
    }
}
