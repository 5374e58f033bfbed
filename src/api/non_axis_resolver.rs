use crate::options::{ChartOptions, ResolvedSeries};

/// Chooses between axis series and the flat value/label pair.
///
/// Non-axis charts take the first series' y values and x labels and never
/// carry axis series; axis charts carry the resolved list and never carry
/// the flat pair.
pub(super) fn apply_series_shape<T: Clone>(
    mut options: ChartOptions<T>,
    series: &[ResolvedSeries<T>],
) -> ChartOptions<T> {
    if !options.is_non_axis_chart() {
        options.series = Some(series.to_vec());
        options.series_non_x_axis = None;
        options.labels = None;
        return options;
    }

    options.series = None;
    let Some(first) = series.first() else {
        options.series_non_x_axis = None;
        options.labels = None;
        return options;
    };
    options.series_non_x_axis = Some(first.data.iter().map(|point| point.y).collect());
    options.labels = Some(first.data.iter().map(|point| point.label()).collect());
    options
}
