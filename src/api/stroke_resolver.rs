use crate::core::SeriesStroke;
use crate::options::{ChartOptions, ResolvedSeries, Stroke};

/// Derives positional stroke arrays from per-series stroke settings.
///
/// Left untouched when no series declares a stroke. Otherwise every series
/// contributes one entry, with defaults for missing settings, and the chart
/// colors mirror the stroke colors.
pub(super) fn apply_stroke<T>(
    mut options: ChartOptions<T>,
    series: &[ResolvedSeries<T>],
) -> ChartOptions<T> {
    if series.iter().all(|entry| entry.declaration.stroke().is_none()) {
        return options;
    }

    let fallback = SeriesStroke::default();
    let mut widths = Vec::with_capacity(series.len());
    let mut colors = Vec::with_capacity(series.len());
    let mut dashes = Vec::with_capacity(series.len());
    for entry in series {
        let stroke = entry.declaration.stroke().unwrap_or(&fallback);
        widths.push(stroke.resolved_width());
        colors.push(stroke.resolved_color().to_owned());
        dashes.push(stroke.resolved_dash());
    }

    let stroke = options.stroke.get_or_insert_with(Stroke::default);
    stroke.width = Some(widths);
    stroke.colors = Some(colors.clone());
    stroke.dash_array = Some(dashes);
    options.colors = Some(colors);
    options
}
