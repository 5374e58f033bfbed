use crate::options::{ChartOptions, Markers, Tooltip};

pub const MIN_SELECTABLE_MARKER_SIZE: f64 = 5.0;

/// Makes points of line-like charts clickable when selection is observed.
///
/// Tooltips switch to intersect-only so a click targets one point, and
/// markers get a visible size unless the user already set a positive one.
pub(super) fn apply_selection_fixup<T>(
    mut options: ChartOptions<T>,
    has_selection_callback: bool,
) -> ChartOptions<T> {
    let line_like = options
        .chart_type()
        .is_some_and(|chart_type| chart_type.needs_selectable_markers());
    if !has_selection_callback || !line_like {
        return options;
    }

    let markers = options.markers.get_or_insert_with(Markers::default);
    if markers.size.is_none_or(|size| size <= 0.0) {
        markers.size = Some(MIN_SELECTABLE_MARKER_SIZE);
    }

    let tooltip = options.tooltip.get_or_insert_with(Tooltip::default);
    tooltip.intersect = Some(true);
    tooltip.shared = Some(false);
    options
}
