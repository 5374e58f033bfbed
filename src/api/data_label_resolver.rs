use crate::options::{ChartOptions, DataLabels, ResolvedSeries};

/// Recomputes which series indices show data labels.
///
/// Indices carried by the base options stay unless a series at that
/// position opts out; positions are recomputed from the current order.
pub(super) fn apply_data_labels<T>(
    mut options: ChartOptions<T>,
    series: &[ResolvedSeries<T>],
) -> ChartOptions<T> {
    let labels = options.data_labels.get_or_insert_with(DataLabels::default);
    let enabled_on_series = labels.enabled_on_series.get_or_insert_with(Default::default);

    let mut any_enabled = false;
    for (index, entry) in series.iter().enumerate() {
        if entry.declaration.show_data_labels() {
            any_enabled = true;
            enabled_on_series.insert(index);
        } else {
            enabled_on_series.shift_remove(&index);
        }
    }
    labels.enabled = Some(any_enabled);
    options
}
