use std::rc::Rc;

use tracing::debug;

use crate::core::ChartSeries;
use crate::error::ChartResult;
use crate::options::{ChartOptions, ResolvedSeries};

use super::data_label_resolver::apply_data_labels;
use super::non_axis_resolver::apply_series_shape;
use super::selection_fixup_resolver::apply_selection_fixup;
use super::series_resolver::resolve_series;
use super::stroke_resolver::apply_stroke;

/// Snapshot consumed by one reconciliation.
pub struct ReconcileInput<'a, T> {
    pub base: &'a ChartOptions<T>,
    pub declarations: &'a [Rc<dyn ChartSeries<T>>],
    pub has_selection_callback: bool,
}

/// Fully derived configuration for one render pass.
///
/// `series` always holds one entry per registered declaration, including for
/// non-axis charts whose serialized options omit the axis series.
#[derive(Debug, Clone)]
pub struct Reconciliation<T> {
    pub options: ChartOptions<T>,
    pub series: Vec<ResolvedSeries<T>>,
    pub is_mixed: bool,
}

/// Derives the render configuration from scratch.
///
/// Steps run in a fixed order: series resolution and mixed classification,
/// stroke, data labels, selection fix-up, axis/non-axis shaping. The base
/// options are never modified, so the same input always yields the same
/// output.
pub fn reconcile<T: Clone>(input: ReconcileInput<'_, T>) -> ChartResult<Reconciliation<T>> {
    let resolution = resolve_series(
        input.declarations,
        input.base.chart_type(),
        input.base.horizontal_bars(),
    )?;

    let mut options = input.base.clone();
    options.chart.chart_type = resolution.chart_type;
    let options = apply_stroke(options, &resolution.series);
    let options = apply_data_labels(options, &resolution.series);
    let options = apply_selection_fixup(options, input.has_selection_callback);
    let options = apply_series_shape(options, &resolution.series);

    debug!(
        series_count = resolution.series.len(),
        chart_type = ?options.chart_type(),
        is_mixed = resolution.is_mixed,
        "reconciled chart options"
    );

    Ok(Reconciliation {
        options,
        series: resolution.series,
        is_mixed: resolution.is_mixed,
    })
}
