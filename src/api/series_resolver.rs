use std::rc::Rc;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ChartSeries, ChartType};
use crate::error::ChartResult;
use crate::options::ResolvedSeries;

/// Outcome of binding the registered declarations for one pass.
pub(super) struct SeriesResolution<T> {
    pub(super) series: Vec<ResolvedSeries<T>>,
    pub(super) chart_type: Option<ChartType>,
    pub(super) is_mixed: bool,
}

/// Returns the distinct sub-types in first-seen order.
pub(super) fn distinct_chart_types<T>(
    declarations: &[Rc<dyn ChartSeries<T>>],
) -> SmallVec<[ChartType; 4]> {
    let mut distinct = SmallVec::<[ChartType; 4]>::new();
    for declaration in declarations {
        let chart_type = declaration.chart_type();
        if !distinct.contains(&chart_type) {
            distinct.push(chart_type);
        }
    }
    distinct
}

/// Resolves every declaration in registry order.
///
/// A single shared sub-type becomes the chart type. Several sub-types make
/// the chart mixed and every series must carry a mixed tag; the first
/// unmixable sub-type aborts the pass.
pub(super) fn resolve_series<T>(
    declarations: &[Rc<dyn ChartSeries<T>>],
    base_chart_type: Option<ChartType>,
    horizontal_bars: bool,
) -> ChartResult<SeriesResolution<T>> {
    let distinct = distinct_chart_types(declarations);
    let is_mixed = distinct.len() > 1;
    let chart_type = match distinct.as_slice() {
        [single] => Some(*single),
        _ => base_chart_type,
    };
    trace!(
        series_count = declarations.len(),
        distinct_types = distinct.len(),
        is_mixed,
        "resolve series"
    );

    let mut series = Vec::with_capacity(declarations.len());
    for declaration in declarations {
        let mixed_type = if is_mixed {
            Some(declaration.chart_type().to_mixed(horizontal_bars)?)
        } else {
            None
        };
        series.push(ResolvedSeries {
            name: declaration.name().to_owned(),
            data: declaration.data(),
            mixed_type,
            declaration: Rc::clone(declaration),
        });
    }

    Ok(SeriesResolution {
        series,
        chart_type,
        is_mixed,
    })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::resolve_series;
    use crate::core::{ChartSeries, ChartType, MixedType, SeriesDeclaration};
    use crate::error::ChartError;

    fn series(name: &str, chart_type: ChartType) -> Rc<dyn ChartSeries<()>> {
        Rc::new(SeriesDeclaration::<()>::new(name, chart_type))
    }

    #[test]
    fn uniform_registry_sets_chart_type_without_tags() {
        let declarations = vec![series("a", ChartType::Area), series("b", ChartType::Area)];
        let resolution =
            resolve_series(&declarations, Some(ChartType::Line), false).expect("resolve");
        assert!(!resolution.is_mixed);
        assert_eq!(resolution.chart_type, Some(ChartType::Area));
        assert!(resolution.series.iter().all(|s| s.mixed_type.is_none()));
    }

    #[test]
    fn empty_registry_keeps_base_chart_type() {
        let resolution =
            resolve_series::<()>(&[], Some(ChartType::Pie), false).expect("resolve");
        assert_eq!(resolution.chart_type, Some(ChartType::Pie));
        assert!(resolution.series.is_empty());
    }

    #[test]
    fn mixed_registry_tags_every_series() {
        let declarations = vec![
            series("a", ChartType::Line),
            series("b", ChartType::Bar),
            series("c", ChartType::Scatter),
        ];
        let resolution = resolve_series(&declarations, None, true).expect("resolve");
        assert!(resolution.is_mixed);
        assert_eq!(resolution.chart_type, None);
        let tags: Vec<_> = resolution.series.iter().map(|s| s.mixed_type).collect();
        assert_eq!(
            tags,
            vec![
                Some(MixedType::Line),
                Some(MixedType::Bar),
                Some(MixedType::Scatter)
            ]
        );
    }

    #[test]
    fn mixed_registry_with_pie_fails() {
        let declarations = vec![series("a", ChartType::Line), series("b", ChartType::Pie)];
        let err = resolve_series(&declarations, None, false)
            .err()
            .expect("pie cannot mix");
        assert!(matches!(
            err,
            ChartError::UnsupportedMixedType {
                chart_type: ChartType::Pie
            }
        ));
    }
}
