use std::rc::Rc;

use chart_bridge::ChartError;
use chart_bridge::api::{ReconcileInput, reconcile, serialize_chart_options};
use chart_bridge::core::{ChartSeries, ChartType, DataPoint, SeriesDeclaration, SeriesStroke};
use chart_bridge::options::ChartOptions;
use proptest::prelude::*;

static ALL_TYPES: [ChartType; 15] = [
    ChartType::Line,
    ChartType::Area,
    ChartType::Bar,
    ChartType::Pie,
    ChartType::Donut,
    ChartType::RadialBar,
    ChartType::Scatter,
    ChartType::Bubble,
    ChartType::Heatmap,
    ChartType::Treemap,
    ChartType::BoxPlot,
    ChartType::Candlestick,
    ChartType::Radar,
    ChartType::PolarArea,
    ChartType::RangeBar,
];

static MIXABLE_TYPES: [ChartType; 5] = [
    ChartType::Line,
    ChartType::Area,
    ChartType::Bar,
    ChartType::Scatter,
    ChartType::Bubble,
];

#[derive(Debug, Clone)]
struct SeriesShape {
    chart_type: ChartType,
    stroke: Option<(Option<u32>, Option<bool>, Option<u32>)>,
    labels: bool,
    values: Vec<f64>,
}

fn series_shape(types: &'static [ChartType]) -> impl Strategy<Value = SeriesShape> {
    (
        proptest::sample::select(types),
        proptest::option::of((
            proptest::option::of(1u32..12),
            proptest::option::of(any::<bool>()),
            proptest::option::of(0u32..8),
        )),
        any::<bool>(),
        proptest::collection::vec(-1_000.0f64..1_000.0, 0..8),
    )
        .prop_map(|(chart_type, stroke, labels, values)| SeriesShape {
            chart_type,
            stroke,
            labels,
            values,
        })
}

fn build(shapes: &[SeriesShape]) -> Vec<Rc<dyn ChartSeries<usize>>> {
    shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let points = shape
                .values
                .iter()
                .enumerate()
                .map(|(i, y)| DataPoint::new(format!("p{i}"), *y, i))
                .collect();
            let mut declaration =
                SeriesDeclaration::<usize>::new(format!("s{index}"), shape.chart_type)
                    .with_points(points)
                    .with_data_labels(shape.labels);
            if let Some((width, red, dash)) = shape.stroke {
                let mut stroke = SeriesStroke::new();
                stroke.width = width;
                stroke.color = red.map(|red| if red { "#ff0000" } else { "#0000ff" }.to_owned());
                stroke.dash = dash;
                declaration = declaration.with_stroke(stroke);
            }
            Rc::new(declaration) as Rc<dyn ChartSeries<usize>>
        })
        .collect()
}

fn input<'a>(
    base: &'a ChartOptions<usize>,
    declarations: &'a [Rc<dyn ChartSeries<usize>>],
) -> ReconcileInput<'a, usize> {
    ReconcileInput {
        base,
        declarations,
        has_selection_callback: true,
    }
}

proptest! {
    #[test]
    fn reconciliation_is_idempotent(
        shapes in proptest::collection::vec(series_shape(&ALL_TYPES), 0..6),
        horizontal in any::<bool>()
    ) {
        let declarations = build(&shapes);
        let base = ChartOptions::new().with_horizontal_bars(horizontal);

        let first = reconcile(input(&base, &declarations));
        let second = reconcile(input(&base, &declarations));
        match (first, second) {
            (Ok(first), Ok(second)) => {
                let first = serialize_chart_options(&first.options).expect("serialize");
                let second = serialize_chart_options(&second.options).expect("serialize");
                prop_assert_eq!(first, second);
            }
            (
                Err(ChartError::UnsupportedMixedType { .. }),
                Err(ChartError::UnsupportedMixedType { .. }),
            ) => {}
            (first, second) => prop_assert!(
                false,
                "diverging results: {:?} / {:?}",
                first.err(),
                second.err()
            ),
        }
    }

    #[test]
    fn stroke_arrays_align_with_series(
        shapes in proptest::collection::vec(series_shape(&MIXABLE_TYPES), 1..8)
    ) {
        let declarations = build(&shapes);
        let base = ChartOptions::new();
        let result = reconcile(input(&base, &declarations)).expect("mixable types");

        let any_stroke = shapes.iter().any(|shape| shape.stroke.is_some());
        match result.options.stroke {
            Some(stroke) => {
                prop_assert!(any_stroke);
                let widths = stroke.width.expect("widths");
                let colors = stroke.colors.expect("colors");
                let dashes = stroke.dash_array.expect("dashes");
                prop_assert_eq!(widths.len(), shapes.len());
                prop_assert_eq!(colors.len(), shapes.len());
                prop_assert_eq!(dashes.len(), shapes.len());
                for (index, shape) in shapes.iter().enumerate() {
                    let (width, _, dash) = shape.stroke.unwrap_or((None, None, None));
                    prop_assert_eq!(widths[index], width.unwrap_or(4));
                    prop_assert_eq!(dashes[index], dash.unwrap_or(0));
                }
            }
            None => prop_assert!(!any_stroke),
        }
    }

    #[test]
    fn mixed_registries_tag_every_series(
        shapes in proptest::collection::vec(series_shape(&ALL_TYPES), 2..6)
    ) {
        let declarations = build(&shapes);
        let base = ChartOptions::new();
        let mut distinct: Vec<ChartType> = Vec::new();
        for shape in &shapes {
            if !distinct.contains(&shape.chart_type) {
                distinct.push(shape.chart_type);
            }
        }
        prop_assume!(distinct.len() > 1);

        let unmixable = shapes
            .iter()
            .find(|shape| !MIXABLE_TYPES.contains(&shape.chart_type))
            .map(|shape| shape.chart_type);
        match (reconcile(input(&base, &declarations)), unmixable) {
            (Ok(result), None) => {
                prop_assert_eq!(result.series.len(), shapes.len());
                prop_assert!(result.series.iter().all(|series| series.mixed_type.is_some()));
            }
            (Err(ChartError::UnsupportedMixedType { chart_type }), Some(expected)) => {
                prop_assert_eq!(chart_type, expected);
            }
            (result, expected) => prop_assert!(
                false,
                "unexpected outcome {:?} for unmixable {:?}",
                result.err(),
                expected
            ),
        }
    }

    #[test]
    fn axis_and_non_axis_fields_are_exclusive(
        chart_type in proptest::sample::select(&ALL_TYPES[..]),
        values in proptest::collection::vec(-100.0f64..100.0, 1..10)
    ) {
        let shapes = vec![SeriesShape {
            chart_type,
            stroke: None,
            labels: false,
            values: values.clone(),
        }];
        let declarations = build(&shapes);
        let base = ChartOptions::new();
        let result = reconcile(input(&base, &declarations)).expect("single type");

        prop_assert_eq!(result.series.len(), 1);
        if chart_type.is_non_axis() {
            prop_assert!(result.options.series.is_none());
            prop_assert_eq!(result.options.series_non_x_axis, Some(values.clone()));
            prop_assert_eq!(result.options.labels.map(|labels| labels.len()), Some(values.len()));
        } else {
            prop_assert!(result.options.series_non_x_axis.is_none());
            prop_assert!(result.options.labels.is_none());
            prop_assert_eq!(result.options.series.map(|series| series.len()), Some(1));
        }
    }
}
