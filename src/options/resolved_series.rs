use std::rc::Rc;

use serde::Serialize;

use crate::core::{ChartSeries, DataPoint, MixedType};

/// Per-pass view of one registered series.
///
/// Rebuilt on every render pass; the last rendered list is kept only so
/// selection events can be mapped back to it.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct ResolvedSeries<T> {
    pub name: String,
    pub data: Vec<DataPoint<T>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mixed_type: Option<MixedType>,
    #[serde(skip)]
    pub declaration: Rc<dyn ChartSeries<T>>,
}
