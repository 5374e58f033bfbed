use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::options::ResolvedSeries;
use crate::surface::HostSurface;

use super::ChartComponent;
use super::render_trigger::DirtyReason;

/// Selection notification sent by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    pub series_index: usize,
    pub data_point_index: usize,
}

impl SelectionEvent {
    #[must_use]
    pub const fn new(series_index: usize, data_point_index: usize) -> Self {
        Self {
            series_index,
            data_point_index,
        }
    }
}

/// Selected point together with the series it belongs to.
#[derive(Debug, Clone)]
pub struct SelectedData<T> {
    pub series_index: usize,
    pub data_point_index: usize,
    pub series: ResolvedSeries<T>,
    pub data_point: DataPoint<T>,
}

pub type SelectionCallback<T> = Box<dyn FnMut(SelectedData<T>)>;

/// Selection callback plus the queue of resolved selections awaiting dispatch.
pub(super) struct SelectionBridge<T> {
    callback: Option<SelectionCallback<T>>,
    pending: VecDeque<SelectedData<T>>,
}

impl<T> Default for SelectionBridge<T> {
    fn default() -> Self {
        Self {
            callback: None,
            pending: VecDeque::new(),
        }
    }
}

impl<T> SelectionBridge<T> {
    pub(super) fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl<T: Clone, H: HostSurface> ChartComponent<T, H> {
    /// Registers the selection callback.
    ///
    /// Line-like charts need a fix-up pass once a callback is present, so the
    /// chart is marked dirty.
    pub fn set_selection_callback(&mut self, callback: impl FnMut(SelectedData<T>) + 'static) {
        self.selection.callback = Some(Box::new(callback));
        self.trigger.mark_dirty(DirtyReason::SelectionCallback);
    }

    pub fn clear_selection_callback(&mut self) {
        self.selection.callback = None;
        self.selection.pending.clear();
        self.trigger.mark_dirty(DirtyReason::SelectionCallback);
    }

    #[must_use]
    pub fn has_selection_callback(&self) -> bool {
        self.selection.has_callback()
    }

    #[must_use]
    pub fn pending_selection_count(&self) -> usize {
        self.selection.pending.len()
    }

    /// Maps a host selection onto the last rendered series and queues it.
    ///
    /// Ignored when no callback is registered. Indices are trusted to match
    /// the last render; anything else is reported as
    /// `ChartError::SelectionOutOfRange` and nothing is queued.
    pub fn on_data_point_selected(&mut self, event: SelectionEvent) -> ChartResult<bool> {
        if !self.selection.has_callback() {
            return Ok(false);
        }
        let selected = self.resolve_selection(event)?;
        trace!(
            series_index = event.series_index,
            data_point_index = event.data_point_index,
            "queued data point selection"
        );
        self.selection.pending.push_back(selected);
        Ok(true)
    }

    /// Parses the host payload `{"seriesIndex":..,"dataPointIndex":..}` first.
    pub fn on_data_point_selected_json(&mut self, payload: &str) -> ChartResult<bool> {
        let event = SelectionEvent::from_json_str(payload)?;
        self.on_data_point_selected(event)
    }

    /// Invokes the callback for every queued selection in arrival order.
    pub fn dispatch_selections(&mut self) -> usize {
        let bridge = &mut self.selection;
        let Some(callback) = bridge.callback.as_mut() else {
            bridge.pending.clear();
            return 0;
        };

        let mut dispatched = 0;
        while let Some(selected) = bridge.pending.pop_front() {
            callback(selected);
            dispatched += 1;
        }
        dispatched
    }

    fn resolve_selection(&self, event: SelectionEvent) -> ChartResult<SelectedData<T>> {
        let out_of_range = || ChartError::SelectionOutOfRange {
            series_index: event.series_index,
            data_point_index: event.data_point_index,
        };
        let series = self
            .rendered
            .as_ref()
            .and_then(|snapshot| snapshot.series.get(event.series_index))
            .ok_or_else(out_of_range)?;
        let data_point = series
            .data
            .get(event.data_point_index)
            .ok_or_else(out_of_range)?;

        Ok(SelectedData {
            series_index: event.series_index,
            data_point_index: event.data_point_index,
            series: series.clone(),
            data_point: data_point.clone(),
        })
    }
}
