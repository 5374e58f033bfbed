use std::rc::Rc;

use tracing::debug;

use crate::core::{ChartSeries, ChartType};
use crate::error::ChartResult;
use crate::options::{ChartOptions, ResolvedSeries};
use crate::surface::{CallbackHandle, HostSurface, SurfaceHandle};

use super::event_bridge::SelectionBridge;
use super::render_trigger::{DirtyReason, RenderTrigger, TriggerState};
use super::{ChartParameters, SeriesRegistry};

/// What the last successful render pass handed to the host.
#[derive(Debug, Clone)]
pub struct RenderedSnapshot<T> {
    pub chart_type: Option<ChartType>,
    pub series: Vec<ResolvedSeries<T>>,
    pub config_json: String,
}

/// Chart component facade driven by host lifecycle events.
///
/// `ChartComponent` owns the series registry, the user's base options, the
/// render trigger and the handles crossing the host boundary. All calls are
/// expected on the host's single UI execution context.
pub struct ChartComponent<T, H: HostSurface> {
    pub(super) host: H,
    pub(super) surface: SurfaceHandle,
    pub(super) options: ChartOptions<T>,
    pub(super) parameters: ChartParameters,
    pub(super) registry: SeriesRegistry<T>,
    pub(super) trigger: RenderTrigger,
    pub(super) callback: Option<CallbackHandle>,
    pub(super) rendered: Option<RenderedSnapshot<T>>,
    pub(super) selection: SelectionBridge<T>,
    pub(super) disposed: bool,
}

impl<T: Clone, H: HostSurface> ChartComponent<T, H> {
    #[must_use]
    pub fn new(host: H, surface: SurfaceHandle) -> Self {
        Self::with_options(host, surface, ChartOptions::default())
    }

    #[must_use]
    pub fn with_options(host: H, surface: SurfaceHandle, options: ChartOptions<T>) -> Self {
        Self {
            host,
            surface,
            options,
            parameters: ChartParameters::default(),
            registry: SeriesRegistry::new(),
            trigger: RenderTrigger::new(),
            callback: None,
            rendered: None,
            selection: SelectionBridge::default(),
            disposed: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions<T> {
        &self.options
    }

    /// Replaces the user's base options and re-applies the current parameters.
    pub fn set_options(&mut self, mut options: ChartOptions<T>) -> ChartResult<()> {
        self.parameters.apply_to(&mut options)?;
        self.options = options;
        self.trigger.mark_dirty(DirtyReason::Options);
        Ok(())
    }

    #[must_use]
    pub fn parameters(&self) -> &ChartParameters {
        &self.parameters
    }

    /// Registers a child series. Returns `true` when it was not yet present.
    pub fn add_series(&mut self, series: Rc<dyn ChartSeries<T>>) -> bool {
        let name = series.name().to_owned();
        let added = self.registry.add(series);
        if added {
            debug!(series = %name, count = self.registry.len(), "series added");
            self.trigger.mark_dirty(DirtyReason::SeriesAdded);
        }
        added
    }

    /// Unregisters a child series. Returns `true` when it was present.
    pub fn remove_series(&mut self, series: &Rc<dyn ChartSeries<T>>) -> bool {
        let removed = self.registry.remove(series);
        if removed {
            debug!(series = %series.name(), count = self.registry.len(), "series removed");
            self.trigger.mark_dirty(DirtyReason::SeriesRemoved);
        }
        removed
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn registry(&self) -> &SeriesRegistry<T> {
        &self.registry
    }
}

impl<T, H: HostSurface> ChartComponent<T, H> {
    #[must_use]
    pub fn trigger_state(&self) -> TriggerState {
        self.trigger.state()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.trigger.is_ready()
    }

    #[must_use]
    pub fn chart_id(&self) -> Option<&str> {
        self.options.chart_id()
    }

    #[must_use]
    pub fn callback_handle(&self) -> Option<CallbackHandle> {
        self.callback
    }

    #[must_use]
    pub fn last_render(&self) -> Option<&RenderedSnapshot<T>> {
        self.rendered.as_ref()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}
