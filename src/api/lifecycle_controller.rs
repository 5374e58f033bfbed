use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::surface::HostSurface;

use super::render_trigger::DirtyReason;
use super::{ChartComponent, ChartParameters};

/// Lifecycle notifications forwarded by the host UI framework.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    AfterRender { first_render: bool },
    ParametersChanged(ChartParameters),
    RerenderRequested,
    Dispose,
}

impl<T: Clone, H: HostSurface> ChartComponent<T, H> {
    /// Routes one host notification. Returns `true` when a render pass ran.
    pub fn handle_event(&mut self, event: HostEvent) -> ChartResult<bool> {
        match event {
            HostEvent::AfterRender { first_render } => self.on_after_render(first_render),
            HostEvent::ParametersChanged(parameters) => {
                self.set_parameters(parameters)?;
                Ok(false)
            }
            HostEvent::RerenderRequested => {
                self.request_rerender();
                Ok(false)
            }
            HostEvent::Dispose => {
                self.dispose();
                Ok(false)
            }
        }
    }

    /// Host finished displaying the component.
    ///
    /// The first display sets the ready latch and obtains the callback
    /// handle; any display then runs a pass if one is pending.
    pub fn on_after_render(&mut self, first_render: bool) -> ChartResult<bool> {
        if self.disposed {
            return Ok(false);
        }
        if first_render && self.trigger.mark_ready() {
            let callback = self.host.create_callback_handle();
            debug!(callback = callback.raw(), "chart surface ready");
            self.callback = Some(callback);
        }
        self.render_if_dirty()
    }

    /// Runs a pass when ready and dirty. Returns `true` when a pass ran.
    pub fn render_if_dirty(&mut self) -> ChartResult<bool> {
        let Some(callback) = self.callback else {
            return Ok(false);
        };
        if !self.trigger.begin_pass() {
            return Ok(false);
        }
        self.run_render_pass(callback)?;
        Ok(true)
    }

    /// Applies new component parameters to the base options.
    pub fn set_parameters(&mut self, parameters: ChartParameters) -> ChartResult<()> {
        parameters.apply_to(&mut self.options)?;
        self.parameters = parameters;
        self.trigger.mark_dirty(DirtyReason::Parameters);
        Ok(())
    }

    pub fn request_rerender(&mut self) {
        self.trigger.mark_dirty(DirtyReason::Explicit);
    }
}

impl<T, H: HostSurface> ChartComponent<T, H> {
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tears the chart down on the host.
    ///
    /// Destroys the chart only when it has an id and the surface became
    /// ready, then releases the callback handle. Later calls do nothing. An
    /// in-flight render is not awaited.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if self.trigger.is_ready() {
            if let Some(chart_id) = self.options.chart.id.as_deref() {
                if let Err(err) = self.host.destroy_chart(chart_id) {
                    warn!(chart_id, error = %err, "host destroy call failed");
                }
            }
        }
        if let Some(callback) = self.callback.take() {
            self.host.release_callback_handle(callback);
        }
        debug!("chart disposed");
    }
}

impl<T, H: HostSurface> Drop for ChartComponent<T, H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
