use tracing::{debug, info, warn};

use crate::error::ChartResult;
use crate::surface::{CallbackHandle, HostSurface};

use super::ChartComponent;
use super::chart_component::RenderedSnapshot;
use super::json_contract::serialize_chart_options;
use super::reconciler::{ReconcileInput, Reconciliation, reconcile};

impl<T: Clone, H: HostSurface> ChartComponent<T, H> {
    pub(super) fn reconcile_current(&self) -> ChartResult<Reconciliation<T>> {
        reconcile(ReconcileInput {
            base: &self.options,
            declarations: self.registry.as_slice(),
            has_selection_callback: self.selection.has_callback(),
        })
    }

    /// Returns the configuration a render pass would send right now.
    ///
    /// Runs the same reconciliation as a real pass without touching the
    /// host, the trigger or the last rendered snapshot.
    pub fn preview_config(&self) -> ChartResult<String> {
        let reconciliation = self.reconcile_current()?;
        serialize_chart_options(&reconciliation.options)
    }

    /// Reconciles, serializes and hands the configuration to the host.
    ///
    /// Configuration errors abort before any host call. Host failures are
    /// logged and otherwise ignored.
    pub(super) fn run_render_pass(&mut self, callback: CallbackHandle) -> ChartResult<()> {
        let reconciliation = self.reconcile_current()?;
        let config_json = serialize_chart_options(&reconciliation.options)?;

        if reconciliation.options.debug {
            info!(
                chart_id = ?reconciliation.options.chart_id(),
                config = %config_json,
                "chart config"
            );
        }

        if let Err(err) = self.host.render_chart(callback, self.surface, &config_json) {
            warn!(error = %err, "host render call failed");
        }
        debug!(
            series_count = reconciliation.series.len(),
            bytes = config_json.len(),
            "render pass submitted"
        );

        self.rendered = Some(RenderedSnapshot {
            chart_type: reconciliation.options.chart_type(),
            series: reconciliation.series,
            config_json,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::api::ChartComponent;
    use crate::core::{ChartSeries, ChartType, SeriesDeclaration};
    use crate::error::{ChartError, ChartResult};
    use crate::surface::{CallbackHandle, HostSurface, NullSurface, SurfaceHandle};

    #[derive(Default)]
    struct FailingSurface {
        attempts: usize,
    }

    impl HostSurface for FailingSurface {
        fn create_callback_handle(&mut self) -> CallbackHandle {
            CallbackHandle::new(7)
        }

        fn render_chart(
            &mut self,
            _callback: CallbackHandle,
            _surface: SurfaceHandle,
            _config_json: &str,
        ) -> ChartResult<()> {
            self.attempts += 1;
            Err(ChartError::InvalidData("page unavailable".to_owned()))
        }

        fn destroy_chart(&mut self, _chart_id: &str) -> ChartResult<()> {
            Ok(())
        }

        fn release_callback_handle(&mut self, _callback: CallbackHandle) {}
    }

    #[test]
    fn host_failures_do_not_fail_the_pass() {
        let mut chart =
            ChartComponent::<(), _>::new(FailingSurface::default(), SurfaceHandle::new(1));
        let rendered = chart.on_after_render(true).expect("pass succeeds");
        assert!(rendered);
        assert_eq!(chart.host().attempts, 1);
        assert!(chart.last_render().is_some());
    }

    #[test]
    fn preview_leaves_trigger_and_host_alone() {
        let mut chart =
            ChartComponent::<(), _>::new(NullSurface::default(), SurfaceHandle::new(1));
        let series: Rc<dyn ChartSeries<()>> =
            Rc::new(SeriesDeclaration::<()>::new("a", ChartType::Line));
        chart.add_series(series);

        let preview = chart.preview_config().expect("preview");
        assert!(preview.contains("\"type\":\"line\""));
        assert_eq!(chart.host().render_count, 0);
        assert!(chart.last_render().is_none());
    }
}
