use crate::error::{ChartError, ChartResult};
use crate::surface::{CallbackHandle, HostSurface, SurfaceHandle};

/// Headless host surface used by tests and server-side config generation.
///
/// It checks that every payload is valid JSON and keeps the last one so
/// callers can inspect what would have been sent to the page.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub next_callback: u64,
    pub render_count: usize,
    pub last_config: Option<String>,
    pub destroyed: Vec<String>,
    pub released: Vec<CallbackHandle>,
}

impl HostSurface for NullSurface {
    fn create_callback_handle(&mut self) -> CallbackHandle {
        self.next_callback += 1;
        CallbackHandle::new(self.next_callback)
    }

    fn render_chart(
        &mut self,
        _callback: CallbackHandle,
        _surface: SurfaceHandle,
        config_json: &str,
    ) -> ChartResult<()> {
        serde_json::from_str::<serde_json::Value>(config_json)
            .map_err(|e| ChartError::Serialization(format!("host rejected config: {e}")))?;
        self.render_count += 1;
        self.last_config = Some(config_json.to_owned());
        Ok(())
    }

    fn destroy_chart(&mut self, chart_id: &str) -> ChartResult<()> {
        self.destroyed.push(chart_id.to_owned());
        Ok(())
    }

    fn release_callback_handle(&mut self, callback: CallbackHandle) {
        self.released.push(callback);
    }
}
