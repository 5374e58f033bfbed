mod handles;
mod null_surface;

pub use handles::{CallbackHandle, SurfaceHandle};
pub use null_surface::NullSurface;

use crate::error::ChartResult;

/// Contract implemented by the host page bridge.
///
/// The component only sends fully serialized configuration across this
/// boundary, so implementations stay ignorant of reconciliation. Calls are
/// fire-and-forget: the component logs returned errors and carries on.
pub trait HostSurface {
    /// Creates the handle the host uses to call back into this component.
    fn create_callback_handle(&mut self) -> CallbackHandle;

    fn render_chart(
        &mut self,
        callback: CallbackHandle,
        surface: SurfaceHandle,
        config_json: &str,
    ) -> ChartResult<()>;

    fn destroy_chart(&mut self, chart_id: &str) -> ChartResult<()>;

    fn release_callback_handle(&mut self, callback: CallbackHandle);
}
