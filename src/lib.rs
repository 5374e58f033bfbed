//! chart-bridge: declarative chart component for a host-page charting library.
//!
//! Child series declarations and user options are reconciled into
//! ApexCharts-compatible JSON on every render pass; selection events coming
//! back from the page are mapped onto the series that were last rendered.

pub mod api;
pub mod core;
pub mod error;
pub mod options;
pub mod surface;
pub mod telemetry;

pub use api::{ChartComponent, ChartParameters, HostEvent, SelectedData, SelectionEvent};
pub use error::{ChartError, ChartResult};
pub use options::ChartOptions;
pub use surface::{HostSurface, NullSurface};
