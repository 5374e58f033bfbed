//! Component facade and the reconciliation pipeline behind it.

mod chart_component;
mod chart_parameters;
mod data_label_resolver;
mod event_bridge;
mod json_contract;
mod lifecycle_controller;
mod non_axis_resolver;
mod reconciler;
mod render_coordinator;
mod render_trigger;
mod selection_fixup_resolver;
mod series_registry;
mod series_resolver;
mod stroke_resolver;
mod validation;

pub use chart_component::{ChartComponent, RenderedSnapshot};
pub use chart_parameters::ChartParameters;
pub use event_bridge::{SelectedData, SelectionCallback, SelectionEvent};
pub use json_contract::serialize_chart_options;
pub use lifecycle_controller::HostEvent;
pub use reconciler::{ReconcileInput, Reconciliation, reconcile};
pub use render_trigger::{DirtyReason, RenderTrigger, TriggerState};
pub use selection_fixup_resolver::MIN_SELECTABLE_MARKER_SIZE;
pub use series_registry::SeriesRegistry;
