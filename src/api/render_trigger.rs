use serde::{Deserialize, Serialize};
use tracing::trace;

/// Whether the next render opportunity must run a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TriggerState {
    Idle,
    #[default]
    Dirty,
}

/// Reason a render was requested, kept for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirtyReason {
    Parameters,
    Options,
    SeriesAdded,
    SeriesRemoved,
    SelectionCallback,
    Explicit,
}

/// Dirty-flag state machine gating render passes.
///
/// Starts `Dirty` so the first opportunity after the host is ready always
/// renders. The ready latch is one-way; before it is set nothing renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderTrigger {
    state: TriggerState,
    ready: bool,
}

impl RenderTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state == TriggerState::Dirty
    }

    pub fn mark_dirty(&mut self, reason: DirtyReason) {
        trace!(?reason, previous = ?self.state, "render trigger marked dirty");
        self.state = TriggerState::Dirty;
    }

    /// Sets the ready latch. Returns `true` only on the first call.
    pub fn mark_ready(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        true
    }

    /// Claims the pending pass, moving to `Idle`.
    ///
    /// Returns `false` when not ready or nothing is pending. The state is
    /// cleared before the pass runs, so a failing pass is only retried after
    /// the next dirty transition.
    pub fn begin_pass(&mut self) -> bool {
        if !self.ready || self.state == TriggerState::Idle {
            return false;
        }
        self.state = TriggerState::Idle;
        true
    }
}
