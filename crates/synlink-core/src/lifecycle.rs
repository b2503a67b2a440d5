//! Lifecycle phase tracking for the embedded component.
//!
//! # State Machine
//!
//! ```text
//! ┌──────────┐  loaded   ┌─────────────────┐  ready   ┌──────────────┐
//! │ Unloaded │──────────>│ ComponentLoaded │─────────>│ ReadyForData │
//! └──────────┘           └─────────────────┘          └──────────────┘
//!                                 ▲                          │
//!                                 └──── new resource load ───┘
//! ```
//!
//! Progression is forward-only, with one sanctioned step back: initiating a
//! new resource load clears readiness, because the component must process
//! the new resource before accepting data again. The bootstrap flag is never
//! cleared — the remote context bootstraps exactly once per embedding, so a
//! session that saw `loaded` reverts to `ComponentLoaded`, while one that
//! never did stays `Unloaded`.

/// Externally visible lifecycle phase, derived from the two internal flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// No bootstrap notification received yet.
    Unloaded,
    /// Bootstrapped; boot-phase commands may be sent, data may not.
    ComponentLoaded,
    /// Resource processed; data and runtime commands may be sent.
    ReadyForData,
}

/// Tracks bootstrap and readiness of the remote component.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifecycle {
    component_loaded: bool,
    ready_for_data: bool,
}

impl Lifecycle {
    /// Create a lifecycle tracker in the `Unloaded` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(self) -> LifecyclePhase {
        if !self.component_loaded {
            LifecyclePhase::Unloaded
        } else if !self.ready_for_data {
            LifecyclePhase::ComponentLoaded
        } else {
            LifecyclePhase::ReadyForData
        }
    }

    /// Whether the bootstrap notification has been received.
    #[must_use]
    pub fn component_loaded(self) -> bool {
        self.component_loaded
    }

    /// Whether the component accepts data updates.
    #[must_use]
    pub fn ready_for_data(self) -> bool {
        self.ready_for_data
    }

    /// Record the bootstrap notification.
    pub fn mark_component_loaded(&mut self) {
        self.component_loaded = true;
    }

    /// Record the readiness notification.
    pub fn mark_ready(&mut self) {
        self.ready_for_data = true;
    }

    /// Clear readiness for a new resource load. Bootstrap state survives.
    pub fn reset_readiness(&mut self) {
        self.ready_for_data = false;
    }
}
