//! Synlink synoptic bridge core logic
//!
//! Pure state machine logic for driving an embedded synoptic visualization
//! component, completely decoupled from I/O. This enables deterministic
//! testing of every lifecycle, buffering, and correlation rule.
//!
//! # Architecture
//!
//! The bridge logic in this crate is implemented as deterministic state
//! machines isolated from transports, timers, and the embedding surface.
//! State transitions produce declarative [`session::Directive`] values that
//! describe intended effects (post a message, fetch a resource, notify the
//! caller) rather than executing them directly. A driver — the host crate in
//! production, a plain test function otherwise — interprets the directives.
//!
//! # Components
//!
//! - [`lifecycle`]: bootstrap/readiness phase tracking
//! - [`tags`]: the tag store (values, quality, client identifiers)
//! - [`pending`]: the pre-readiness command buffer
//! - [`correlator`]: update-handle allocation and refresh correlation
//! - [`session`]: the orchestrating state machine tying the above together
//! - [`error`]: refresh error types

pub mod correlator;
pub mod error;
pub mod lifecycle;
pub mod pending;
pub mod session;
pub mod tags;

pub use correlator::Correlator;
pub use error::RefreshError;
pub use lifecycle::{Lifecycle, LifecyclePhase};
pub use pending::{CommandClass, PendingCommandBuffer};
pub use session::{Directive, Notice, Session};
pub use tags::TagStore;
