//! Deterministic test harness for the Synlink synoptic bridge.
//!
//! In-memory implementations of the host's transport and fetch seams plus a
//! scripted remote component, so lifecycle, buffering, and correlation
//! behavior can be tested without an embedding surface or a network.

pub mod fetchers;
pub mod sim_channel;
pub mod sim_remote;

pub use fetchers::{FailingFetcher, StaticFetcher};
pub use sim_channel::{Outbox, SimChannel};
pub use sim_remote::{SimRemote, tags_handle};
