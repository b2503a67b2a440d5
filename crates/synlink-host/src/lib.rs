//! Host API for driving an embedded synoptic visualization component.
//!
//! A thin execution shell over [`synlink_core::Session`]: every operation
//! runs the pure state machine first, then executes the directives it
//! produced against the outbound [`MessageChannel`] and the
//! [`ResourceFetcher`]. The embedding runtime delivers inbound events to
//! [`Synoptic::handle_inbound`]; events from any source other than the
//! owned remote context are discarded unconditionally.
//!
//! # Components
//!
//! - [`Synoptic`]: the per-component host instance
//! - [`MessageChannel`] / [`RemoteId`]: outbound transport seam and
//!   source-identity token
//! - [`ResourceFetcher`]: resource retrieval seam (`http` feature ships a
//!   `reqwest` implementation)
//! - [`EventKind`] / [`HostEvent`]: caller event subscriptions

pub mod channel;
pub mod events;
pub mod fetch;
pub mod host;

#[cfg(feature = "http")]
pub mod http;

pub use channel::{ChannelError, MessageChannel, RemoteId};
pub use events::{EventKind, HostEvent, UnknownEvent};
pub use fetch::{FetchError, ResourceFetcher};
pub use host::{RefreshTicket, Synoptic};
#[cfg(feature = "http")]
pub use http::HttpFetcher;
pub use synlink_core::{LifecyclePhase, RefreshError};
pub use synlink_proto::{Event, TagValue, UpdateHandle, ZoomTarget};
