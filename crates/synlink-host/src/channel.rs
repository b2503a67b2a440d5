//! Outbound transport seam and remote-context identity.
//!
//! The channel models the one-way post into the embedded context: ordered,
//! non-blocking, fire-and-forget. Inbound traffic does not flow through the
//! channel — the embedding runtime delivers decoded events to
//! [`crate::Synoptic::handle_inbound`] together with the sender's
//! [`RemoteId`], which the host checks against the context it owns.

use synlink_proto::OutboundMessage;
use thiserror::Error;

/// Opaque identity of one embedded remote context.
///
/// Stands in for the message-event source identity: two host instances on
/// the same page own different ids, and inbound events carrying a foreign
/// id are discarded unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoteId(u64);

impl RemoteId {
    /// Wrap a raw identity value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identity value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Errors raised by an outbound channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The remote context is gone; nothing can be delivered.
    #[error("message channel closed")]
    Closed,
}

/// Ordered, non-blocking transport into the remote context.
///
/// Implementations must deliver messages in send order and must not block:
/// a send either enqueues the message or fails with [`ChannelError::Closed`].
pub trait MessageChannel: Send {
    /// Post one message to the remote context.
    fn send(&mut self, message: OutboundMessage) -> Result<(), ChannelError>;
}
