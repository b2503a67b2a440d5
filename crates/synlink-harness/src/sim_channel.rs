//! In-memory ordered channel standing in for the context boundary.

use synlink_host::{ChannelError, MessageChannel};
use synlink_proto::OutboundMessage;
use tokio::sync::mpsc;

/// Sending half handed to the host.
///
/// Ordered and non-blocking, like a postMessage call. Sends fail with
/// [`ChannelError::Closed`] once the matching [`Outbox`] is dropped.
#[derive(Debug, Clone)]
pub struct SimChannel {
    tx: mpsc::UnboundedSender<OutboundMessage>,
}

/// Receiving half kept by the test to observe what the host posted.
#[derive(Debug)]
pub struct Outbox {
    rx: mpsc::UnboundedReceiver<OutboundMessage>,
}

/// Create a connected channel/outbox pair.
#[must_use]
pub fn channel() -> (SimChannel, Outbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SimChannel { tx }, Outbox { rx })
}

impl MessageChannel for SimChannel {
    fn send(&mut self, message: OutboundMessage) -> Result<(), ChannelError> {
        self.tx.send(message).map_err(|_| ChannelError::Closed)
    }
}

impl Outbox {
    /// Take every message posted so far, in send order.
    pub fn drain(&mut self) -> Vec<OutboundMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = self.rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    /// Take the next message, if one was posted.
    pub fn try_next(&mut self) -> Option<OutboundMessage> {
        self.rx.try_recv().ok()
    }
}
