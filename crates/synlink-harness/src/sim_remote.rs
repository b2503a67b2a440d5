//! Scripted remote component.
//!
//! A [`SimRemote`] plays the embedded visualization component: it owns the
//! outbox side of the channel and fabricates the inbound events a real
//! component would emit. Tests drive the host, drain what it posted, and
//! feed back `loaded`/`ready`/`updated`/`click` events as the script
//! requires.

use synlink_host::RemoteId;
use synlink_proto::{
    ClickAttributes, Command, Event, OutboundMessage, ReadyAttributes, UpdateHandle,
};

use crate::sim_channel::{self, Outbox, SimChannel};

/// The handle stamped on a `tags` envelope, if the message is one.
#[must_use]
pub fn tags_handle(message: &OutboundMessage) -> Option<UpdateHandle> {
    match message.as_command() {
        Some(Command::Tags { handle, .. }) => Some(*handle),
        _ => None,
    }
}

/// Simulated remote component with a scripted event vocabulary.
#[derive(Debug)]
pub struct SimRemote {
    id: RemoteId,
    outbox: Outbox,
}

impl SimRemote {
    /// Create a remote with the given identity and the channel to hand to
    /// the host.
    #[must_use]
    pub fn new(raw_id: u64) -> (Self, SimChannel) {
        let (channel, outbox) = sim_channel::channel();
        (Self { id: RemoteId::new(raw_id), outbox }, channel)
    }

    /// This remote's source identity.
    #[must_use]
    pub fn id(&self) -> RemoteId {
        self.id
    }

    /// Every message the host posted since the last call, in send order.
    pub fn sent(&mut self) -> Vec<OutboundMessage> {
        self.outbox.drain()
    }

    /// The handle of the most recently posted `tags` envelope, draining the
    /// outbox.
    pub fn last_tags_handle(&mut self) -> Option<UpdateHandle> {
        self.sent().iter().rev().find_map(tags_handle)
    }

    /// The bootstrap notification.
    #[must_use]
    pub fn loaded(&self) -> Event {
        Event::Loaded
    }

    /// The readiness notification carrying the remote-reported tag list.
    #[must_use]
    pub fn ready(&self, tags_list: &str) -> Event {
        Event::Ready { attributes: ReadyAttributes { tags_list: tags_list.to_owned() } }
    }

    /// A successful acknowledgement for `handle`.
    #[must_use]
    pub fn ack(&self, handle: UpdateHandle) -> Event {
        Event::Updated { handle, error: None }
    }

    /// A failed acknowledgement for `handle`.
    #[must_use]
    pub fn ack_error(&self, handle: UpdateHandle, error: &str) -> Event {
        Event::Updated { handle, error: Some(error.to_owned()) }
    }

    /// A click on `tag` with an opaque interaction payload.
    #[must_use]
    pub fn click(&self, tag: &str) -> Event {
        Event::Click {
            attributes: ClickAttributes {
                event: serde_json::json!({ "button": 0 }),
                tag: tag.to_owned(),
            },
        }
    }
}
