//! Envelope wrappers and the outbound message union.
//!
//! Structured messages cross the context boundary wrapped one level deep:
//! `{"data": <body>}`. The visualization resource itself travels unwrapped
//! as plain text, so the outbound side is a two-armed union rather than a
//! single envelope type.

use serde::{Deserialize, Serialize};

use crate::{command::Command, errors::ProtoError, event::Event};

/// Outbound wrapper around a [`Command`] body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    /// The wrapped command body.
    pub data: Command,
}

impl CommandEnvelope {
    /// Serialize to the JSON text form sent over the channel.
    pub fn encode(&self) -> Result<String, ProtoError> {
        serde_json::to_string(self).map_err(ProtoError::Encode)
    }
}

impl From<Command> for CommandEnvelope {
    fn from(data: Command) -> Self {
        Self { data }
    }
}

/// Inbound wrapper around an [`Event`] body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// The wrapped event body.
    pub data: Event,
}

impl EventEnvelope {
    /// Parse an inbound envelope from its JSON text form.
    pub fn decode(text: &str) -> Result<Self, ProtoError> {
        serde_json::from_str(text).map_err(ProtoError::Decode)
    }
}

impl From<Event> for EventEnvelope {
    fn from(data: Event) -> Self {
        Self { data }
    }
}

/// Anything the host may post to the remote context.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundMessage {
    /// A structured command or data-update envelope.
    Envelope(CommandEnvelope),
    /// The raw visualization resource payload, unwrapped.
    Resource(String),
}

impl OutboundMessage {
    /// Wrap a command body into an envelope message.
    #[must_use]
    pub fn command(command: Command) -> Self {
        Self::Envelope(CommandEnvelope::from(command))
    }

    /// Serialize to the text form a transport would post: JSON for
    /// envelopes, the payload verbatim for resources.
    pub fn encode(&self) -> Result<String, ProtoError> {
        match self {
            Self::Envelope(envelope) => envelope.encode(),
            Self::Resource(text) => Ok(text.clone()),
        }
    }

    /// The wrapped command body, when this is an envelope message.
    #[must_use]
    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Self::Envelope(envelope) => Some(&envelope.data),
            Self::Resource(_) => None,
        }
    }
}
