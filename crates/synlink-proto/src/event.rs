//! Inbound event bodies.
//!
//! The remote component reports its lifecycle and interactions through these
//! envelopes. An unknown `type` discriminator is a decode error, never a
//! silent skip: the dispatcher classifies every accepted envelope into
//! exactly one of these kinds.

use serde::{Deserialize, Serialize};

use crate::handle::UpdateHandle;

/// An event body, as carried inside an [`crate::EventEnvelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// The component finished bootstrapping and accepts boot-phase commands.
    Loaded,

    /// The component processed the visualization resource and accepts data.
    Ready {
        /// Event attributes.
        attributes: ReadyAttributes,
    },

    /// Acknowledgement of a `tags` envelope.
    Updated {
        /// Handle of the acknowledged envelope.
        handle: UpdateHandle,
        /// Error text when the update failed remotely.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },

    /// The user clicked an object in the graphic.
    Click {
        /// Event attributes.
        attributes: ClickAttributes,
    },
}

/// Attributes of a [`Event::Ready`] notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyAttributes {
    /// Tag names found in the processed resource, as reported by the remote.
    #[serde(rename = "tagsList")]
    pub tags_list: String,
}

/// Attributes of a [`Event::Click`] notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickAttributes {
    /// Opaque interaction payload, forwarded to the click callback verbatim.
    pub event: serde_json::Value,
    /// Name of the clicked tag/object.
    pub tag: String,
}
