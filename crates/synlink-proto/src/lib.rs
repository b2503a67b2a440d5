//! Wire format for the Synlink synoptic bridge.
//!
//! Messages crossing the boundary to the embedded visualization component are
//! JSON-structured envelopes of the shape `{"data": {"type": <kind>, ...}}`.
//! Outbound envelopes carry commands and tag-data updates; inbound envelopes
//! carry lifecycle notifications, update acknowledgements, and interaction
//! events. A raw text message (the visualization resource itself, unwrapped)
//! is also a valid outbound message, distinct from the structured kinds.
//!
//! Field names and casing in this crate are the compatibility contract with
//! the remote component: tag records in particular must serialize with the
//! exact `path`/`value`/`quality`/`type`/`parameters.Value.{TagClientItem,
//! Alarmed, Desc}` layout, in first-reference order, with the quality flag
//! transmitted as the negation of the internal failed bit.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod envelope;
pub mod errors;
pub mod event;
pub mod handle;
pub mod quality;
pub mod tags;

pub use command::{Command, ZoomTarget};
pub use envelope::{CommandEnvelope, EventEnvelope, OutboundMessage};
pub use errors::ProtoError;
pub use event::{ClickAttributes, Event, ReadyAttributes};
pub use handle::UpdateHandle;
pub use quality::QualityFlags;
pub use tags::{TagItem, TagParameters, TagRecord, TagValue, ValueKind};
