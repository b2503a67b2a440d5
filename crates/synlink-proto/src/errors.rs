//! Wire-level error types.

use thiserror::Error;

/// Errors produced while encoding or decoding envelopes.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// An outbound envelope could not be serialized.
    #[error("failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),

    /// An inbound envelope could not be parsed, or carried an unknown
    /// `type` discriminator.
    #[error("failed to decode envelope: {0}")]
    Decode(#[source] serde_json::Error),
}
