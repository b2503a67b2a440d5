//! Refresh error types.

use thiserror::Error;

/// Failure modes of the display-refresh operation.
///
/// The first two variants are synchronous guards: they reject the call
/// before any state is mutated or any message is sent. The last two reach
/// the caller through the refresh awaitable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    /// The component is not yet ready for data.
    #[error("component is not ready for data")]
    NotReady,

    /// A refresh is already outstanding; the new request is rejected and
    /// the outstanding one is left untouched.
    #[error("a display refresh is already in progress")]
    RefreshInProgress,

    /// The acknowledgement carried an error indicator from the remote.
    #[error("remote update failed: {0}")]
    RemoteUpdateFailed(String),

    /// The channel or host went away before an acknowledgement arrived.
    #[error("channel closed before the update was acknowledged")]
    ChannelClosed,
}
