//! Update correlation handles.

use serde::{Deserialize, Serialize};

/// Correlates an outbound tag-data envelope with its acknowledgement.
///
/// Handles are strictly increasing within a session; the counter is shared
/// by awaited refreshes and fire-and-forget pushes alike, so a handle value
/// identifies one specific `tags` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateHandle(u64);

impl UpdateHandle {
    /// Wrap a raw handle value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value as it appears on the wire.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UpdateHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
