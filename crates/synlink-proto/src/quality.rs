//! Packed tag quality flags.

use bitflags::bitflags;

bitflags! {
    /// Quality bits attached to every tag value.
    ///
    /// The bit positions match the remote component's packed encoding:
    /// bit 7 marks a failed (bad or stale) value, bit 8 marks an alarmed
    /// value. An empty set means a good, non-alarmed value.
    ///
    /// On the wire the failed bit is transmitted inverted, as a boolean
    /// `quality` field (`true` = good); the alarmed bit travels separately
    /// inside the record parameters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct QualityFlags: u16 {
        /// Value is bad or stale.
        const FAILED = 0x80;
        /// Value is in alarm state.
        const ALARMED = 0x100;
    }
}

impl QualityFlags {
    /// Build a flag set from the two caller-facing booleans.
    #[must_use]
    pub fn from_parts(failed: bool, alarmed: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::FAILED, failed);
        flags.set(Self::ALARMED, alarmed);
        flags
    }

    /// Whether the failed/stale bit is set.
    #[must_use]
    pub fn is_failed(self) -> bool {
        self.contains(Self::FAILED)
    }

    /// Whether the alarm bit is set.
    #[must_use]
    pub fn is_alarmed(self) -> bool {
        self.contains(Self::ALARMED)
    }
}
