//! Caller event subscriptions.
//!
//! Subscriptions are keyed by a closed set of event names; registering
//! replaces any previous callback for that name, and unknown names are
//! rejected at parse time rather than silently ignored.

use std::str::FromStr;

use thiserror::Error;

/// The closed set of subscribable event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The component bootstrapped.
    Loaded,
    /// The component is ready for data.
    Ready,
    /// Resource retrieval failed.
    Error,
    /// The user clicked an object in the graphic.
    Click,
}

impl EventKind {
    /// The subscription name for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Ready => "ready",
            Self::Error => "error",
            Self::Click => "click",
        }
    }
}

impl FromStr for EventKind {
    type Err = UnknownEvent;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "loaded" => Ok(Self::Loaded),
            "ready" => Ok(Self::Ready),
            "error" => Ok(Self::Error),
            "click" => Ok(Self::Click),
            other => Err(UnknownEvent { name: other.to_owned() }),
        }
    }
}

/// A subscription was requested for a name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized event name: {name}")]
pub struct UnknownEvent {
    /// The rejected name.
    pub name: String,
}

/// Payload delivered to event callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The component bootstrapped.
    Loaded,
    /// The component is ready for data.
    Ready,
    /// Resource retrieval failed, with the failure text.
    Error(String),
    /// An object was clicked.
    Click {
        /// Opaque interaction payload from the remote.
        event: serde_json::Value,
        /// Name of the clicked tag/object.
        tag: String,
    },
}

pub(crate) type EventCallback = Box<dyn FnMut(&HostEvent) + Send>;

/// One replaceable callback slot per event kind.
#[derive(Default)]
pub(crate) struct Callbacks {
    loaded: Option<EventCallback>,
    ready: Option<EventCallback>,
    error: Option<EventCallback>,
    click: Option<EventCallback>,
}

impl Callbacks {
    fn slot(&mut self, kind: EventKind) -> &mut Option<EventCallback> {
        match kind {
            EventKind::Loaded => &mut self.loaded,
            EventKind::Ready => &mut self.ready,
            EventKind::Error => &mut self.error,
            EventKind::Click => &mut self.click,
        }
    }

    /// Register a callback, replacing any previous one for the same kind.
    pub(crate) fn set(&mut self, kind: EventKind, callback: EventCallback) {
        *self.slot(kind) = Some(callback);
    }

    /// Invoke the callback for `kind`; returns whether one was registered.
    pub(crate) fn dispatch(&mut self, kind: EventKind, event: &HostEvent) -> bool {
        match self.slot(kind) {
            Some(callback) => {
                callback(event);
                true
            },
            None => false,
        }
    }
}
