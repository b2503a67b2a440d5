//! Session state machine for one embedded component.
//!
//! This module implements the synchronization layer: lifecycle gating,
//! command buffering, tag bookkeeping, and refresh correlation for a single
//! remote visualization component.
//!
//! # Architecture: Action-Based State Machine
//!
//! The session follows the action pattern:
//! - Methods mutate session state synchronously and return
//!   `Vec<Directive>`.
//! - Driver code executes directives (post messages, run the resource
//!   fetch, invoke caller callbacks, complete the refresh awaitable).
//!
//! This keeps the logic free of I/O and async machinery, so every gating
//! and ordering rule is testable with plain function calls.
//!
//! # Gating
//!
//! The session is the sole authority on "send now" versus "buffer": boot
//! commands send from `ComponentLoaded`, runtime commands and data from
//! `ReadyForData`, everything earlier lands in the pending buffer and is
//! flushed exactly once on the corresponding transition.

use synlink_proto::{Command, Event, OutboundMessage, QualityFlags, TagValue, UpdateHandle};
use tracing::{debug, trace};

use crate::{
    correlator::Correlator,
    error::RefreshError,
    lifecycle::{Lifecycle, LifecyclePhase},
    pending::{CommandClass, PendingCommandBuffer},
    tags::TagStore,
};

/// Effects requested by the session, executed by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Post this message to the remote context.
    Send(OutboundMessage),

    /// Retrieve the resource at `url` and feed the outcome back through
    /// [`Session::resource_loaded`] or [`Session::resource_failed`].
    Fetch {
        /// Resource URL to retrieve.
        url: String,
    },

    /// Surface an event to the caller's subscriptions.
    Notify(Notice),

    /// Resolve the outstanding refresh awaitable.
    CompleteRefresh(Result<(), String>),
}

/// Caller-facing notifications raised by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The component bootstrapped.
    Loaded,

    /// The component is ready for data.
    Ready,

    /// Resource retrieval failed; the load may be retried.
    LoadError(String),

    /// The user clicked an object in the graphic.
    Click {
        /// Opaque interaction payload from the remote.
        event: serde_json::Value,
        /// Name of the clicked tag/object.
        tag: String,
    },
}

/// Synchronization state for one embedded component.
#[derive(Debug, Clone, Default)]
pub struct Session {
    lifecycle: Lifecycle,
    tags: TagStore,
    pending: PendingCommandBuffer,
    correlator: Correlator,
    /// Resource payload fetched before the component bootstrapped.
    cached_resource: Option<String>,
    /// URL to fetch (again) once the component bootstraps.
    resource_url: Option<String>,
    /// Re-entrancy guard: a second load while fetching is a no-op.
    fetch_in_flight: bool,
    /// Tag names reported by the remote on the `ready` notification.
    tags_list: String,
}

impl Session {
    /// Create a session in the `Unloaded` phase with no tags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.lifecycle.phase()
    }

    /// Read access to the tag store.
    #[must_use]
    pub fn tags(&self) -> &TagStore {
        &self.tags
    }

    /// Tag names reported by the remote, empty before `ready`.
    #[must_use]
    pub fn tags_list(&self) -> &str {
        &self.tags_list
    }

    /// Handle of the outstanding refresh, if any.
    #[must_use]
    pub fn outstanding_refresh(&self) -> Option<UpdateHandle> {
        self.correlator.outstanding()
    }

    /// Start loading a new resource.
    ///
    /// Clears the cached payload and the readiness flag (the component must
    /// process the new resource before accepting data again); tag contents
    /// survive. A second call while a fetch is in flight is a no-op.
    pub fn begin_load(&mut self, url: &str) -> Vec<Directive> {
        self.cached_resource = None;
        self.lifecycle.reset_readiness();
        self.resource_url = if url.is_empty() { None } else { Some(url.to_owned()) };

        let Some(url) = self.resource_url.clone() else {
            return Vec::new();
        };
        if self.fetch_in_flight {
            debug!(%url, "resource fetch already in flight, load request ignored");
            return Vec::new();
        }
        self.fetch_in_flight = true;
        vec![Directive::Fetch { url }]
    }

    /// Resource retrieval completed.
    ///
    /// Forwards the payload immediately when the component has bootstrapped,
    /// otherwise caches it for the `loaded` flush.
    pub fn resource_loaded(&mut self, body: String) -> Vec<Directive> {
        self.fetch_in_flight = false;
        if self.lifecycle.component_loaded() {
            vec![Directive::Send(OutboundMessage::Resource(body))]
        } else {
            debug!("component not bootstrapped yet, resource payload cached");
            self.cached_resource = Some(body);
            Vec::new()
        }
    }

    /// Resource retrieval failed.
    ///
    /// Lifecycle state is left untouched; the caller may retry with a new
    /// load.
    pub fn resource_failed(&mut self, error: String) -> Vec<Directive> {
        self.fetch_in_flight = false;
        vec![Directive::Notify(Notice::LoadError(error))]
    }

    /// The remote component reported that it bootstrapped.
    ///
    /// Flushes the boot-phase buffer (colors table, queued per-color
    /// assignments, alarm flash, in that order), then forwards the cached
    /// resource payload — or triggers retrieval of a configured URL — and
    /// finally notifies `loaded`.
    pub fn remote_loaded(&mut self) -> Vec<Directive> {
        self.lifecycle.mark_component_loaded();
        debug!("component bootstrapped");

        let mut directives: Vec<Directive> = self
            .pending
            .drain_boot()
            .into_iter()
            .map(|command| Directive::Send(OutboundMessage::command(command)))
            .collect();

        if let Some(body) = self.cached_resource.take() {
            directives.push(Directive::Send(OutboundMessage::Resource(body)));
        } else if let Some(url) = self.resource_url.clone() {
            if !self.fetch_in_flight {
                self.fetch_in_flight = true;
                directives.push(Directive::Fetch { url });
            }
        }

        directives.push(Directive::Notify(Notice::Loaded));
        directives
    }

    /// The remote component reported that it is ready for data.
    ///
    /// Captures the remote tag list, pushes a full snapshot when at least
    /// one tag is already recorded locally, flushes the runtime buffer in
    /// its fixed order, and notifies `ready`.
    pub fn remote_ready(&mut self, tags_list: String) -> Vec<Directive> {
        self.lifecycle.mark_ready();
        self.tags_list = tags_list;
        debug!(tags = self.tags.len(), "component ready for data");

        let mut directives = Vec::new();
        if !self.tags.is_empty() {
            let handle = self.correlator.next_handle();
            directives.push(self.snapshot_directive(handle));
        }
        directives.extend(
            self.pending
                .drain_runtime()
                .into_iter()
                .map(|command| Directive::Send(OutboundMessage::command(command))),
        );
        directives.push(Directive::Notify(Notice::Ready));
        directives
    }

    /// An acknowledgement for a `tags` envelope arrived.
    ///
    /// Resolves the outstanding refresh when the handle matches; stale
    /// handles are ignored and leave the refresh pending.
    pub fn remote_updated(&mut self, handle: UpdateHandle, error: Option<String>) -> Vec<Directive> {
        match self.correlator.acknowledge(handle, error) {
            Some(outcome) => vec![Directive::CompleteRefresh(outcome)],
            None => {
                trace!(%handle, "acknowledgement does not match the outstanding refresh, ignored");
                Vec::new()
            },
        }
    }

    /// The user clicked an object in the graphic.
    pub fn remote_click(&mut self, event: serde_json::Value, tag: String) -> Vec<Directive> {
        vec![Directive::Notify(Notice::Click { event, tag })]
    }

    /// Dispatch one inbound event to its handler.
    pub fn handle_event(&mut self, event: Event) -> Vec<Directive> {
        match event {
            Event::Loaded => self.remote_loaded(),
            Event::Ready { attributes } => self.remote_ready(attributes.tags_list),
            Event::Updated { handle, error } => self.remote_updated(handle, error),
            Event::Click { attributes } => self.remote_click(attributes.event, attributes.tag),
        }
    }

    /// Submit a command: send now when the lifecycle allows it, buffer
    /// otherwise. Immediate-only kinds are dropped before readiness.
    pub fn submit(&mut self, command: Command) -> Vec<Directive> {
        let send_now = match CommandClass::of(&command) {
            CommandClass::Boot => self.lifecycle.component_loaded(),
            CommandClass::Runtime => self.lifecycle.ready_for_data(),
            CommandClass::Immediate => {
                if !self.lifecycle.ready_for_data() {
                    trace!(?command, "immediate command dropped before readiness");
                    return Vec::new();
                }
                true
            },
        };

        if send_now {
            vec![Directive::Send(OutboundMessage::command(command))]
        } else {
            debug!(?command, "command buffered until the component can accept it");
            self.pending.buffer(command);
            Vec::new()
        }
    }

    /// Set a tag value; when ready, immediately send a single-record update.
    ///
    /// The description defaults to the tag name when not given. An empty
    /// name is a no-op.
    pub fn set_value(
        &mut self,
        name: &str,
        value: TagValue,
        quality: QualityFlags,
        description: Option<&str>,
    ) -> Vec<Directive> {
        let description = description.unwrap_or(name);
        if self.tags.upsert(name, value, quality, Some(description)).is_none() {
            return Vec::new();
        }
        if !self.lifecycle.ready_for_data() {
            return Vec::new();
        }
        let handle = self.correlator.next_handle();
        match self.tags.record_for(name) {
            Some(record) => vec![Directive::Send(OutboundMessage::command(Command::Tags {
                tags: vec![record],
                handle,
            }))],
            None => Vec::new(),
        }
    }

    /// Store a tag value without sending anything.
    pub fn store_value(
        &mut self,
        name: &str,
        value: TagValue,
        quality: QualityFlags,
        description: Option<&str>,
    ) {
        let description = description.unwrap_or(name);
        self.tags.upsert(name, value, quality, Some(description));
    }

    /// Bulk-store values and push the full snapshot.
    ///
    /// Fire-and-forget: the returned handle is not registered for refresh
    /// correlation. Returns `None` and stores nothing when not ready.
    pub fn push_values<I>(&mut self, values: I) -> (Option<UpdateHandle>, Vec<Directive>)
    where
        I: IntoIterator<Item = (String, TagValue)>,
    {
        if !self.lifecycle.ready_for_data() {
            return (None, Vec::new());
        }
        self.tags.bulk_store(values);
        let handle = self.correlator.next_handle();
        (Some(handle), vec![self.snapshot_directive(handle)])
    }

    /// Begin an awaited refresh: store the given values, claim the
    /// outstanding slot, and send the full snapshot stamped with its handle.
    ///
    /// # Errors
    ///
    /// [`RefreshError::NotReady`] before `ReadyForData`;
    /// [`RefreshError::RefreshInProgress`] while a refresh is outstanding.
    /// Both reject before any state is mutated or message produced.
    pub fn begin_refresh<I>(&mut self, values: I) -> Result<Vec<Directive>, RefreshError>
    where
        I: IntoIterator<Item = (String, TagValue)>,
    {
        if !self.lifecycle.ready_for_data() {
            return Err(RefreshError::NotReady);
        }
        let handle = self.correlator.begin()?;
        self.tags.bulk_store(values);
        Ok(vec![self.snapshot_directive(handle)])
    }

    /// Release the outstanding refresh slot after a failed send.
    pub fn abort_refresh(&mut self) {
        self.correlator.abort();
    }

    /// Clear all tag data and submit a `resetData` command through the
    /// usual gating (sent immediately when ready, buffered otherwise).
    pub fn reset_data(&mut self) -> Vec<Directive> {
        self.tags.reset();
        self.submit(Command::ResetData)
    }

    fn snapshot_directive(&self, handle: UpdateHandle) -> Directive {
        Directive::Send(OutboundMessage::command(Command::Tags {
            tags: self.tags.snapshot(),
            handle,
        }))
    }
}
