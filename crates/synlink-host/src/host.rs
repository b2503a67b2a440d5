//! The caller-facing host instance.
//!
//! [`Synoptic`] wires the core session state machine to a concrete outbound
//! channel and resource fetcher: every operation runs the session first,
//! then executes the directives it produced. All mutation happens
//! synchronously inside these calls; the only suspension points are the
//! resource fetch inside [`Synoptic::load_url`] / [`Synoptic::handle_inbound`]
//! and the acknowledgement wait on a [`RefreshTicket`].

use std::collections::VecDeque;

use synlink_core::{Directive, LifecyclePhase, Notice, RefreshError, Session};
use synlink_proto::{Command, Event, QualityFlags, TagValue, UpdateHandle, ZoomTarget};
use tokio::sync::oneshot;
use tracing::{error, trace};

use crate::{
    channel::{ChannelError, MessageChannel, RemoteId},
    events::{Callbacks, EventKind, HostEvent},
    fetch::ResourceFetcher,
};

/// Completion side of an issued refresh.
///
/// Resolves when the matching acknowledgement arrives, with the remote
/// error text when the update failed, or with
/// [`RefreshError::ChannelClosed`] when the host goes away first.
#[derive(Debug)]
pub struct RefreshTicket {
    rx: oneshot::Receiver<Result<(), RefreshError>>,
}

impl RefreshTicket {
    /// Wait for the refresh to complete.
    pub async fn wait(self) -> Result<(), RefreshError> {
        self.rx.await.unwrap_or(Err(RefreshError::ChannelClosed))
    }
}

/// Host-side handle for one embedded synoptic visualization component.
///
/// Generic over the outbound [`MessageChannel`] and the [`ResourceFetcher`];
/// production embeds supply real transports, tests supply the harness
/// simulations. Each instance owns exactly one remote context, identified
/// by its [`RemoteId`].
pub struct Synoptic<C, F> {
    session: Session,
    channel: C,
    fetcher: F,
    remote: RemoteId,
    callbacks: Callbacks,
    pending_ack: Option<oneshot::Sender<Result<(), RefreshError>>>,
}

impl<C: MessageChannel, F: ResourceFetcher> Synoptic<C, F> {
    /// Create a host bound to one remote context.
    pub fn new(channel: C, fetcher: F, remote: RemoteId) -> Self {
        Self {
            session: Session::new(),
            channel,
            fetcher,
            remote,
            callbacks: Callbacks::default(),
            pending_ack: None,
        }
    }

    /// Register a callback for `kind`, replacing any previous one.
    pub fn on(&mut self, kind: EventKind, callback: impl FnMut(&HostEvent) + Send + 'static) {
        self.callbacks.set(kind, Box::new(callback));
    }

    /// Current lifecycle phase of the remote component.
    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.session.phase()
    }

    /// Tag names reported by the remote, empty before `ready`.
    #[must_use]
    pub fn tags_list(&self) -> &str {
        self.session.tags_list()
    }

    /// Current value of a tag, if known.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&TagValue> {
        self.session.tags().get(name)
    }

    /// Start loading a visualization resource from `url`.
    ///
    /// Drives the fetch to completion: on success the payload is forwarded
    /// (or cached until bootstrap), on failure the `error` subscription
    /// fires — or the failure is logged — and the load may be retried. A
    /// second call while a fetch is in flight is a no-op.
    pub async fn load_url(&mut self, url: &str) -> Result<(), ChannelError> {
        let directives = self.session.begin_load(url);
        self.run(directives).await
    }

    /// Deliver one inbound event from the embedding runtime.
    ///
    /// Events whose source does not match the owned remote context are
    /// discarded unconditionally, independent of payload shape.
    pub async fn handle_inbound(&mut self, from: RemoteId, event: Event) -> Result<(), ChannelError> {
        if from != self.remote {
            trace!(from = from.raw(), owned = self.remote.raw(), "foreign-source envelope ignored");
            return Ok(());
        }
        let directives = self.session.handle_event(event);
        self.run(directives).await
    }

    /// Set a tag value; sends a single-record update when the component is
    /// ready. Returns whether the component was updated (`true`) or the
    /// value was only stored (`false`).
    pub async fn set_value(
        &mut self,
        name: &str,
        value: impl Into<TagValue>,
        failed: bool,
        alarmed: bool,
        description: Option<&str>,
    ) -> Result<bool, ChannelError> {
        let directives = self.session.set_value(
            name,
            value.into(),
            QualityFlags::from_parts(failed, alarmed),
            description,
        );
        self.run(directives).await?;
        Ok(self.session.phase() == LifecyclePhase::ReadyForData)
    }

    /// Store a tag value without updating the component. Returns whether
    /// the component is currently ready for data.
    pub fn store_value(
        &mut self,
        name: &str,
        value: impl Into<TagValue>,
        failed: bool,
        alarmed: bool,
        description: Option<&str>,
    ) -> bool {
        self.session.store_value(
            name,
            value.into(),
            QualityFlags::from_parts(failed, alarmed),
            description,
        );
        self.session.phase() == LifecyclePhase::ReadyForData
    }

    /// Bulk-store values and push the full snapshot, fire-and-forget.
    ///
    /// Returns the handle stamped on the envelope, or `None` when the
    /// component is not ready (nothing is stored or sent in that case).
    pub async fn push_values<I>(&mut self, values: I) -> Result<Option<UpdateHandle>, ChannelError>
    where
        I: IntoIterator<Item = (String, TagValue)>,
    {
        let (handle, directives) = self.session.push_values(values);
        self.run(directives).await?;
        Ok(handle)
    }

    /// Push the full snapshot and await the acknowledgement.
    ///
    /// Rejects immediately — before anything is mutated or sent — with
    /// [`RefreshError::NotReady`] or [`RefreshError::RefreshInProgress`].
    /// Await the returned ticket for the completion outcome.
    pub async fn refresh_display(&mut self) -> Result<RefreshTicket, RefreshError> {
        self.refresh_display_with(Vec::new()).await
    }

    /// Like [`Synoptic::refresh_display`], storing the given values first.
    pub async fn refresh_display_with<I>(&mut self, values: I) -> Result<RefreshTicket, RefreshError>
    where
        I: IntoIterator<Item = (String, TagValue)>,
    {
        let directives = self.session.begin_refresh(values)?;
        if self.run(directives).await.is_err() {
            self.session.abort_refresh();
            return Err(RefreshError::ChannelClosed);
        }
        let (tx, rx) = oneshot::channel();
        self.pending_ack = Some(tx);
        Ok(RefreshTicket { rx })
    }

    /// Clear all tag data, remotely and locally.
    pub async fn reset_data(&mut self) -> Result<(), ChannelError> {
        let directives = self.session.reset_data();
        self.run(directives).await
    }

    /// Pan the graphic by a relative distance. Cumulative.
    pub async fn move_by(&mut self, dx: f64, dy: f64, animate: bool) -> Result<(), ChannelError> {
        self.submit(Command::MoveBy { dx, dy, animate }).await
    }

    /// Apply a zoom step towards an optional target. Cumulative.
    pub async fn zoom_to(
        &mut self,
        zoom_level: f64,
        target: Option<ZoomTarget>,
        animate: bool,
    ) -> Result<(), ChannelError> {
        self.submit(Command::ZoomTo { zoom_level, target, animate }).await
    }

    /// Restore the default zoom level and position.
    ///
    /// Immediate-only: silently dropped while the component is not ready.
    pub async fn zoom_to_original(&mut self, animate: bool) -> Result<(), ChannelError> {
        self.submit(Command::ZoomToOriginal { animate }).await
    }

    /// Enable or disable the pan/zoom toolbar.
    pub async fn enable_tools(
        &mut self,
        pan_enabled: bool,
        zoom_enabled: bool,
    ) -> Result<(), ChannelError> {
        self.submit(Command::EnableTools { pan_enabled, zoom_enabled }).await
    }

    /// Enable or disable pan/zoom via mouse.
    pub async fn enable_mouse(
        &mut self,
        pan_enabled: bool,
        zoom_enabled: bool,
    ) -> Result<(), ChannelError> {
        self.submit(Command::EnableMouse { pan_enabled, zoom_enabled }).await
    }

    /// Configure mouse-wheel zoom direction and event propagation.
    pub async fn set_mouse_wheel(
        &mut self,
        direction_back_out: bool,
        block_event_propagation: bool,
    ) -> Result<(), ChannelError> {
        self.submit(Command::SetMouseWheel { direction_back_out, block_event_propagation }).await
    }

    /// Enable or disable keyboard pan/zoom.
    pub async fn enable_keyboard(&mut self, key_enabled: bool) -> Result<(), ChannelError> {
        self.submit(Command::EnableKeyboard { key_enabled }).await
    }

    /// Enable or disable blinking of alarmed objects.
    pub async fn enable_alarm_flash(&mut self, alarm_flash_enabled: bool) -> Result<(), ChannelError> {
        self.submit(Command::EnableAlarmFlash { alarm_flash_enabled }).await
    }

    /// Hide the component watermark.
    pub async fn hide_watermark(&mut self) -> Result<(), ChannelError> {
        self.submit(Command::HideWatermark).await
    }

    /// Assign one color shortcut.
    pub async fn set_color(&mut self, color_number: u32, color_code: &str) -> Result<(), ChannelError> {
        self.submit(Command::SetColor { color_number, color_code: color_code.to_owned() }).await
    }

    /// Replace the whole color shortcut table.
    pub async fn set_colors(&mut self, colors_table: serde_json::Value) -> Result<(), ChannelError> {
        self.submit(Command::SetColors { colors_table }).await
    }

    async fn submit(&mut self, command: Command) -> Result<(), ChannelError> {
        let directives = self.session.submit(command);
        self.run(directives).await
    }

    /// Execute session directives until the queue is drained.
    ///
    /// The fetch continuation feeds back into the session, so its directives
    /// are appended behind whatever the triggering batch still holds.
    async fn run(&mut self, directives: Vec<Directive>) -> Result<(), ChannelError> {
        let mut queue: VecDeque<Directive> = directives.into();
        while let Some(directive) = queue.pop_front() {
            match directive {
                Directive::Send(message) => self.channel.send(message)?,
                Directive::Fetch { url } => {
                    let continuation = match self.fetcher.fetch(&url).await {
                        Ok(body) => self.session.resource_loaded(body),
                        Err(err) => self.session.resource_failed(err.to_string()),
                    };
                    queue.extend(continuation);
                },
                Directive::Notify(notice) => self.notify(notice),
                Directive::CompleteRefresh(outcome) => self.complete_refresh(outcome),
            }
        }
        Ok(())
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Loaded => {
                self.callbacks.dispatch(EventKind::Loaded, &HostEvent::Loaded);
            },
            Notice::Ready => {
                self.callbacks.dispatch(EventKind::Ready, &HostEvent::Ready);
            },
            Notice::LoadError(message) => {
                let handled =
                    self.callbacks.dispatch(EventKind::Error, &HostEvent::Error(message.clone()));
                if !handled {
                    error!(error = %message, "resource load failed with no error subscriber");
                }
            },
            Notice::Click { event, tag } => {
                self.callbacks.dispatch(EventKind::Click, &HostEvent::Click { event, tag });
            },
        }
    }

    fn complete_refresh(&mut self, outcome: Result<(), String>) {
        if let Some(tx) = self.pending_ack.take() {
            let result = outcome.map_err(RefreshError::RemoteUpdateFailed);
            // The caller may have dropped the ticket; that is not an error.
            let _ = tx.send(result);
        }
    }
}
