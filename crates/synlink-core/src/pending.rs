//! Buffer for commands issued before the component can accept them.
//!
//! Single-slot commands overwrite: issuing the same kind again before the
//! flush replaces the previous payload (last writer wins). `setColor` is the
//! one multi-instance kind and queues in submission order. Flushes happen
//! only on the two forward lifecycle transitions, never on a timer, and
//! consumed slots are cleared so a later resource reload starts from an
//! empty buffer.
//!
//! Flush order is deterministic and observable:
//! - boot phase (on `loaded`): colors table, queued per-color assignments,
//!   alarm flash;
//! - runtime (on `ready`): zoom, move, tools, mouse, wheel, keyboard,
//!   watermark, reset.

use synlink_proto::Command;

/// Gating class of a command, decided by its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    /// Sendable once the component has bootstrapped; buffered before that.
    Boot,
    /// Sendable once the component is ready for data; buffered before that.
    Runtime,
    /// Sendable only when ready for data; dropped otherwise, never buffered.
    Immediate,
}

impl CommandClass {
    /// Classify a command kind.
    #[must_use]
    pub fn of(command: &Command) -> Self {
        match command {
            Command::SetColor { .. }
            | Command::SetColors { .. }
            | Command::EnableAlarmFlash { .. } => Self::Boot,
            Command::MoveBy { .. }
            | Command::ZoomTo { .. }
            | Command::EnableTools { .. }
            | Command::EnableMouse { .. }
            | Command::SetMouseWheel { .. }
            | Command::EnableKeyboard { .. }
            | Command::HideWatermark
            | Command::ResetData => Self::Runtime,
            Command::ZoomToOriginal { .. } | Command::Tags { .. } => Self::Immediate,
        }
    }
}

/// Holds pending commands until the triggering lifecycle transition.
#[derive(Debug, Clone, Default)]
pub struct PendingCommandBuffer {
    // Boot-phase slots.
    colors_table: Option<Command>,
    color_queue: Vec<Command>,
    alarm_flash: Option<Command>,

    // Runtime slots.
    zoom: Option<Command>,
    pan: Option<Command>,
    tools: Option<Command>,
    mouse: Option<Command>,
    wheel: Option<Command>,
    keyboard: Option<Command>,
    watermark: Option<Command>,
    reset: Option<Command>,
}

impl PendingCommandBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a command in its slot (or queue, for `setColor`).
    ///
    /// Returns `false` for kinds that are never buffered.
    pub fn buffer(&mut self, command: Command) -> bool {
        let slot = match &command {
            Command::SetColors { .. } => &mut self.colors_table,
            Command::SetColor { .. } => {
                self.color_queue.push(command);
                return true;
            },
            Command::EnableAlarmFlash { .. } => &mut self.alarm_flash,
            Command::ZoomTo { .. } => &mut self.zoom,
            Command::MoveBy { .. } => &mut self.pan,
            Command::EnableTools { .. } => &mut self.tools,
            Command::EnableMouse { .. } => &mut self.mouse,
            Command::SetMouseWheel { .. } => &mut self.wheel,
            Command::EnableKeyboard { .. } => &mut self.keyboard,
            Command::HideWatermark => &mut self.watermark,
            Command::ResetData => &mut self.reset,
            Command::ZoomToOriginal { .. } | Command::Tags { .. } => return false,
        };
        *slot = Some(command);
        true
    }

    /// Drain the boot-phase slots in flush order, clearing them.
    pub fn drain_boot(&mut self) -> Vec<Command> {
        let mut drained = Vec::new();
        drained.extend(self.colors_table.take());
        drained.append(&mut self.color_queue);
        drained.extend(self.alarm_flash.take());
        drained
    }

    /// Drain the runtime slots in flush order, clearing them.
    pub fn drain_runtime(&mut self) -> Vec<Command> {
        let mut drained = Vec::new();
        drained.extend(self.zoom.take());
        drained.extend(self.pan.take());
        drained.extend(self.tools.take());
        drained.extend(self.mouse.take());
        drained.extend(self.wheel.take());
        drained.extend(self.keyboard.take());
        drained.extend(self.watermark.take());
        drained.extend(self.reset.take());
        drained
    }

    /// Whether all boot-phase slots are empty.
    #[must_use]
    pub fn boot_is_empty(&self) -> bool {
        self.colors_table.is_none() && self.color_queue.is_empty() && self.alarm_flash.is_none()
    }

    /// Whether all runtime slots are empty.
    #[must_use]
    pub fn runtime_is_empty(&self) -> bool {
        self.zoom.is_none()
            && self.pan.is_none()
            && self.tools.is_none()
            && self.mouse.is_none()
            && self.wheel.is_none()
            && self.keyboard.is_none()
            && self.watermark.is_none()
            && self.reset.is_none()
    }
}
