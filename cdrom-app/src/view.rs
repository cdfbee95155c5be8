// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::io::Write;

use cdrom_contracts::{CommandError, DriveCommand, StateListener};
use cdrom_types::{DeviceId, DriveState};
use tokio::sync::watch;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub visible: bool,
    pub enabled: bool,
}

impl ButtonState {
    pub const HIDDEN: Self = Self {
        visible: false,
        enabled: false,
    };
    pub const DISABLED: Self = Self {
        visible: true,
        enabled: false,
    };
    pub const ENABLED: Self = Self {
        visible: true,
        enabled: true,
    };
}

/// What the controls show for a given drive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsView {
    pub status: String,
    pub mount: ButtonState,
    pub open: ButtonState,
    pub unmount: ButtonState,
}

impl ControlsView {
    /// `None` means no pass has completed yet.
    pub fn from_state(state: Option<&DriveState>, device: &DeviceId) -> Self {
        let node = device.device_node();
        match state {
            None => Self::mount_only("Detecting drive status…".to_string(), ButtonState::DISABLED),
            Some(DriveState::Absent) => Self::mount_only(
                format!("{node} not found on this system"),
                ButtonState::DISABLED,
            ),
            Some(DriveState::NoMedia) => {
                Self::mount_only(format!("Drive ({node}) has no media"), ButtonState::DISABLED)
            }
            Some(DriveState::Unmounted) => Self::mount_only(
                format!("Drive ({node}) has media, not mounted"),
                ButtonState::ENABLED,
            ),
            Some(DriveState::Mounted { path }) => Self {
                status: format!("Mounted at:\n{path}"),
                mount: ButtonState::HIDDEN,
                open: ButtonState::ENABLED,
                unmount: ButtonState::ENABLED,
            },
        }
    }

    fn mount_only(status: String, mount: ButtonState) -> Self {
        Self {
            status,
            mount,
            open: ButtonState::HIDDEN,
            unmount: ButtonState::HIDDEN,
        }
    }

    fn buttons(&self) -> [(DriveCommand, ButtonState); 3] {
        [
            (DriveCommand::Mount, self.mount),
            (DriveCommand::Open, self.open),
            (DriveCommand::Unmount, self.unmount),
        ]
    }
}

impl fmt::Display for ControlsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status)?;
        let controls: Vec<String> = self
            .buttons()
            .into_iter()
            .filter(|(_, button)| button.visible)
            .map(|(command, button)| {
                if button.enabled {
                    format!("[{command}]")
                } else {
                    format!("[{command}: unavailable]")
                }
            })
            .collect();
        write!(f, "  {}", controls.join(" "))
    }
}

/// Prints the drive view to a terminal and publishes the latest state for
/// the `status` command.
pub struct TerminalView<W> {
    device: DeviceId,
    out: W,
    latest: watch::Sender<Option<DriveState>>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(device: DeviceId, out: W, latest: watch::Sender<Option<DriveState>>) -> Self {
        Self {
            device,
            out,
            latest,
        }
    }

    pub fn print(&mut self, view: &ControlsView) {
        if let Err(e) = writeln!(self.out, "{view}").and_then(|_| self.out.flush()) {
            warn!("failed to write drive view: {e}");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StateListener for TerminalView<W> {
    fn on_state_changed(&mut self, state: &DriveState) {
        self.latest.send_replace(Some(state.clone()));
        let view = ControlsView::from_state(Some(state), &self.device);
        self.print(&view);
    }

    fn on_command_finished(&mut self, command: DriveCommand, result: &Result<(), CommandError>) {
        if let Err(e) = result {
            let written = writeln!(self.out, "Warning: {command} failed: {e}")
                .and_then(|_| self.out.flush());
            if let Err(io) = written {
                warn!("failed to write command warning: {io}");
            }
        }
    }
}
