// SPDX-License-Identifier: GPL-3.0-only

use cdrom_types::DriveState;

use crate::{CommandError, DriveCommand};

/// Consumer of engine notifications, typically the presentation layer.
pub trait StateListener {
    /// Called at most once per reconciliation pass, only when the state changed.
    fn on_state_changed(&mut self, state: &DriveState);

    /// Called after a command and its follow-up pass have finished.
    fn on_command_finished(&mut self, command: DriveCommand, result: &Result<(), CommandError>) {
        let _ = (command, result);
    }
}
