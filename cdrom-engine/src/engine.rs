// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use cdrom_contracts::{CommandError, DiskService, DriveCommand, Launcher, StateListener};
use cdrom_types::DeviceId;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::adapter::DeviceQuery;
use crate::commands::CommandExecutor;
use crate::reconcile::Reconciler;
use crate::ticker::Ticker;

/// Work handed to the engine from outside the poll cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Command(DriveCommand),
    /// Run an out-of-cycle pass, e.g. after a hotplug signal.
    Refresh,
    Shutdown,
}

/// Reconciler and command executor driven from a single task.
pub struct Engine<L, O> {
    reconciler: Reconciler<L>,
    executor: CommandExecutor<O>,
}

impl<L: StateListener, O: Launcher> Engine<L, O> {
    pub fn new(service: Arc<dyn DiskService>, device: DeviceId, listener: L, launcher: O) -> Self {
        let query = DeviceQuery::new(service.clone(), device.clone());
        Self {
            reconciler: Reconciler::new(query, listener),
            executor: CommandExecutor::new(service, device, launcher),
        }
    }

    pub fn reconciler(&self) -> &Reconciler<L> {
        &self.reconciler
    }

    pub fn reconciler_mut(&mut self) -> &mut Reconciler<L> {
        &mut self.reconciler
    }

    pub fn executor(&self) -> &CommandExecutor<O> {
        &self.executor
    }

    pub async fn tick(&mut self) -> bool {
        self.reconciler.tick().await
    }

    /// Run `command` to completion, including its follow-up pass, then
    /// report the outcome to the listener.
    pub async fn execute(&mut self, command: DriveCommand) -> Result<(), CommandError> {
        let result = match command {
            DriveCommand::Mount => self.executor.mount(&mut self.reconciler).await,
            DriveCommand::Unmount => self.executor.unmount(&mut self.reconciler).await,
            DriveCommand::Open => self.executor.open(&self.reconciler),
        };
        self.reconciler
            .listener_mut()
            .on_command_finished(command, &result);
        result
    }

    /// Initial pass, then passes on every tick and requests as they arrive
    /// until `Shutdown` or all senders are gone. Everything runs on the
    /// calling task, one step at a time.
    pub async fn run<T: Ticker>(&mut self, mut ticker: T, mut requests: mpsc::Receiver<Request>) {
        self.reconciler.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.reconciler.tick().await;
                }
                request = requests.recv() => match request {
                    Some(Request::Command(command)) => {
                        debug!("Executing {command} request");
                        // Failures already reached the listener.
                        let _ = self.execute(command).await;
                    }
                    Some(Request::Refresh) => {
                        self.reconciler.tick().await;
                    }
                    Some(Request::Shutdown) | None => break,
                },
            }
        }

        info!(passes = self.reconciler.passes(), "Drive engine stopped");
    }
}
