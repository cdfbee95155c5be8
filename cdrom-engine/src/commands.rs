// SPDX-License-Identifier: GPL-3.0-only

//! Mount, unmount and open.
//!
//! Mount and unmount always finish with a reconciliation pass, whatever the
//! service answered, so the held state comes from a fresh query rather than
//! from the command's own report.

use std::path::Path;
use std::sync::Arc;

use cdrom_contracts::{
    CommandError, DeviceObject, DiskService, Launcher, MountError, StateListener, UnmountError,
};
use cdrom_types::{DeviceId, DriveState};
use tracing::{debug, info, warn};

use crate::reconcile::Reconciler;

pub struct CommandExecutor<O> {
    service: Arc<dyn DiskService>,
    device: DeviceId,
    launcher: O,
}

impl<O: Launcher> CommandExecutor<O> {
    pub fn new(service: Arc<dyn DiskService>, device: DeviceId, launcher: O) -> Self {
        Self {
            service,
            device,
            launcher,
        }
    }

    pub fn launcher(&self) -> &O {
        &self.launcher
    }

    pub async fn mount<L: StateListener>(
        &self,
        reconciler: &mut Reconciler<L>,
    ) -> Result<(), MountError> {
        let result = self.try_mount().await;
        match &result {
            Ok(()) => info!(device = %self.device, "Mount request completed"),
            Err(e) => warn!(device = %self.device, "Mount failed: {e}"),
        }

        reconciler.tick().await;
        result
    }

    pub async fn unmount<L: StateListener>(
        &self,
        reconciler: &mut Reconciler<L>,
    ) -> Result<(), UnmountError> {
        let result = self.try_unmount().await;
        match &result {
            Ok(()) => info!(device = %self.device, "Unmount request completed"),
            Err(e) => warn!(device = %self.device, "Unmount failed: {e}"),
        }

        reconciler.tick().await;
        result
    }

    /// Open the mount location with the default handler. Outside the
    /// `Mounted` state this does nothing.
    pub fn open<L: StateListener>(&self, reconciler: &Reconciler<L>) -> Result<(), CommandError> {
        let Some(DriveState::Mounted { path }) = reconciler.state() else {
            debug!(device = %self.device, "Open ignored: drive is not mounted");
            return Ok(());
        };

        self.launcher
            .launch(Path::new(path.as_str()))
            .map_err(|e| CommandError::Launch {
                path: path.to_string(),
                message: e.to_string(),
            })
    }

    async fn try_mount(&self) -> Result<(), CommandError> {
        self.require_filesystem().await?;
        let location = self.service.mount(&self.device).await?;
        // The next pass re-derives the location from the service.
        debug!(device = %self.device, "Service reported mount at {location}");
        Ok(())
    }

    async fn try_unmount(&self) -> Result<(), CommandError> {
        self.require_filesystem().await?;
        self.service.unmount(&self.device).await?;
        Ok(())
    }

    async fn require_filesystem(&self) -> Result<(), CommandError> {
        match self.service.resolve(&self.device).await? {
            None => Err(CommandError::DeviceNotFound {
                device: self.device.device_node(),
            }),
            Some(DeviceObject {
                filesystem: None, ..
            }) => Err(CommandError::NoFilesystemFacet {
                device: self.device.device_node(),
            }),
            Some(_) => Ok(()),
        }
    }
}
