// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use cdrom_contracts::{DeviceObject, DiskService, ServiceError};
use cdrom_types::DeviceId;

use crate::drive;
use crate::manager::DiskManager;

/// [`DiskService`] backed by the UDisks2 daemon on the system bus.
#[derive(Clone)]
pub struct UdisksDiskService {
    manager: DiskManager,
}

impl UdisksDiskService {
    pub fn new(manager: DiskManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &DiskManager {
        &self.manager
    }
}

#[async_trait]
impl DiskService for UdisksDiskService {
    async fn resolve(&self, device: &DeviceId) -> Result<Option<DeviceObject>, ServiceError> {
        drive::resolve_device(self.manager.connection(), device)
            .await
            .map_err(ServiceError::from)
    }

    async fn mount(&self, device: &DeviceId) -> Result<String, ServiceError> {
        drive::mount_filesystem(self.manager.connection(), device)
            .await
            .map_err(ServiceError::from)
    }

    async fn unmount(&self, device: &DeviceId) -> Result<(), ServiceError> {
        drive::unmount_filesystem(self.manager.connection(), device)
            .await
            .map_err(ServiceError::from)
    }
}
