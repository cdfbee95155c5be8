// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use cdrom_types::DeviceId;

use crate::ServiceError;

/// Block-level facts about a resolved device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockInfo {
    pub size_bytes: u64,
    /// Explicit media indicator; `None` when the service does not expose one.
    pub media_hint: Option<bool>,
}

/// Mount-related view of a device carrying a recognized filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilesystemFacet {
    pub mount_points: Vec<String>,
}

/// A device object as resolved by the disk service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceObject {
    pub block: BlockInfo,
    pub filesystem: Option<FilesystemFacet>,
}

/// The external disk-management service.
#[async_trait]
pub trait DiskService: Send + Sync {
    /// Resolve `device`; `Ok(None)` when no such object exists.
    async fn resolve(&self, device: &DeviceId) -> Result<Option<DeviceObject>, ServiceError>;

    /// Mount the filesystem of `device` with the service's default options,
    /// returning the mount location.
    async fn mount(&self, device: &DeviceId) -> Result<String, ServiceError>;

    async fn unmount(&self, device: &DeviceId) -> Result<(), ServiceError>;
}
