// SPDX-License-Identifier: GPL-3.0-only

//! Device query adapter: one read-only look at the drive per call.

use std::sync::Arc;

use cdrom_contracts::{DeviceObject, DiskService, QueryError};
use cdrom_types::{DeviceId, DriveSnapshot};

#[derive(Clone)]
pub struct DeviceQuery {
    service: Arc<dyn DiskService>,
    device: DeviceId,
}

impl DeviceQuery {
    pub fn new(service: Arc<dyn DiskService>, device: DeviceId) -> Self {
        Self { service, device }
    }

    pub fn device(&self) -> &DeviceId {
        &self.device
    }

    /// Snapshot the drive, or report why there is nothing to snapshot.
    pub async fn query(&self) -> Result<DriveSnapshot, QueryError> {
        match self.service.resolve(&self.device).await? {
            Some(object) => Ok(snapshot_from(object)),
            None => Err(QueryError::Unavailable),
        }
    }
}

fn snapshot_from(object: DeviceObject) -> DriveSnapshot {
    DriveSnapshot {
        exists: true,
        capacity_bytes: Some(object.block.size_bytes),
        media_hint: object.block.media_hint,
        mount_paths: object
            .filesystem
            .map(|facet| facet.mount_points)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use cdrom_contracts::{BlockInfo, FilesystemFacet};

    use super::*;

    #[test]
    fn object_without_filesystem_has_no_mount_paths() {
        let snapshot = snapshot_from(DeviceObject {
            block: BlockInfo {
                size_bytes: 700_000_000,
                media_hint: None,
            },
            filesystem: None,
        });

        assert!(snapshot.exists);
        assert_eq!(snapshot.capacity_bytes, Some(700_000_000));
        assert!(snapshot.mount_paths.is_empty());
        assert!(snapshot.has_media());
    }

    #[test]
    fn mount_points_and_hint_are_carried_over() {
        let snapshot = snapshot_from(DeviceObject {
            block: BlockInfo {
                size_bytes: 0,
                media_hint: Some(true),
            },
            filesystem: Some(FilesystemFacet {
                mount_points: vec!["/media/cdrom".to_string()],
            }),
        });

        assert_eq!(snapshot.media_hint, Some(true));
        assert_eq!(snapshot.mount_paths, vec!["/media/cdrom".to_string()]);
        assert!(snapshot.has_media());
    }
}
