// SPDX-License-Identifier: GPL-3.0-only

//! Resolve the fixed device object into block and filesystem facts.

use cdrom_contracts::{BlockInfo, DeviceObject, FilesystemFacet};
use cdrom_types::DeviceId;
use udisks2::{block::BlockProxy, filesystem::FilesystemProxy};
use zbus::Connection;
use zbus::proxy::CacheProperties;
use zbus::zvariant::OwnedObjectPath;

use super::media::probe_media_hint;
use crate::dbus::bytestring as bs;
use crate::error::DiskError;
use crate::manager::{BLOCK_IFACE, FILESYSTEM_IFACE, UDisks2ObjectManagerProxy};

pub fn object_path_for(device: &DeviceId) -> Result<OwnedObjectPath, DiskError> {
    OwnedObjectPath::try_from(device.object_path())
        .map_err(|e| DiskError::InvalidPath(format!("{device}: {e}")))
}

/// Which UDisks2 interfaces the device object currently carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Facets {
    pub(crate) block: bool,
    pub(crate) filesystem: bool,
}

pub(crate) async fn device_facets(
    connection: &Connection,
    path: &OwnedObjectPath,
) -> Result<Facets, DiskError> {
    let object_manager = UDisks2ObjectManagerProxy::new(connection).await?;
    let objects = object_manager.get_managed_objects().await?;

    Ok(objects
        .get(path)
        .map(|interfaces| Facets {
            block: interfaces.contains_key(BLOCK_IFACE),
            filesystem: interfaces.contains_key(FILESYSTEM_IFACE),
        })
        .unwrap_or_default())
}

/// Resolve `device`; `Ok(None)` when UDisks2 has no block object for it.
///
/// Proxies are built per call without property caching and dropped on
/// return, so nothing outlives the query.
pub async fn resolve_device(
    connection: &Connection,
    device: &DeviceId,
) -> Result<Option<DeviceObject>, DiskError> {
    let path = object_path_for(device)?;

    let facets = device_facets(connection, &path).await?;
    if !facets.block {
        return Ok(None);
    }

    let block = BlockProxy::builder(connection)
        .path(&path)?
        .cache_properties(CacheProperties::No)
        .build()
        .await?;
    let size_bytes = block.size().await?;
    let media_hint = probe_media_hint(connection, &block).await;

    let filesystem = if facets.filesystem {
        let fs = FilesystemProxy::builder(connection)
            .path(&path)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        let mount_points = bs::decode_mount_points(fs.mount_points().await?);
        Some(FilesystemFacet { mount_points })
    } else {
        None
    };

    Ok(Some(DeviceObject {
        block: BlockInfo {
            size_bytes,
            media_hint,
        },
        filesystem,
    }))
}
