// SPDX-License-Identifier: GPL-3.0-only

//! Filesystem mount/unmount operations

use std::collections::HashMap;

use cdrom_types::DeviceId;
use udisks2::filesystem::FilesystemProxy;
use zbus::proxy::CacheProperties;
use zbus::{Connection, zvariant::Value};

use super::resolve::{device_facets, object_path_for};
use crate::error::DiskError;

async fn filesystem_proxy<'a>(
    connection: &'a Connection,
    device: &DeviceId,
) -> Result<FilesystemProxy<'a>, DiskError> {
    let path = object_path_for(device)?;

    let facets = device_facets(connection, &path).await?;
    if !facets.block {
        return Err(DiskError::DeviceNotFound(device.device_node()));
    }
    if !facets.filesystem {
        return Err(DiskError::NoFilesystem(device.device_node()));
    }

    Ok(FilesystemProxy::builder(connection)
        .path(path)?
        .cache_properties(CacheProperties::No)
        .build()
        .await?)
}

/// Option dict for mount and unmount: empty, so UDisks2 applies its defaults.
fn default_options<'a>() -> HashMap<&'a str, Value<'a>> {
    HashMap::new()
}

/// Mount the filesystem on `device`, returning the mount point UDisks2 chose.
pub async fn mount_filesystem(
    connection: &Connection,
    device: &DeviceId,
) -> Result<String, DiskError> {
    let fs_proxy = filesystem_proxy(connection, device).await?;
    Ok(fs_proxy.mount(default_options()).await?)
}

/// Unmount the filesystem on `device`.
pub async fn unmount_filesystem(
    connection: &Connection,
    device: &DeviceId,
) -> Result<(), DiskError> {
    let fs_proxy = filesystem_proxy(connection, device).await?;
    fs_proxy.unmount(default_options()).await?;
    Ok(())
}
