// SPDX-License-Identifier: GPL-3.0-only

//! Probe for the explicit media indicator.
//!
//! `MediaAvailable` lives on the drive object, which only exists when the
//! block device is backed by a drive UDisks2 knows about. Loop devices and
//! some older daemons do not provide it; callers then fall back to the block
//! size (see [`cdrom_types::media_present`]).

use udisks2::{block::BlockProxy, drive::DriveProxy};
use zbus::Connection;
use zbus::proxy::CacheProperties;

/// Read the drive's media indicator, `None` when it is not exposed.
pub async fn probe_media_hint(connection: &Connection, block: &BlockProxy<'_>) -> Option<bool> {
    let drive_path = match block.drive().await {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("Block device has no readable Drive property: {e}");
            return None;
        }
    };
    if !has_drive_object(drive_path.as_str()) {
        return None;
    }

    let drive = DriveProxy::builder(connection)
        .path(&drive_path)
        .ok()?
        .cache_properties(CacheProperties::No)
        .build()
        .await
        .ok()?;

    interpret_media_available(drive.media_available().await)
}

/// UDisks2 uses `/` for "no drive".
fn has_drive_object(path: &str) -> bool {
    !path.is_empty() && path != "/"
}

fn interpret_media_available(result: udisks2::Result<bool>) -> Option<bool> {
    match result {
        Ok(available) => Some(available),
        Err(e) => {
            tracing::debug!("MediaAvailable not exposed, falling back to capacity: {e}");
            None
        }
    }
}
