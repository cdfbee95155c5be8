// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::media::media_present;

/// Raw facts about the drive gathered by one poll.
///
/// Snapshots are never stored; the engine classifies and drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveSnapshot {
    /// Whether the service could resolve the device object.
    pub exists: bool,

    /// Size of the block device in bytes, if reported.
    pub capacity_bytes: Option<u64>,

    /// Explicit media-present indicator, `None` when the service does not expose one.
    pub media_hint: Option<bool>,

    /// Mount locations in service order. May be empty.
    pub mount_paths: Vec<String>,
}

impl DriveSnapshot {
    /// Snapshot for a device the service cannot resolve.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn has_media(&self) -> bool {
        media_present(self.media_hint, self.capacity_bytes)
    }

    /// First mount location that is not an empty string.
    pub fn first_mount_path(&self) -> Option<&str> {
        self.mount_paths
            .iter()
            .map(String::as_str)
            .find(|path| !path.is_empty())
    }
}
