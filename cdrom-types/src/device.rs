// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

/// UDisks2 block object of the first optical drive.
pub const DEFAULT_OPTICAL_DEVICE: &str = "/org/freedesktop/UDisks2/block_devices/sr0";

const BLOCK_DEVICES_PREFIX: &str = "/org/freedesktop/UDisks2/block_devices/";

/// Stable identifier of the one drive this process manages.
///
/// Holds the UDisks2 object path of the block device. It is fixed for the
/// process lifetime and never discovered at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(object_path: impl Into<String>) -> Self {
        Self(object_path.into())
    }

    pub fn optical() -> Self {
        Self::new(DEFAULT_OPTICAL_DEVICE)
    }

    pub fn object_path(&self) -> &str {
        &self.0
    }

    /// Device node the object path stands for, e.g. `/dev/sr0`.
    pub fn device_node(&self) -> String {
        match self.0.strip_prefix(BLOCK_DEVICES_PREFIX) {
            Some(name) if !name.is_empty() => format!("/dev/{name}"),
            _ => self.0.clone(),
        }
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::optical()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
