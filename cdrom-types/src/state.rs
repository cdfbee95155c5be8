// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

/// A mount location that is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MountPath(String);

impl MountPath {
    /// Returns `None` for an empty string.
    pub fn new(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        if path.is_empty() { None } else { Some(Self(path)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MountPath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "mount path must not be empty".to_string())
    }
}

impl From<MountPath> for String {
    fn from(value: MountPath) -> Self {
        value.0
    }
}

impl AsRef<str> for MountPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of the drive held by the reconciliation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DriveState {
    /// No device object found.
    Absent,
    /// Device exists, no usable media.
    NoMedia,
    /// Media present, not mounted anywhere.
    Unmounted,
    /// Media present and mounted; `path` is the first reported location.
    Mounted { path: MountPath },
}

impl DriveState {
    /// `Mounted` at `path`, or `None` when `path` is empty.
    pub fn mounted(path: impl Into<String>) -> Option<Self> {
        MountPath::new(path).map(|path| Self::Mounted { path })
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted { .. })
    }

    pub fn mount_path(&self) -> Option<&MountPath> {
        match self {
            Self::Mounted { path } => Some(path),
            _ => None,
        }
    }

    /// Short lowercase name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::NoMedia => "no-media",
            Self::Unmounted => "unmounted",
            Self::Mounted { .. } => "mounted",
        }
    }
}

impl fmt::Display for DriveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mounted { path } => write!(f, "mounted at {path}"),
            other => f.write_str(other.label()),
        }
    }
}
