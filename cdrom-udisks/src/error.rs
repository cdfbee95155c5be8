// SPDX-License-Identifier: GPL-3.0-only

//! Error types for UDisks2 operations

use cdrom_contracts::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiskError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("No filesystem interface on {0}")]
    NoFilesystem(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("UDisks2 error: {0}")]
    Udisks(#[from] udisks2::Error),

    #[error("Zbus Error: {0}")]
    ZbusError(#[from] zbus::Error),
}

/// A method error is the daemon answering "no"; anything else is the bus.
fn service_error_from_zbus(error: zbus::Error) -> ServiceError {
    match error {
        zbus::Error::MethodError(name, message, _) => {
            ServiceError::Rejected(message.unwrap_or_else(|| name.to_string()))
        }
        zbus::Error::FDO(error) => ServiceError::Rejected(error.to_string()),
        other => ServiceError::Transport(other.to_string()),
    }
}

impl From<DiskError> for ServiceError {
    fn from(value: DiskError) -> Self {
        match value {
            DiskError::DeviceNotFound(device) | DiskError::InvalidPath(device) => {
                ServiceError::NotFound(device)
            }
            DiskError::NoFilesystem(device) => ServiceError::NoFilesystem(device),
            DiskError::ConnectionFailed(message) => ServiceError::Transport(message),
            DiskError::Udisks(udisks2::Error::Zbus(error)) | DiskError::ZbusError(error) => {
                service_error_from_zbus(error)
            }
            // AlreadyMounted, NotAuthorized, DeviceBusy and friends.
            DiskError::Udisks(refusal) => ServiceError::Rejected(refusal.to_string()),
        }
    }
}
