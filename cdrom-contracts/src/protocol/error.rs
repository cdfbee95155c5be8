// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a [`crate::DiskService`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ServiceError {
    /// The device object vanished between resolution and the call.
    #[error("device not found: {0}")]
    NotFound(String),

    /// The device has no filesystem interface to call into.
    #[error("no filesystem interface on {0}")]
    NoFilesystem(String),

    /// The service received the request and refused it.
    #[error("{0}")]
    Rejected(String),

    /// The service could not be reached.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Why a poll produced no snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("device unavailable")]
    Unavailable,

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<ServiceError> for QueryError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound(_) | ServiceError::NoFilesystem(_) => Self::Unavailable,
            ServiceError::Rejected(message) | ServiceError::Transport(message) => {
                Self::Transport(message)
            }
        }
    }
}

/// Outcome of a user command that did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandError {
    #[error("device not found: {device}")]
    DeviceNotFound { device: String },

    #[error("no filesystem interface on {device}")]
    NoFilesystemFacet { device: String },

    #[error("service refused the request: {message}")]
    Rejected { message: String },

    #[error("could not reach the disk service: {message}")]
    Transport { message: String },

    #[error("could not open {path}: {message}")]
    Launch { path: String, message: String },
}

impl From<ServiceError> for CommandError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound(device) => Self::DeviceNotFound { device },
            ServiceError::NoFilesystem(device) => Self::NoFilesystemFacet { device },
            ServiceError::Rejected(message) => Self::Rejected { message },
            ServiceError::Transport(message) => Self::Transport { message },
        }
    }
}

pub type MountError = CommandError;
pub type UnmountError = CommandError;
