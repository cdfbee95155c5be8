// SPDX-License-Identifier: GPL-3.0-only

pub mod command;
pub mod error;

pub use command::DriveCommand;
pub use error::{CommandError, MountError, QueryError, ServiceError, UnmountError};
