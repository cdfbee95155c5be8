// SPDX-License-Identifier: GPL-3.0-only

pub mod protocol;
pub mod traits;

pub use protocol::{
    CommandError, DriveCommand, MountError, QueryError, ServiceError, UnmountError,
};
pub use traits::{
    BlockInfo, DeviceObject, DiskService, FilesystemFacet, Launcher, StateListener,
};
