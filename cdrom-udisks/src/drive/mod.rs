//! Operations on the managed drive's block object
//!
//! - Resolution into a [`cdrom_contracts::DeviceObject`]
//! - Media-hint capability probe
//! - Filesystem mount and unmount

mod media;
mod mount;
mod resolve;

pub use media::probe_media_hint;
pub use mount::{mount_filesystem, unmount_filesystem};
pub use resolve::{object_path_for, resolve_device};
