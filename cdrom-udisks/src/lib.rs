// SPDX-License-Identifier: GPL-3.0-only

//! UDisks2 implementation of the disk service the drive engine talks to.

mod dbus;

pub mod drive;
pub mod error;
pub mod manager;
pub mod service;

pub use error::DiskError;
pub use manager::{DeviceEvent, DeviceEventStream, DiskManager};
pub use service::UdisksDiskService;

// Explicit exports from dbus module (DBus byte string decoding)
pub use dbus::bytestring::{decode_c_string_bytes, decode_mount_points};
