// SPDX-License-Identifier: GPL-3.0-only

pub mod launcher;
pub mod listener;
pub mod service;

pub use launcher::Launcher;
pub use listener::StateListener;
pub use service::{BlockInfo, DeviceObject, DiskService, FilesystemFacet};
