// SPDX-License-Identifier: GPL-3.0-only

//! Canonical domain models for the optical drive controller
//!
//! These types flow through the whole stack:
//!
//! - **cdrom-udisks**: fills [`DeviceObject`]-level facts from UDisks2
//! - **cdrom-engine**: turns a [`DriveSnapshot`] into a [`DriveState`]
//! - **cdrom-app**: renders a [`DriveState`] for the user

pub mod common;
pub mod device;
pub mod media;
pub mod snapshot;
pub mod state;

pub use common::bytes_to_pretty;
pub use device::{DEFAULT_OPTICAL_DEVICE, DeviceId};
pub use media::media_present;
pub use snapshot::DriveSnapshot;
pub use state::{DriveState, MountPath};
