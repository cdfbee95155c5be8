//! Connection ownership and device event monitoring
//!
//! - DiskManager owns the system bus connection
//! - Device event streams for the managed drive

pub mod disk_manager;

pub use disk_manager::*;
