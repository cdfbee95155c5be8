// SPDX-License-Identifier: GPL-3.0-only

//! Drive-state reconciliation engine
//!
//! Polls the disk service for the one managed drive, classifies what it sees
//! into a [`DriveState`](cdrom_types::DriveState) and tells the listener only
//! when that classification changes. Commands run through the same engine and
//! always end with a fresh pass.

pub mod adapter;
pub mod classify;
pub mod commands;
pub mod engine;
pub mod reconcile;
pub mod ticker;

pub use adapter::DeviceQuery;
pub use classify::classify;
pub use commands::CommandExecutor;
pub use engine::{Engine, Request};
pub use reconcile::Reconciler;
pub use ticker::{DEFAULT_POLL_INTERVAL, IntervalTicker, Ticker};
