// SPDX-License-Identifier: GPL-3.0-only

use cdrom_contracts::{QueryError, StateListener};
use cdrom_types::{DriveSnapshot, DriveState, bytes_to_pretty};
use tracing::{debug, info, warn};

use crate::adapter::DeviceQuery;
use crate::classify::classify;

/// Owner of the drive state.
///
/// The state is `None` until the first pass; every pass after that compares
/// the fresh classification against it and notifies the listener only on a
/// difference.
pub struct Reconciler<L> {
    query: DeviceQuery,
    listener: L,
    state: Option<DriveState>,
    passes: u64,
}

impl<L: StateListener> Reconciler<L> {
    pub fn new(query: DeviceQuery, listener: L) -> Self {
        Self {
            query,
            listener,
            state: None,
            passes: 0,
        }
    }

    pub fn state(&self) -> Option<&DriveState> {
        self.state.as_ref()
    }

    pub fn query(&self) -> &DeviceQuery {
        &self.query
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Number of passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Run one reconciliation pass. Returns `true` when the state changed
    /// and the listener was notified.
    pub async fn tick(&mut self) -> bool {
        self.passes += 1;

        let snapshot = match self.query.query().await {
            Ok(snapshot) => snapshot,
            Err(QueryError::Unavailable) => {
                debug!(device = %self.query.device(), "Drive object not present");
                DriveSnapshot::absent()
            }
            Err(QueryError::Transport(message)) => {
                warn!(device = %self.query.device(), "Disk service query failed: {message}");
                DriveSnapshot::absent()
            }
        };

        let next = classify(&snapshot);
        if self.state.as_ref() == Some(&next) {
            return false;
        }

        match (&next, snapshot.capacity_bytes) {
            (DriveState::Unmounted | DriveState::Mounted { .. }, Some(capacity)) => info!(
                previous = self.state.as_ref().map(DriveState::label).unwrap_or("unknown"),
                capacity = %bytes_to_pretty(&capacity, false),
                "Drive state changed: {next}"
            ),
            _ => info!(
                previous = self.state.as_ref().map(DriveState::label).unwrap_or("unknown"),
                "Drive state changed: {next}"
            ),
        }

        let state = self.state.insert(next);
        self.listener.on_state_changed(state);
        true
    }
}
