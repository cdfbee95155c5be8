// SPDX-License-Identifier: GPL-3.0-only

use futures::StreamExt;
use futures::stream::Stream;
use futures::task::{Context, Poll};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::warn;
use zbus::{Connection, zvariant};
use zbus_macros::proxy;

use crate::error::DiskError;
use cdrom_types::DeviceId;

pub(crate) const BLOCK_IFACE: &str = "org.freedesktop.UDisks2.Block";
pub(crate) const FILESYSTEM_IFACE: &str = "org.freedesktop.UDisks2.Filesystem";

/// Object path -> interface name -> property name -> value.
pub type ManagedObjects =
    HashMap<zvariant::OwnedObjectPath, HashMap<String, HashMap<String, zvariant::OwnedValue>>>;

#[proxy(
    default_service = "org.freedesktop.UDisks2",
    default_path = "/org/freedesktop/UDisks2/Manager",
    interface = "org.freedesktop.UDisks2.Manager"
)]
pub trait UDisks2Manager {
    #[zbus(property)]
    fn version(&self) -> zbus::Result<String>;
}

#[proxy(
    default_service = "org.freedesktop.UDisks2",
    default_path = "/org/freedesktop/UDisks2",
    interface = "org.freedesktop.DBus.ObjectManager"
)]
pub trait UDisks2ObjectManager {
    fn get_managed_objects(&self) -> zbus::Result<ManagedObjects>;

    #[zbus(signal)]
    fn interfaces_added(
        &self,
        object_path: zvariant::OwnedObjectPath,
        interfaces_and_properties: HashMap<String, HashMap<String, zvariant::OwnedValue>>,
    ) -> zbus::Result<()>;

    #[zbus(signal)]
    fn interfaces_removed(
        &self,
        object_path: zvariant::OwnedObjectPath,
        interfaces: Vec<String>,
    ) -> zbus::Result<()>;
}

/// Owns the system bus connection for the lifetime of the process.
#[derive(Clone)]
pub struct DiskManager {
    connection: Connection,
}

/// Something changed on the managed device object.
#[derive(Debug, PartialEq)]
pub enum DeviceEvent {
    /// Block or filesystem interface appeared (device or media inserted).
    Added(String),
    /// Block or filesystem interface went away (device or media removed).
    Removed(String),
}

pub struct DeviceEventStream {
    receiver: mpsc::Receiver<DeviceEvent>,
}

fn is_watched_interface(interface: &str) -> bool {
    interface == BLOCK_IFACE || interface == FILESYSTEM_IFACE
}

impl DiskManager {
    /// Connect to the system bus and check that UDisks2 answers.
    pub async fn new() -> Result<Self, DiskError> {
        let connection = Connection::system()
            .await
            .map_err(|e| DiskError::ConnectionFailed(e.to_string()))?;
        let manager = Self { connection };
        let version = manager
            .version()
            .await
            .map_err(|e| DiskError::ConnectionFailed(format!("UDisks2 is not reachable: {e}")))?;
        tracing::info!("Connected to UDisks2 {version}");
        Ok(manager)
    }

    /// Get a reference to the D-Bus connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub async fn version(&self) -> Result<String, DiskError> {
        let manager = UDisks2ManagerProxy::new(&self.connection).await?;
        Ok(manager.version().await?)
    }

    /// A signal-based event stream for the given device.
    ///
    /// Uses `org.freedesktop.DBus.ObjectManager` on the UDisks2 root object and
    /// forwards events on `device` that touch its block or filesystem interface.
    /// Mount point changes are property changes and are left to polling.
    pub async fn device_event_stream_signals(
        &self,
        device: &DeviceId,
    ) -> Result<DeviceEventStream, DiskError> {
        let (sender, receiver) = mpsc::channel(32);
        let connection = self.connection.clone();
        let watched = device.object_path().to_string();

        let object_manager = UDisks2ObjectManagerProxy::new(&connection).await?;
        let mut added_stream = object_manager.receive_interfaces_added().await?;
        let mut removed_stream = object_manager.receive_interfaces_removed().await?;

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    maybe_added = added_stream.next() => {
                        let Some(signal) = maybe_added else {
                            break;
                        };

                        match signal.args() {
                            Ok(args) => {
                                if args.object_path.as_str() == watched
                                    && args.interfaces_and_properties.keys().any(|i| is_watched_interface(i))
                                    && let Err(e) = sender.send(DeviceEvent::Added(watched.clone())).await {
                                        warn!("Device event receiver dropped: {e}");
                                        break;
                                    }
                            }
                            Err(e) => {
                                warn!("Failed to parse InterfacesAdded signal args: {e}");
                            }
                        }
                    }
                    maybe_removed = removed_stream.next() => {
                        let Some(signal) = maybe_removed else {
                            break;
                        };

                        match signal.args() {
                            Ok(args) => {
                                if args.object_path.as_str() == watched
                                    && args.interfaces.iter().any(|i| is_watched_interface(i))
                                    && let Err(e) = sender.send(DeviceEvent::Removed(watched.clone())).await {
                                        warn!("Device event receiver dropped: {e}");
                                        break;
                                    }
                            }
                            Err(e) => {
                                warn!("Failed to parse InterfacesRemoved signal args: {e}");
                            }
                        }
                    }
                }
            }
        });

        Ok(DeviceEventStream { receiver })
    }
}

impl Stream for DeviceEventStream {
    type Item = DeviceEvent;

    fn poll_next(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
