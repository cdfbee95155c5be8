#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cdrom_contracts::{
    BlockInfo, CommandError, DeviceObject, DiskService, DriveCommand, FilesystemFacet, Launcher,
    ServiceError, StateListener,
};
use cdrom_engine::{Engine, Ticker};
use cdrom_types::{DeviceId, DriveState};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Resolve,
    Mount,
    Unmount,
}

struct FakeState {
    object: Option<DeviceObject>,
    resolve_error: Option<ServiceError>,
    mount_result: Result<String, ServiceError>,
    unmount_result: Result<(), ServiceError>,
    calls: Vec<Call>,
}

/// In-memory disk service. A successful mount or unmount updates the mount
/// points of the held object the way the daemon would.
#[derive(Clone)]
pub struct FakeDiskService {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeDiskService {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                object: None,
                resolve_error: None,
                mount_result: Ok("/media/cdrom".to_string()),
                unmount_result: Ok(()),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeDiskService {
    pub fn with_object(object: Option<DeviceObject>) -> Self {
        let service = Self::default();
        service.set_object(object);
        service
    }

    pub fn set_object(&self, object: Option<DeviceObject>) {
        self.inner.lock().unwrap().object = object;
    }

    pub fn set_resolve_error(&self, error: Option<ServiceError>) {
        self.inner.lock().unwrap().resolve_error = error;
    }

    pub fn set_mount_result(&self, result: Result<String, ServiceError>) {
        self.inner.lock().unwrap().mount_result = result;
    }

    pub fn set_unmount_result(&self, result: Result<(), ServiceError>) {
        self.inner.lock().unwrap().unmount_result = result;
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut self.inner.lock().unwrap().calls)
    }

    pub fn as_service(&self) -> Arc<dyn DiskService> {
        Arc::new(self.clone())
    }

    fn set_mount_points(&self, mount_points: Vec<String>) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(facet) = inner
            .object
            .as_mut()
            .and_then(|object| object.filesystem.as_mut())
        {
            facet.mount_points = mount_points;
        }
    }
}

#[async_trait]
impl DiskService for FakeDiskService {
    async fn resolve(&self, _device: &DeviceId) -> Result<Option<DeviceObject>, ServiceError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Resolve);
        if let Some(error) = inner.resolve_error.clone() {
            return Err(error);
        }
        Ok(inner.object.clone())
    }

    async fn mount(&self, _device: &DeviceId) -> Result<String, ServiceError> {
        let result = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Mount);
            inner.mount_result.clone()
        };
        if let Ok(location) = &result {
            self.set_mount_points(vec![location.clone()]);
        }
        result
    }

    async fn unmount(&self, _device: &DeviceId) -> Result<(), ServiceError> {
        let result = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Unmount);
            inner.unmount_result.clone()
        };
        if result.is_ok() {
            self.set_mount_points(Vec::new());
        }
        result
    }
}

/// Drive with no disc in the tray.
pub fn empty_tray() -> DeviceObject {
    DeviceObject {
        block: BlockInfo {
            size_bytes: 0,
            media_hint: None,
        },
        filesystem: None,
    }
}

/// Drive holding a disc with a recognized filesystem.
pub fn disc(capacity: u64, mount_points: &[&str]) -> DeviceObject {
    DeviceObject {
        block: BlockInfo {
            size_bytes: capacity,
            media_hint: None,
        },
        filesystem: Some(FilesystemFacet {
            mount_points: mount_points.iter().map(|p| p.to_string()).collect(),
        }),
    }
}

#[derive(Default)]
pub struct RecordingListener {
    pub states: Vec<DriveState>,
    pub commands: Vec<(DriveCommand, Result<(), CommandError>)>,
}

impl StateListener for RecordingListener {
    fn on_state_changed(&mut self, state: &DriveState) {
        self.states.push(state.clone());
    }

    fn on_command_finished(&mut self, command: DriveCommand, result: &Result<(), CommandError>) {
        self.commands.push((command, result.clone()));
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub opened: Mutex<Vec<PathBuf>>,
    pub fail_with: Option<String>,
}

impl RecordingLauncher {
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, path: &Path) -> std::io::Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(std::io::Error::other(message.clone()));
        }
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Ticker driven by hand through the returned sender. Once the sender is
/// dropped the ticker never fires again.
pub struct ManualTicker {
    receiver: mpsc::UnboundedReceiver<()>,
}

impl ManualTicker {
    pub fn new() -> (Self, mpsc::UnboundedSender<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { receiver }, sender)
    }
}

#[async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) {
        if self.receiver.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

pub type TestEngine = Engine<RecordingListener, RecordingLauncher>;

pub fn engine_for(service: &FakeDiskService) -> TestEngine {
    Engine::new(
        service.as_service(),
        DeviceId::optical(),
        RecordingListener::default(),
        RecordingLauncher::default(),
    )
}

pub fn mounted(path: &str) -> DriveState {
    DriveState::mounted(path).expect("non-empty mount path")
}
