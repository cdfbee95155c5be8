mod common;

use cdrom_contracts::ServiceError;
use cdrom_types::DriveState;
use common::fixtures::{FakeDiskService, disc, empty_tray, engine_for, mounted};

#[tokio::test]
async fn first_pass_always_notifies() {
    let service = FakeDiskService::with_object(None);
    let mut engine = engine_for(&service);

    assert!(engine.reconciler().state().is_none());
    assert!(engine.tick().await);
    assert_eq!(engine.reconciler().listener().states, vec![DriveState::Absent]);
}

#[tokio::test]
async fn first_pass_notifies_even_when_the_service_is_unreachable() {
    let service = FakeDiskService::with_object(Some(disc(4096, &[])));
    service.set_resolve_error(Some(ServiceError::Transport("no bus".to_string())));
    let mut engine = engine_for(&service);

    assert!(engine.tick().await);
    assert_eq!(engine.reconciler().listener().states, vec![DriveState::Absent]);
}

#[tokio::test]
async fn identical_passes_notify_once() {
    let service = FakeDiskService::with_object(Some(disc(700_000_000, &["/media/cdrom"])));
    let mut engine = engine_for(&service);

    assert!(engine.tick().await);
    assert!(!engine.tick().await);
    assert!(!engine.tick().await);

    assert_eq!(
        engine.reconciler().listener().states,
        vec![mounted("/media/cdrom")]
    );
    assert_eq!(engine.reconciler().passes(), 3);
}

#[tokio::test]
async fn any_state_can_follow_any_other() {
    let service = FakeDiskService::with_object(None);
    let mut engine = engine_for(&service);
    engine.tick().await;

    service.set_object(Some(disc(4096, &["/media/cdrom"])));
    engine.tick().await;
    service.set_object(Some(empty_tray()));
    engine.tick().await;
    service.set_object(Some(disc(4096, &[])));
    engine.tick().await;
    service.set_object(None);
    engine.tick().await;

    assert_eq!(
        engine.reconciler().listener().states,
        vec![
            DriveState::Absent,
            mounted("/media/cdrom"),
            DriveState::NoMedia,
            DriveState::Unmounted,
            DriveState::Absent,
        ]
    );
}

#[tokio::test]
async fn remount_elsewhere_is_a_change() {
    let service = FakeDiskService::with_object(Some(disc(4096, &["/media/cdrom"])));
    let mut engine = engine_for(&service);
    engine.tick().await;

    service.set_object(Some(disc(4096, &["/run/media/user/DISC"])));
    assert!(engine.tick().await);

    assert_eq!(
        engine.reconciler().state(),
        Some(&mounted("/run/media/user/DISC"))
    );
    assert_eq!(engine.reconciler().listener().states.len(), 2);
}

#[tokio::test]
async fn transport_failure_reads_as_absent_and_loop_survives() {
    let service = FakeDiskService::with_object(Some(disc(4096, &[])));
    let mut engine = engine_for(&service);
    engine.tick().await;

    service.set_resolve_error(Some(ServiceError::Transport("connection reset".to_string())));
    assert!(engine.tick().await);
    assert_eq!(engine.reconciler().state(), Some(&DriveState::Absent));

    service.set_resolve_error(None);
    assert!(engine.tick().await);
    assert_eq!(engine.reconciler().state(), Some(&DriveState::Unmounted));
}

#[tokio::test]
async fn capacity_fallback_decides_media_presence() {
    let service = FakeDiskService::with_object(Some(disc(0, &[])));
    let mut engine = engine_for(&service);
    engine.tick().await;
    assert_eq!(engine.reconciler().state(), Some(&DriveState::NoMedia));

    service.set_object(Some(disc(4096, &[])));
    engine.tick().await;
    assert_eq!(engine.reconciler().state(), Some(&DriveState::Unmounted));
}

#[tokio::test]
async fn explicit_media_hint_is_preferred() {
    let mut object = disc(700_000_000, &[]);
    object.block.media_hint = Some(false);
    let service = FakeDiskService::with_object(Some(object));
    let mut engine = engine_for(&service);

    engine.tick().await;
    assert_eq!(engine.reconciler().state(), Some(&DriveState::NoMedia));
}

#[tokio::test]
async fn empty_mount_points_never_yield_mounted() {
    let service = FakeDiskService::with_object(Some(disc(4096, &["", ""])));
    let mut engine = engine_for(&service);

    engine.tick().await;
    assert_eq!(engine.reconciler().state(), Some(&DriveState::Unmounted));
}
