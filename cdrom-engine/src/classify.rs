// SPDX-License-Identifier: GPL-3.0-only

use cdrom_types::{DriveSnapshot, DriveState, MountPath};

/// Map a snapshot to exactly one drive state. First match wins:
/// missing device, no media, no usable mount path, mounted.
pub fn classify(snapshot: &DriveSnapshot) -> DriveState {
    if !snapshot.exists {
        return DriveState::Absent;
    }
    if !snapshot.has_media() {
        return DriveState::NoMedia;
    }

    match snapshot.first_mount_path().and_then(MountPath::new) {
        Some(path) => DriveState::Mounted { path },
        None => DriveState::Unmounted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        exists: bool,
        capacity_bytes: Option<u64>,
        media_hint: Option<bool>,
        mount_paths: &[&str],
    ) -> DriveSnapshot {
        DriveSnapshot {
            exists,
            capacity_bytes,
            media_hint,
            mount_paths: mount_paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn sample_snapshots() -> Vec<DriveSnapshot> {
        let mut out = Vec::new();
        for exists in [false, true] {
            for capacity in [None, Some(0), Some(4096), Some(700_000_000)] {
                for hint in [None, Some(false), Some(true)] {
                    for mounts in [
                        &[][..],
                        &[""][..],
                        &["", ""][..],
                        &["/media/cdrom"][..],
                        &["", "/run/media/user/DISC"][..],
                    ] {
                        out.push(snapshot(exists, capacity, hint, mounts));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn missing_device_is_absent_even_with_stale_facts() {
        let s = snapshot(false, Some(700_000_000), Some(true), &["/media/cdrom"]);
        assert_eq!(classify(&s), DriveState::Absent);
    }

    #[test]
    fn zero_capacity_without_hint_is_no_media() {
        let s = snapshot(true, Some(0), None, &[]);
        assert_eq!(classify(&s), DriveState::NoMedia);
    }

    #[test]
    fn capacity_without_hint_counts_as_media() {
        assert_eq!(
            classify(&snapshot(true, Some(4096), None, &[])),
            DriveState::Unmounted
        );
        assert_eq!(
            classify(&snapshot(true, Some(4096), None, &["/media/cdrom"])),
            DriveState::mounted("/media/cdrom").unwrap()
        );
    }

    #[test]
    fn explicit_hint_wins_over_capacity() {
        let s = snapshot(true, Some(700_000_000), Some(false), &["/media/cdrom"]);
        assert_eq!(classify(&s), DriveState::NoMedia);
    }

    #[test]
    fn only_empty_mount_paths_downgrade_to_unmounted() {
        let s = snapshot(true, Some(4096), None, &["", ""]);
        assert_eq!(classify(&s), DriveState::Unmounted);
    }

    #[test]
    fn first_non_empty_mount_path_is_used() {
        let s = snapshot(true, Some(4096), None, &["", "/run/media/user/DISC", "/mnt"]);
        assert_eq!(
            classify(&s),
            DriveState::mounted("/run/media/user/DISC").unwrap()
        );
    }

    #[test]
    fn mounted_path_is_non_empty_and_reported_by_the_service() {
        for s in sample_snapshots() {
            if let DriveState::Mounted { path } = classify(&s) {
                assert!(!path.as_str().is_empty());
                assert!(s.mount_paths.iter().any(|p| p == path.as_str()));
            }
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for s in sample_snapshots() {
            assert_eq!(classify(&s), classify(&s.clone()));
        }
    }
}
