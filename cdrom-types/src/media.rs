// SPDX-License-Identifier: GPL-3.0-only

//! Media-presence derivation.
//!
//! Newer UDisks2 daemons expose an explicit media indicator on the drive
//! object; older ones, or block devices without a drive object, do not. The
//! explicit hint wins when present, otherwise a non-zero capacity counts as
//! media.

/// Decide whether media is loaded from an optional explicit hint and the
/// reported capacity.
pub fn media_present(hint: Option<bool>, capacity_bytes: Option<u64>) -> bool {
    match hint {
        Some(present) => present,
        None => capacity_bytes.is_some_and(|size| size > 0),
    }
}
