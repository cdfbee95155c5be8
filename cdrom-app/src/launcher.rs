// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

use cdrom_contracts::Launcher;
use tracing::info;

/// Hands the mount point to the desktop's file manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopLauncher;

impl Launcher for DesktopLauncher {
    fn launch(&self, path: &Path) -> std::io::Result<()> {
        info!("opening {}", path.display());
        open::that_detached(path)
    }
}
