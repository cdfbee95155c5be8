// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

/// Opens a location with the desktop's default handler.
pub trait Launcher {
    fn launch(&self, path: &Path) -> std::io::Result<()>;
}
