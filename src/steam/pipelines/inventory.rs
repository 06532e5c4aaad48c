//! Inventory of installed apps and Proton installations

use crate::config::EngineConfig;
use crate::error::Result;
use crate::steam::operations::{
    custom_proton_installs, library_paths, locate_steam, scan_library_apps, shortcut_apps,
};
use crate::steam::types::{SteamApp, SteamInstallation};

use std::path::{Path, PathBuf};
use tracing::info;

/// Find every installed app, custom Proton installation and non-Steam
/// shortcut
///
/// Apps that have never been launched (no usable prefix) and aren't Proton
/// installations themselves are left out. The result is sorted by name.
pub fn build_inventory(steam_root: &Path, steam_path: &Path, libraries: &[PathBuf]) -> Vec<SteamApp> {
    let mut apps: Vec<SteamApp> = libraries
        .iter()
        .flat_map(|library| scan_library_apps(library, libraries))
        .collect();

    apps.extend(custom_proton_installs(steam_root));
    apps.extend(shortcut_apps(steam_path));

    apps.retain(|app| app.prefix_path_exists() || app.is_proton());
    apps.sort_by(|a, b| a.name.cmp(&b.name));

    info!("Found {} apps with a Proton prefix or Proton installations", apps.len());
    apps
}

/// Locate Steam and scan it
pub fn discover(cfg: &EngineConfig) -> Result<SteamInstallation> {
    let paths = locate_steam(cfg)?;
    let libraries = library_paths(&paths.steam_path);
    let apps = build_inventory(&paths.steam_root, &paths.steam_path, &libraries);

    Ok(SteamInstallation {
        paths,
        libraries,
        apps,
    })
}
