//! Well-known locations inside and around a Steam installation

use std::path::{Path, PathBuf};

/// Home-relative Steam data directories, probed in this order
pub const COMMON_STEAM_DIRS: [&str; 3] = [
    ".steam/steam",
    ".local/share/Steam",
    // Flatpak Steam
    ".var/app/com.valvesoftware.Steam/.local/share/Steam",
];

/// Home-relative tool root ("~/.steam/root"); holds ubuntu12_32 and
/// compatibilitytools.d
pub const STEAM_ROOT_DIR: &str = ".steam/root";

/// 'steamapps' is the usual name on Linux; 'SteamApps' appears in
/// installations imported from Windows
pub const STEAMAPPS_DIRS: [&str; 2] = ["steamapps", "SteamApps"];

pub const RUNTIME_MARKER_DIR: &str = "ubuntu12_32";
pub const CUSTOM_TOOLS_DIR: &str = "compatibilitytools.d";
pub const CUSTOM_TOOL_MANIFEST: &str = "compatibilitytool.vdf";
pub const LIBRARY_FOLDERS_MANIFEST: &str = "libraryfolders.vdf";
pub const PROTON_MARKER_FILE: &str = "proton";
pub const PREFIX_LOCK_FILE: &str = "pfx.lock";

pub fn has_steamapps_dir(path: &Path) -> bool {
    steamapps_dir(path).is_some()
}

/// The app-storage directory of a Steam library, whichever casing exists
pub fn steamapps_dir(path: &Path) -> Option<PathBuf> {
    STEAMAPPS_DIRS
        .iter()
        .map(|name| path.join(name))
        .find(|dir| dir.is_dir())
}

pub fn has_runtime_dir(path: &Path) -> bool {
    path.join(RUNTIME_MARKER_DIR).is_dir()
}

pub fn config_vdf(steam_path: &Path) -> PathBuf {
    steam_path.join("config/config.vdf")
}

pub fn loginusers_vdf(steam_path: &Path) -> PathBuf {
    steam_path.join("config/loginusers.vdf")
}

pub fn appinfo_vdf(steam_path: &Path) -> PathBuf {
    steam_path.join("appcache/appinfo.vdf")
}

pub fn shortcuts_vdf(steam_path: &Path, steamid3: u32) -> PathBuf {
    steam_path
        .join("userdata")
        .join(steamid3.to_string())
        .join("config/shortcuts.vdf")
}

/// Candidate prefix directories for an app ID under one library
pub fn compatdata_prefixes(library: &Path, app_id: u64) -> impl Iterator<Item = PathBuf> + '_ {
    STEAMAPPS_DIRS.iter().map(move |steamapps| {
        library
            .join(steamapps)
            .join("compatdata")
            .join(app_id.to_string())
            .join("pfx")
    })
}
