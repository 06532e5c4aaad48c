//! Steam module type definitions

use crate::paths::{PREFIX_LOCK_FILE, PROTON_MARKER_FILE};
use crate::steam::pure::normalize_search_name;

use serde::Serialize;
use std::path::PathBuf;

/// An installed Steam app, or something close enough to one: a custom
/// Proton installation or a non-Steam shortcut with its own prefix
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SteamApp {
    /// Absent for custom Proton installations
    pub app_id: Option<u64>,
    pub name: String,
    pub install_path: PathBuf,
    /// Where the app's Wine prefix *might* exist
    pub prefix_path: Option<PathBuf>,
}

impl SteamApp {
    pub fn new(name: impl Into<String>, install_path: impl Into<PathBuf>) -> Self {
        Self {
            app_id: None,
            name: name.into(),
            install_path: install_path.into(),
            prefix_path: None,
        }
    }

    pub fn with_app_id(mut self, app_id: u64) -> Self {
        self.app_id = Some(app_id);
        self
    }

    pub fn with_prefix(mut self, prefix_path: Option<PathBuf>) -> Self {
        self.prefix_path = prefix_path;
        self
    }

    /// True if the app has a prefix that has been launched at least once
    ///
    /// 'pfx' is incomplete until the first launch, so the sibling
    /// 'pfx.lock' must exist as well.
    pub fn prefix_path_exists(&self) -> bool {
        let Some(prefix) = &self.prefix_path else {
            return false;
        };
        let Some(compatdata) = prefix.parent() else {
            return false;
        };
        prefix.exists() && compatdata.join(PREFIX_LOCK_FILE).exists()
    }

    /// True if the install directory contains a "proton" file
    pub fn is_proton(&self) -> bool {
        self.install_path.join(PROTON_MARKER_FILE).exists()
    }

    /// Loose substring search on the app name, ignoring case, spaces and
    /// punctuation
    pub fn name_contains(&self, query: &str) -> bool {
        normalize_search_name(&self.name).contains(&normalize_search_name(query))
    }
}

/// Data and tool directories of a Steam installation
#[derive(Clone, Debug, PartialEq)]
pub struct SteamPaths {
    /// "~/.steam/steam": contains appcache, config and steamapps
    pub steam_path: PathBuf,
    /// "~/.steam/root": contains ubuntu12_32 and compatibilitytools.d.
    /// Equal to `steam_path` when the real root could not be found.
    pub steam_root: PathBuf,
}

/// A fully scanned Steam installation
#[derive(Clone, Debug)]
pub struct SteamInstallation {
    pub paths: SteamPaths,
    /// Library roots, primary installation first
    pub libraries: Vec<PathBuf>,
    /// Apps with a usable prefix plus Proton installations, sorted by name
    pub apps: Vec<SteamApp>,
}

impl SteamInstallation {
    pub fn find_app(&self, app_id: u64) -> Option<&SteamApp> {
        self.apps.iter().find(|app| app.app_id == Some(app_id))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&SteamApp> {
        self.apps.iter().find(|app| app.name == name)
    }
}

/// An account entry from loginusers.vdf
#[derive(Clone, Debug, PartialEq)]
pub struct LoginUser {
    pub steamid3: u32,
    pub account_name: String,
    pub timestamp: u64,
}
