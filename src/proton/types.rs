use crate::steam::SteamApp;
use crate::vdf::Document;

use serde::Serialize;
use std::path::PathBuf;

/// Compat tool mappings from config.vdf, keyed by app ID ("0" = default)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolMappings {
    /// `CompatToolMapping`, written by current Steam releases
    pub compat_tool_mapping: Document,
    /// `ToolMapping`, written by older Steam beta releases
    pub tool_mapping: Document,
}

/// Everything needed to run a command inside an app's prefix
#[derive(Clone, Debug, Serialize)]
pub struct LaunchTarget {
    pub app: SteamApp,
    pub proton: SteamApp,
    /// None when the Steam Runtime is disabled
    pub steam_runtime: Option<PathBuf>,
}
