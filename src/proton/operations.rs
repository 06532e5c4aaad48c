use crate::appinfo::{find_compat_tool_app_id, read_catalog};
use crate::error::Result;
use crate::paths::config_vdf;
use crate::proton::pure::tool_mappings;
use crate::proton::types::ToolMappings;
use crate::steam::read_text_vdf;

use std::path::Path;
use tracing::{error, warn};

/// Read the compat tool mappings from config.vdf
///
/// An unreadable config.vdf means nothing is configured.
pub fn read_tool_mappings(steam_path: &Path) -> ToolMappings {
    match read_text_vdf(&config_vdf(steam_path)) {
        Ok(doc) => tool_mappings(&doc),
        Err(e) => {
            warn!("Could not read Steam configuration: {}", e);
            ToolMappings::default()
        }
    }
}

/// Look up the app ID of an official Proton release by its compat tool
/// name in appinfo.vdf
pub fn find_proton_appid(compat_tool_name: &str, appinfo_path: &Path) -> Result<Option<u64>> {
    let entries = read_catalog(appinfo_path)?;
    let app_id = find_compat_tool_app_id(&entries, compat_tool_name)?;
    if app_id.is_none() {
        error!("Could not find the Steam Play manifest in appinfo.vdf");
    }
    Ok(app_id)
}
