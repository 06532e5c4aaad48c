//! Custom Proton installations in compatibilitytools.d

use crate::paths::{CUSTOM_TOOL_MANIFEST, CUSTOM_TOOLS_DIR};
use crate::steam::operations::read_text_vdf;
use crate::steam::pure::parse_custom_tool;
use crate::steam::types::SteamApp;

use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// compatibilitytool.vdf files directly in the tools root or one level below
fn find_tool_manifests(tools_root: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(tools_root)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == CUSTOM_TOOL_MANIFEST)
        .map(|entry| entry.into_path())
        .collect()
}

/// Custom Proton installations as SteamApps named after their internal name
pub fn custom_proton_installs(steam_root: &Path) -> Vec<SteamApp> {
    let tools_root = steam_root.join(CUSTOM_TOOLS_DIR);
    if !tools_root.is_dir() {
        return Vec::new();
    }

    let mut apps = Vec::new();
    for manifest in find_tool_manifests(&tools_root) {
        let tool = read_text_vdf(&manifest)
            .and_then(|doc| parse_custom_tool(&doc, &manifest, &tools_root));

        match tool {
            Ok(Some(tool)) => {
                info!(
                    "Found custom Proton installation {} at {}",
                    tool.internal_name,
                    tool.install_path.display()
                );
                apps.push(SteamApp::new(tool.internal_name, tool.install_path));
            }
            Ok(None) => {}
            Err(e) => warn!("Skipping custom compatibility tool: {}", e),
        }
    }
    apps
}
