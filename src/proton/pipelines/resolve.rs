//! Proton and launch target resolution

use crate::config::{Overrides, SteamRuntimeSetting};
use crate::error::{ProtonError, Result};
use crate::paths::appinfo_vdf;
use crate::proton::operations::{find_proton_appid, read_tool_mappings};
use crate::proton::pure::select_tool_name;
use crate::proton::types::LaunchTarget;
use crate::steam::{SteamApp, SteamInstallation, find_steam_runtime_path};

use std::path::Path;
use tracing::{info, warn};

/// Find the Proton installation configured in Steam for an app
///
/// With `app_id` None only the global default is considered.
pub fn find_steam_proton_app(
    steam_path: &Path,
    apps: &[SteamApp],
    app_id: Option<u64>,
) -> Result<SteamApp> {
    let mappings = read_tool_mappings(steam_path);
    let Some(name) = select_tool_name(&mappings, app_id) else {
        return Err(ProtonError::NoConfiguredRuntime);
    };
    info!("Compat tool configured in Steam: {}", name);

    // Custom Proton installations are identified by name directly
    if let Some(app) = apps.iter().find(|app| app.name == name) {
        return Ok(app.clone());
    }

    let proton_app_id = match find_proton_appid(&name, &appinfo_vdf(steam_path)) {
        Ok(Some(id)) => id,
        Ok(None) => return Err(ProtonError::RuntimeIdUnresolved { name }),
        Err(e) => {
            warn!("Could not search appinfo.vdf for '{}': {}", name, e);
            return Err(ProtonError::RuntimeIdUnresolved { name });
        }
    };

    apps.iter()
        .find(|app| app.app_id == Some(proton_app_id))
        .cloned()
        .ok_or(ProtonError::RuntimeNotInstalled {
            name,
            app_id: proton_app_id,
        })
}

/// Find the Proton installation to run an app with
///
/// A `proton_version` override must name an installed app exactly; if it
/// doesn't, the configured Proton is not tried.
pub fn find_proton_app(
    installation: &SteamInstallation,
    app_id: Option<u64>,
    overrides: &Overrides,
) -> Result<SteamApp> {
    if let Some(version) = &overrides.proton_version {
        let proton_app = installation.find_by_name(version).cloned().ok_or_else(|| {
            ProtonError::ConfigOverride {
                variable: "PROTON_VERSION",
                reason: format!("no Proton installation named '{}' was found", version),
            }
        })?;
        info!("Using Proton set by PROTON_VERSION: {}", proton_app.name);
        return Ok(proton_app);
    }

    let proton_app = find_steam_proton_app(
        &installation.paths.steam_path,
        &installation.apps,
        app_id,
    )?;
    info!(
        "Active Proton installation: {} ({})",
        proton_app.name,
        proton_app.install_path.display()
    );
    Ok(proton_app)
}

/// Resolve the game, its Proton installation and the Steam Runtime to use
pub fn resolve_launch_target(
    installation: &SteamInstallation,
    app_id: u64,
    overrides: &Overrides,
) -> Result<LaunchTarget> {
    let app = installation
        .find_app(app_id)
        .filter(|app| app.prefix_path_exists())
        .cloned()
        .ok_or(ProtonError::AppNotFound { app_id })?;

    let proton = find_proton_app(installation, Some(app_id), overrides)?;

    let setting = SteamRuntimeSetting::parse(overrides.steam_runtime.as_deref());
    let steam_runtime = find_steam_runtime_path(&installation.paths.steam_root, &setting)?;

    Ok(LaunchTarget {
        app,
        proton,
        steam_runtime,
    })
}
