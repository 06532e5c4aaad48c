//! Steam installation discovery

use crate::config::EngineConfig;
use crate::error::{ProtonError, Result};
use crate::paths::{COMMON_STEAM_DIRS, STEAM_ROOT_DIR, has_runtime_dir, has_steamapps_dir};
use crate::steam::types::SteamPaths;

use std::path::PathBuf;
use tracing::{error, info};

/// Find the Steam data directory and the tool root
///
/// An explicit `steam_dir` override must contain both a steamapps directory
/// and ubuntu12_32; if it doesn't, this fails instead of trying the
/// conventional locations.
pub fn locate_steam(cfg: &EngineConfig) -> Result<SteamPaths> {
    if let Some(steam_dir) = &cfg.overrides.steam_dir {
        if has_steamapps_dir(steam_dir) && has_runtime_dir(steam_dir) {
            info!("Found a valid Steam installation at {}", steam_dir.display());
            return Ok(SteamPaths {
                steam_path: steam_dir.clone(),
                steam_root: steam_dir.clone(),
            });
        }

        error!("$STEAM_DIR was provided but didn't point to a valid Steam installation");
        return Err(ProtonError::ConfigOverride {
            variable: "STEAM_DIR",
            reason: format!(
                "{} doesn't point to a valid Steam installation",
                steam_dir.display()
            ),
        });
    }

    // The tool root is found independently of the data directory
    let steam_root = Some(cfg.home.join(STEAM_ROOT_DIR)).filter(|root| has_runtime_dir(root));

    let found = COMMON_STEAM_DIRS
        .iter()
        .map(|dir| cfg.home.join(dir))
        .find(|path| has_steamapps_dir(path))
        .or_else(|| system_steam_dir(cfg));

    let Some(steam_path) = found else {
        return Err(ProtonError::SteamNotFound);
    };

    info!(
        "Found Steam directory at {}. You can also define Steam directory manually using $STEAM_DIR",
        steam_path.display()
    );

    Ok(SteamPaths {
        steam_root: steam_root.unwrap_or_else(|| steam_path.clone()),
        steam_path,
    })
}

/// Last resort: let steamlocate find the installation
fn system_steam_dir(cfg: &EngineConfig) -> Option<PathBuf> {
    if !cfg.system_detection {
        return None;
    }
    let steam_dir = steamlocate::SteamDir::locate().ok()?;
    let path = steam_dir.path().to_path_buf();
    has_steamapps_dir(&path).then_some(path)
}
