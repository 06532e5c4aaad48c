//! Non-Steam shortcuts running under Proton

use crate::paths::{compatdata_prefixes, loginusers_vdf, shortcuts_vdf};
use crate::steam::operations::{is_not_found, read_binary_vdf, read_text_vdf};
use crate::steam::pure::{current_user, shortcut_app_id};
use crate::steam::types::SteamApp;

use std::path::Path;
use tracing::{info, warn};

/// SteamID3 of the most recently logged-in account
pub fn current_steamid3(steam_path: &Path) -> Option<u32> {
    let doc = match read_text_vdf(&loginusers_vdf(steam_path)) {
        Ok(doc) => doc,
        Err(e) if is_not_found(&e) => return None,
        Err(e) => {
            warn!("Could not read logged-in users: {}", e);
            return None;
        }
    };

    let user = current_user(&doc)?;
    info!("Currently logged-in Steam user: {}", user.account_name);
    Some(user.steamid3)
}

/// Shortcuts of the current user that already have a Proton prefix
pub fn shortcut_apps(steam_path: &Path) -> Vec<SteamApp> {
    let Some(steamid3) = current_steamid3(steam_path) else {
        info!("No logged-in Steam user found; skipping non-Steam shortcuts");
        return Vec::new();
    };

    let doc = match read_binary_vdf(&shortcuts_vdf(steam_path, steamid3)) {
        Ok(doc) => doc,
        Err(e) if is_not_found(&e) => {
            info!("Couldn't find custom shortcuts. Maybe none have been created yet?");
            return Vec::new();
        }
        Err(e) => {
            warn!("Skipping unreadable shortcuts file: {}", e);
            return Vec::new();
        }
    };
    let Some(shortcuts) = doc.get_doc("shortcuts") else {
        return Vec::new();
    };

    let mut apps = Vec::new();
    for (key, entry) in shortcuts.iter() {
        let Some(entry) = entry.as_doc() else {
            continue;
        };
        // Field names vary in case between client versions ("exe"/"Exe")
        let entry = entry.clone().lowercase_keys();

        let (Some(exe), Some(appname)) = (entry.get_str("exe"), entry.get_str("appname")) else {
            warn!("Skipping shortcut {} without exe or appname", key);
            continue;
        };

        let app_id = shortcut_app_id(exe, appname);
        let Some(prefix_path) = compatdata_prefixes(steam_path, app_id).find(|p| p.is_dir())
        else {
            continue;
        };
        let install_path = entry.get_str("startdir").unwrap_or_default().trim_matches('"');

        apps.push(
            SteamApp::new(format!("Non-Steam shortcut: {}", appname), install_path)
                .with_app_id(app_id)
                .with_prefix(Some(prefix_path)),
        );
    }

    info!("Found {} Steam shortcuts running under Proton", apps.len());
    apps
}
