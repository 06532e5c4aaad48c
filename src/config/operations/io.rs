use crate::config::types::Settings;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Location of settings.json: `$XDG_CONFIG_HOME/protonfind`, or
/// `~/.config/protonfind` when XDG_CONFIG_HOME is unset
pub fn settings_path(home: &Path, xdg_config_home: Option<&Path>) -> PathBuf {
    match xdg_config_home {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join("protonfind/settings.json"),
        _ => home.join(".config/protonfind/settings.json"),
    }
}

pub fn load_settings(path: &Path) -> Settings {
    let Ok(file) = File::open(path) else {
        return Settings::default();
    };

    match serde_json::from_reader::<_, Settings>(BufReader::new(file)) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring malformed settings file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}
