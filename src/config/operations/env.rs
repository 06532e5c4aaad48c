use crate::config::operations::io::{load_settings, settings_path};
use crate::config::types::{EngineConfig, Overrides};

use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Build the engine configuration from the process environment
///
/// This is the only place the environment is consulted.
pub fn load_engine_config() -> EngineConfig {
    let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

    let path = settings_path(&home, xdg.as_deref());
    let settings = load_settings(&path);
    debug!("Loaded settings from {}: {:?}", path.display(), settings);

    let overrides = Overrides::layered(&settings, |var| env::var(var).ok());

    EngineConfig {
        home,
        overrides,
        system_detection: true,
    }
}

impl EngineConfig {
    /// See [`load_engine_config`]
    pub fn from_env() -> Self {
        load_engine_config()
    }
}
