//! Override handling for Steam discovery
//!
//! The discovery core never reads the process environment. Everything it
//! needs arrives through [`EngineConfig`], which is assembled here from
//! `$STEAM_DIR`, `$PROTON_VERSION`, `$STEAM_RUNTIME` and an optional
//! `settings.json`.

pub mod operations;
pub mod types;

// Re-export types
pub use types::{EngineConfig, Overrides, Settings, SteamRuntimeSetting};

// Re-export operations
pub use operations::{load_engine_config, load_settings, settings_path};
