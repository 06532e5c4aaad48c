use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted defaults, read from settings.json
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Settings {
    /// Steam installation to use instead of the autodetected one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_dir: Option<String>,
    /// Name of the Proton installation to use for every app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proton_version: Option<String>,
    /// "0" to disable the Steam Runtime, "1" for the default one, or a path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_runtime: Option<String>,
}

/// Explicit overrides honored by discovery and resolution
///
/// An override that is set but cannot be satisfied is always an error;
/// it never falls back to automatic detection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub steam_dir: Option<PathBuf>,
    pub proton_version: Option<String>,
    pub steam_runtime: Option<String>,
}

impl Overrides {
    /// Layer environment-style values over persisted settings.
    ///
    /// `lookup` returns the value of a variable; empty values count as unset.
    pub fn layered(settings: &Settings, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |var: &str, fallback: &Option<String>| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .or_else(|| fallback.clone().filter(|v| !v.is_empty()))
        };

        Self {
            steam_dir: pick("STEAM_DIR", &settings.steam_dir).map(PathBuf::from),
            proton_version: pick("PROTON_VERSION", &settings.proton_version),
            // "" is meaningful for the runtime toggle, so only absence falls through
            steam_runtime: lookup("STEAM_RUNTIME").or_else(|| settings.steam_runtime.clone()),
        }
    }
}

/// Everything the discovery pipeline needs from the outside world
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub home: PathBuf,
    pub overrides: Overrides,
    /// Ask the steamlocate crate as a last resort when no conventional
    /// location matches
    pub system_detection: bool,
}

impl EngineConfig {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            overrides: Overrides::default(),
            system_detection: false,
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Parsed form of the Steam Runtime toggle
#[derive(Clone, Debug, PartialEq)]
pub enum SteamRuntimeSetting {
    Disabled,
    /// Unset, "" or "1"
    Default,
    Custom(PathBuf),
}

impl SteamRuntimeSetting {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("0") => SteamRuntimeSetting::Disabled,
            None | Some("") | Some("1") => SteamRuntimeSetting::Default,
            Some(path) => SteamRuntimeSetting::Custom(PathBuf::from(path)),
        }
    }
}
