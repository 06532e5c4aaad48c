use crate::config::SteamRuntimeSetting;
use crate::error::{ProtonError, Result};
use crate::paths::RUNTIME_MARKER_DIR;

use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Resolve the Steam Runtime to run Proton with
///
/// `Ok(None)` means the runtime was disabled on purpose. A custom path that
/// isn't a directory is an error rather than a silent fallback.
pub fn find_steam_runtime_path(
    steam_root: &Path,
    setting: &SteamRuntimeSetting,
) -> Result<Option<PathBuf>> {
    match setting {
        SteamRuntimeSetting::Disabled => {
            info!("STEAM_RUNTIME is 0. Disabling Steam Runtime.");
            Ok(None)
        }
        SteamRuntimeSetting::Custom(path) if path.is_dir() => {
            info!("Using custom Steam Runtime at {}", path.display());
            Ok(Some(path.clone()))
        }
        SteamRuntimeSetting::Custom(path) => {
            error!("Path in STEAM_RUNTIME doesn't point to a valid Steam Runtime!");
            Err(ProtonError::ConfigOverride {
                variable: "STEAM_RUNTIME",
                reason: format!("{} is not a Steam Runtime directory", path.display()),
            })
        }
        SteamRuntimeSetting::Default => {
            let path = steam_root.join(RUNTIME_MARKER_DIR).join("steam-runtime");
            info!("Using default Steam Runtime at {}", path.display());
            Ok(Some(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_runtime_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        assert_eq!(find_steam_runtime_path(root, &SteamRuntimeSetting::Disabled).unwrap(), None);
        assert_eq!(
            find_steam_runtime_path(root, &SteamRuntimeSetting::Default).unwrap(),
            Some(root.join("ubuntu12_32/steam-runtime"))
        );
        assert_eq!(
            find_steam_runtime_path(root, &SteamRuntimeSetting::Custom(root.to_path_buf())).unwrap(),
            Some(root.to_path_buf())
        );

        let err = find_steam_runtime_path(root, &SteamRuntimeSetting::Custom(root.join("missing")))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigOverride);
    }
}
