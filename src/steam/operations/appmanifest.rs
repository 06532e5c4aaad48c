//! appmanifest_<appid>.acf scanning

use crate::paths::{compatdata_prefixes, steamapps_dir};
use crate::steam::operations::read_text_vdf;
use crate::steam::pure::app_state;
use crate::steam::types::SteamApp;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{info, warn};

static APPMANIFEST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^appmanifest_\d+\.acf$").expect("valid appmanifest pattern"));

/// Find the Proton prefix for an app ID
///
/// The prefix and the installation can live on different libraries, so
/// every library is searched; the first existing directory wins.
pub fn find_appid_proton_prefix(app_id: u64, libraries: &[PathBuf]) -> Option<PathBuf> {
    libraries
        .iter()
        .flat_map(|library| compatdata_prefixes(library, app_id))
        .find(|prefix| prefix.is_dir())
}

/// Parse one appmanifest into a SteamApp
///
/// Returns None (after logging) for unreadable, malformed or empty
/// manifests; a broken manifest never aborts the scan.
pub fn read_appmanifest(path: &Path, libraries: &[PathBuf]) -> Option<SteamApp> {
    let doc = match read_text_vdf(path) {
        Ok(doc) => doc,
        Err(e) => {
            // Happens with corrupted manifests, eg. after running a Linux
            // filesystem under Windows
            warn!("Skipping malformed appmanifest {}: {}", path.display(), e);
            return None;
        }
    };

    let Some(state) = app_state(&doc) else {
        info!("Skipping empty appmanifest {}", path.display());
        return None;
    };

    let fields = (
        state.get("appid").and_then(|v| v.as_u64()),
        state.get("name").and_then(|v| v.as_str()),
        state.get("installdir").and_then(|v| v.as_str()),
    );
    let (Some(app_id), Some(name), Some(installdir)) = fields else {
        warn!(
            "Skipping appmanifest {}: missing appid, name or installdir",
            path.display()
        );
        return None;
    };

    let steamapps = path.parent().unwrap_or(Path::new(""));
    let install_path = steamapps.join("common").join(installdir);
    let prefix_path = find_appid_proton_prefix(app_id, libraries);

    Some(
        SteamApp::new(name, install_path)
            .with_app_id(app_id)
            .with_prefix(prefix_path),
    )
}

/// All apps with a parseable appmanifest in one library
pub fn scan_library_apps(library: &Path, libraries: &[PathBuf]) -> Vec<SteamApp> {
    let Some(steamapps) = steamapps_dir(library) else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(&steamapps) else {
        warn!("Could not read {}", steamapps.display());
        return Vec::new();
    };

    let mut manifests: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| APPMANIFEST_NAME.is_match(n))
        })
        .collect();
    manifests.sort();

    manifests
        .iter()
        .filter_map(|manifest| {
            info!("Checking appmanifest {}", manifest.display());
            let app = read_appmanifest(manifest, libraries)?;
            info!("Found app {}. Has prefix: {}", app.name, app.prefix_path_exists());
            Some(app)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_manifest(steamapps: &Path, app_id: u64, body: &str) -> PathBuf {
        fs::create_dir_all(steamapps).unwrap();
        let path = steamapps.join(format!("appmanifest_{}.acf", app_id));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_read_appmanifest() {
        let dir = tempfile::tempdir().unwrap();
        let library = dir.path().to_path_buf();
        let path = write_manifest(
            &library.join("steamapps"),
            440,
            r#""AppState" { "appID" "440" "name" "Team Fortress 2" "installdir" "TF2" }"#,
        );

        let app = read_appmanifest(&path, &[library.clone()]).unwrap();
        assert_eq!(app.app_id, Some(440));
        assert_eq!(app.name, "Team Fortress 2");
        assert_eq!(app.install_path, library.join("steamapps/common/TF2"));
        assert_eq!(app.prefix_path, None);
    }

    #[test]
    fn test_prefix_found_on_other_library() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join("primary");
        let secondary = dir.path().join("secondary");
        let pfx = secondary.join("SteamApps/compatdata/10/pfx");
        fs::create_dir_all(&pfx).unwrap();
        fs::create_dir_all(primary.join("steamapps")).unwrap();

        let libraries = vec![primary, secondary];
        assert_eq!(find_appid_proton_prefix(10, &libraries), Some(pfx));
        assert_eq!(find_appid_proton_prefix(11, &libraries), None);
    }

    #[test]
    fn test_malformed_manifests_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let steamapps = dir.path().join("steamapps");
        write_manifest(&steamapps, 1, r#""AppState" { "appid" "1" "name" "Good" "installdir" "g" }"#);
        write_manifest(&steamapps, 2, "\"AppState\" {");
        write_manifest(&steamapps, 3, "");
        fs::write(steamapps.join("appmanifest_4.acf"), b"\"AppState\" \xff").unwrap();
        write_manifest(&steamapps, 5, r#""AppState" { "appid" "5" }"#);
        fs::write(steamapps.join("not_a_manifest.acf"), "garbage").unwrap();

        let apps = scan_library_apps(dir.path(), &[dir.path().to_path_buf()]);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "Good");
    }
}
