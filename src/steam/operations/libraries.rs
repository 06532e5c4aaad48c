use crate::paths::{LIBRARY_FOLDERS_MANIFEST, steamapps_dir};
use crate::steam::operations::{is_not_found, read_text_vdf};
use crate::steam::pure::library_folders_from_document;

use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// All Steam library roots, the primary installation first
///
/// Without a readable libraryfolders.vdf only the primary installation is
/// returned.
pub fn library_paths(steam_path: &Path) -> Vec<PathBuf> {
    let mut libraries = vec![steam_path.to_path_buf()];

    let Some(steamapps) = steamapps_dir(steam_path) else {
        return libraries;
    };
    let manifest = steamapps.join(LIBRARY_FOLDERS_MANIFEST);

    let folders = match read_text_vdf(&manifest) {
        Ok(doc) => library_folders_from_document(&doc),
        Err(e) if is_not_found(&e) => Vec::new(),
        Err(e) => {
            warn!("Skipping malformed library folder manifest: {}", e);
            Vec::new()
        }
    };

    info!("Found {} Steam library folders", folders.len());
    // Newer manifests list the primary installation as well, often by its
    // real path while `steam_path` goes through the ~/.steam/steam symlink
    let mut seen: Vec<PathBuf> = libraries.iter().map(|p| canonical(p)).collect();
    for folder in folders {
        let key = canonical(&folder);
        if !seen.contains(&key) {
            seen.push(key);
            libraries.push(folder);
        }
    }
    info!("Steam library folders: {:?}", libraries);

    libraries
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
