//! Steam operations - filesystem reads
//!
//! Each function reads a specific piece of Steam metadata from disk.
//! Malformed files are reported and skipped here rather than failing the
//! whole scan.

mod appmanifest;
mod custom_tools;
mod libraries;
mod locate;
mod runtime;
mod shortcuts;

pub use appmanifest::{find_appid_proton_prefix, read_appmanifest, scan_library_apps};
pub use custom_tools::custom_proton_installs;
pub use libraries::library_paths;
pub use locate::locate_steam;
pub use runtime::find_steam_runtime_path;
pub use shortcuts::{current_steamid3, shortcut_apps};

use crate::error::{ProtonError, Result};
use crate::vdf::{self, Document};

use std::path::Path;

/// Read and decode a text KeyValues file
pub(crate) fn read_text_vdf(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path).map_err(|e| ProtonError::io(path, e))?;
    vdf::parse_text(&bytes).map_err(|e| with_context(e, path))
}

/// Read and decode a binary KeyValues file
pub(crate) fn read_binary_vdf(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path).map_err(|e| ProtonError::io(path, e))?;
    vdf::parse_binary(&bytes).map_err(|e| with_context(e, path))
}

fn with_context(err: ProtonError, path: &Path) -> ProtonError {
    match err {
        ProtonError::Decode { message, .. } => ProtonError::decode(path.display().to_string(), message),
        other => other,
    }
}

pub(crate) fn is_not_found(err: &ProtonError) -> bool {
    matches!(err, ProtonError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
}
