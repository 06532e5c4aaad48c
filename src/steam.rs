//! Steam installation scanning
//!
//! Builds the list of installed apps that matter for Proton: games that
//! already have a prefix, Proton installations (official and custom) and
//! non-Steam shortcuts with their own prefix.
//!
//! ## Module Structure
//! - `types.rs`: SteamApp, SteamPaths, SteamInstallation, LoginUser
//! - `pure/`: document interpretation and shortcut ID derivation
//! - `operations/`: reads of individual Steam files
//! - `pipelines/`: locate + enumerate + scan

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export types
pub use types::{LoginUser, SteamApp, SteamInstallation, SteamPaths};

// Re-export operations
pub use operations::{
    current_steamid3, custom_proton_installs, find_appid_proton_prefix, find_steam_runtime_path,
    library_paths, locate_steam, read_appmanifest, scan_library_apps, shortcut_apps,
};

// Re-export pipelines
pub use pipelines::{build_inventory, discover};

// Re-export pure functions
pub use pure::{
    CustomTool, app_state, current_user, library_folders_from_document, normalize_search_name,
    parse_custom_tool, shortcut_app_id, to_steamid3,
};

pub(crate) use operations::read_text_vdf;
