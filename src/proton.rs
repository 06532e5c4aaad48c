//! Proton resolution - which Proton installation runs an app
//!
//! Resolution order:
//! 1. `proton_version` override, matched by name (no fallback if it misses)
//! 2. the compat tool configured in config.vdf for the app, then the global
//!    default, newer `CompatToolMapping` before legacy `ToolMapping`
//! 3. that name looked up in the inventory (custom installs are named
//!    directly), otherwise mapped to an app ID through appinfo.vdf
//!
//! ## Module Structure
//! - `types.rs`: ToolMappings, LaunchTarget
//! - `pure/`: compat tool name selection
//! - `operations.rs`: config.vdf and appinfo.vdf reads
//! - `pipelines/`: end-to-end resolution

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export types
pub use types::{LaunchTarget, ToolMappings};

// Re-export operations
pub use operations::{find_proton_appid, read_tool_mappings};

// Re-export pipelines
pub use pipelines::{find_proton_app, find_steam_proton_app, resolve_launch_target};

// Re-export pure functions
pub use pure::{candidate_tool_names, select_tool_name, tool_mappings};
