//! appinfo.vdf catalog
//!
//! appinfo.vdf is not a VDF file itself but a container of many binary VDF
//! sections, one per app. Steam keeps the SteamPlay compat tool manifests
//! here, which is the only place that maps an official Proton name like
//! "proton_7" to its app ID.
//!
//! ## Module Structure
//! - `types.rs`: CatalogEntry
//! - `pure/`: container layout and compat tool lookup
//! - `operations/`: reading the catalog from disk

mod operations;
mod pure;
mod types;

pub use operations::read_catalog;
pub use pure::{APPINFO_MAGIC, find_compat_tool_app_id, parse_catalog};
pub use types::CatalogEntry;

#[cfg(test)]
pub(crate) use pure::layout::encode as encode_catalog;
