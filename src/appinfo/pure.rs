pub(crate) mod layout;
mod compat_tools;

pub use compat_tools::find_compat_tool_app_id;
pub use layout::{APPINFO_MAGIC, parse_catalog};
