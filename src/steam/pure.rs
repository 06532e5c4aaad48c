//! Pure functions for the steam module
//!
//! These functions work on decoded documents and strings only.

mod app_state;
mod custom_tool;
mod library_folders;
mod login_users;
mod search;
mod shortcut_id;

pub use app_state::app_state;
pub use custom_tool::{CustomTool, parse_custom_tool};
pub use library_folders::library_folders_from_document;
pub use login_users::{current_user, to_steamid3};
pub use search::normalize_search_name;
pub use shortcut_id::shortcut_app_id;
