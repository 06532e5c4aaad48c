//! Pipelines module (orchestration)

pub mod resolve;

pub use resolve::{find_proton_app, find_steam_proton_app, resolve_launch_target};
