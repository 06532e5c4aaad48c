mod env;
mod io;

pub use env::load_engine_config;
pub use io::{load_settings, settings_path};
