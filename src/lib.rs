//! Steam metadata discovery and Proton resolution
//!
//! Finds a Steam installation, enumerates its libraries, builds an inventory
//! of games with a Proton prefix plus every Proton installation, and picks
//! the Proton an app is configured to run with.
//!
//! ```no_run
//! use protonfind::{EngineConfig, discover, resolve_launch_target};
//!
//! let cfg = EngineConfig::from_env();
//! let installation = discover(&cfg)?;
//! let target = resolve_launch_target(&installation, 440, &cfg.overrides)?;
//! println!("{}", target.proton.install_path.display());
//! # Ok::<(), protonfind::ProtonError>(())
//! ```

pub mod appinfo;
pub mod config;
pub mod error;
pub mod paths;
pub mod proton;
pub mod steam;
pub mod vdf;

#[cfg(test)]
mod testutil;

pub use config::{EngineConfig, Overrides};
pub use error::{ErrorKind, ProtonError, Result};
pub use proton::{LaunchTarget, find_proton_app, resolve_launch_target};
pub use steam::{SteamApp, SteamInstallation, discover};
