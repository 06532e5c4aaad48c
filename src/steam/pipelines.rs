//! Steam pipelines - full discovery runs

mod inventory;

pub use inventory::{build_inventory, discover};
