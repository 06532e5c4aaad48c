//! Valve KeyValues ("VDF") documents
//!
//! Steam keeps nearly all of its metadata in KeyValues files. Two encodings
//! show up on disk:
//! - text: `appmanifest_*.acf`, `libraryfolders.vdf`, `config.vdf`,
//!   `loginusers.vdf`, `compatibilitytool.vdf`
//! - binary: `shortcuts.vdf` and the per-app sections inside `appinfo.vdf`
//!
//! ## Module Structure
//! - `types.rs`: Document, Value
//! - `pure/`: the two decoders

mod pure;
mod types;

pub use pure::{parse_binary, parse_text};
pub use types::{Document, Value};

#[cfg(test)]
pub(crate) use pure::binary::encode as encode_binary;
