//! Pure decoders for the KeyValues encodings
//!
//! Both take raw file bytes and never touch the filesystem.

pub(crate) mod binary;
mod text;

/// Deepest nesting either decoder accepts; deeper input is a decode error
const MAX_NESTING_DEPTH: usize = 512;

pub use binary::parse_binary;
pub use text::parse_text;
