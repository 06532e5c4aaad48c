//! libraryfolders.vdf interpretation
//!
//! Two schemas exist:
//! - legacy: `"LibraryFolders" { "1" "/path" }`
//! - current: `"libraryfolders" { "0" { "path" "/path" ... } }`

use crate::vdf::{Document, Value};

use std::path::PathBuf;

/// Library paths listed in the manifest, in ascending numeric key order
pub fn library_folders_from_document(doc: &Document) -> Vec<PathBuf> {
    let Some(folders) = doc.get_doc("LibraryFolders") else {
        return Vec::new();
    };

    let mut numbered: Vec<(u64, PathBuf)> = folders
        .iter()
        .filter(|(key, _)| !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|(key, value)| {
            let index = key.parse().ok()?;
            let path = match value {
                Value::Str(path) => path.as_str(),
                Value::Doc(entry) => entry.get_str("path")?,
                _ => return None,
            };
            Some((index, PathBuf::from(path)))
        })
        .collect();

    // Document order is whatever Steam wrote; the numeric key is authoritative
    numbered.sort_by_key(|(index, _)| *index);
    numbered.into_iter().map(|(_, path)| path).collect()
}
