use crate::appinfo::pure::parse_catalog;
use crate::appinfo::types::CatalogEntry;
use crate::error::{ProtonError, Result};

use std::path::Path;
use tracing::info;

/// Read and decode every section of an appinfo.vdf
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let data = std::fs::read(path).map_err(|e| ProtonError::io(path, e))?;
    let entries = parse_catalog(&data)?;
    info!("Read {} app sections from {}", entries.len(), path.display());
    Ok(entries)
}
