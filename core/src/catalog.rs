//! # Scan Catalog
//!
//! A scan is any immediate subdirectory of the recon root. This is the only read that
//! may fail loudly: without a readable root there is nothing to serve.

use std::path::Path;

use reconview_common::error::CatalogError;
use reconview_common::models::scan::ScanId;
use tracing::debug;

/// Lists scan ids under `root`, sorted by name.
///
/// Regular files and symlinks are ignored, as are directory names that are not valid
/// scan ids (non UTF-8, for instance).
pub async fn list_scans(root: &Path) -> Result<Vec<ScanId>, CatalogError> {
    let mut entries = tokio::fs::read_dir(root)
        .await
        .map_err(|e| CatalogError::from_io(root, e))?;

    let mut scans = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| CatalogError::from_io(root, e))?
    {
        let is_dir = match entry.file_type().await {
            Ok(kind) => kind.is_dir(),
            Err(e) => {
                debug!("Skipping {}: {}", entry.path().display(), e);
                false
            }
        };
        if !is_dir {
            continue;
        }

        match entry.file_name().to_str().map(str::parse::<ScanId>) {
            Some(Ok(id)) => scans.push(id),
            _ => debug!("Ignoring scan directory with unusable name: {:?}", entry.file_name()),
        }
    }

    scans.sort();
    Ok(scans)
}
