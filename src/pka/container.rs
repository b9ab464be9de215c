//! Loading containers from disk.

use std::fs;
use std::path::Path;
use log::{debug, info, warn};
use super::models::RawContainer;
use super::error::{PkaError, Result};

/// Read a container file verbatim.
///
/// No format checks happen here; any byte sequence is accepted and handed to
/// the decoder as-is.
pub fn read(path: impl AsRef<Path>) -> Result<RawContainer> {
    let path = path.as_ref();
    info!("Opening PKA file: {}", path.display());

    let bytes = fs::read(path).map_err(|source| PkaError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} compressed bytes from {}", bytes.len(), path.display());

    let container = RawContainer::new(bytes);
    if container.is_empty() {
        warn!("PKA file {} is empty", path.display());
    }
    Ok(container)
}
