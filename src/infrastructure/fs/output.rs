//! Output file writing

use std::io::Write;
use std::path::Path;

use crate::error::TreeGridResult;

/// Write content to a file atomically
///
/// Content goes to a temporary file in the target directory which is then
/// renamed over the destination, so readers never see a partial file.
pub fn atomic_write(path: &Path, content: &[u8]) -> TreeGridResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
