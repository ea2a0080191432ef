use crate::report::error::ReportError;
use std::io::Write;
use std::path::Path;

/// Writes content to a file atomically using tempfile + rename.
///
/// Either the complete file appears at `path` or nothing does.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file =
        tempfile::NamedTempFile::new_in(parent).map_err(|e| ReportError::io(path, e))?;

    temp_file
        .write_all(content)
        .and_then(|_| temp_file.as_file().sync_all())
        .map_err(|e| ReportError::io(path, e))?;

    temp_file
        .persist(path)
        .map_err(|e| ReportError::io(path, e.error))?;

    Ok(())
}
