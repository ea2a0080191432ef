use crate::reading::clock::to_rfc3339;
use crate::report::ReportError;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Every daemon line, parsed or not, as `<rfc3339>: <line>`.
///
/// Lines go to a temp file next to the destination which only appears at
/// its final path when [`RawLineLog::finish`] runs.
pub struct RawLineLog {
    path: PathBuf,
    writer: BufWriter<NamedTempFile>,
    lines: u64,
    failed: bool,
}

impl RawLineLog {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let path = path.into();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp = NamedTempFile::new_in(&parent).map_err(|e| ReportError::io(&path, e))?;

        Ok(Self {
            path,
            writer: BufWriter::new(temp),
            lines: 0,
            failed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line. A write failure is logged once and later lines are
    /// skipped; the error resurfaces from `finish`.
    pub fn record(&mut self, capture_time: f64, line: &str) {
        if self.failed {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}: {}", to_rfc3339(capture_time), line) {
            tracing::error!(path = %self.path.display(), error = %e, "raw line log write failed");
            self.failed = true;
            return;
        }
        self.lines += 1;
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flush and move the log into place. Consumes the log, so this happens once.
    pub fn finish(self) -> Result<PathBuf, ReportError> {
        let path = self.path;

        if self.failed {
            return Err(ReportError::io(
                &path,
                std::io::Error::other("raw line log had write failures"),
            ));
        }

        let temp = self
            .writer
            .into_inner()
            .map_err(|e| ReportError::io(&path, e.into_error()))?;
        temp.persist(&path)
            .map_err(|e| ReportError::io(&path, e.error))?;

        tracing::info!(path = %path.display(), lines = self.lines, "raw line log written");
        Ok(path)
    }
}
