// ============================================================
// Layer 6 — Report Store
// ============================================================
// Persists the rendered HTML report and, on request, opens it
// in the system's default viewer.
//
// Writing the artifact is the one infallible-or-fatal step of
// a run: every earlier failure is recovered somewhere, but if
// the report cannot be written there is nothing to deliver,
// so the error propagates to the top level.
//
// Opening the viewer is the opposite — pure convenience. On a
// headless machine it simply logs a warning and the run still
// counts as a success.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::traits::ReportSink;

/// Writes the report to a fixed path on disk.
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileReportSink {
    fn persist(&self, html: &str) -> Result<PathBuf> {
        std::fs::write(&self.path, html)
            .with_context(|| format!("Cannot write report '{}'", self.path.display()))?;

        tracing::info!("Report written to '{}'", self.path.display());
        Ok(self.path.clone())
    }
}

/// Best-effort: open the written report in the default viewer.
/// Never fails the run.
pub fn open_in_viewer(path: &Path) {
    if let Err(e) = open::that(path) {
        tracing::warn!("Cannot open '{}' in a viewer: {}", path.display(), e);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_writes_the_markup() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("soke_rapport.html");
        let sink = FileReportSink::new(&path);

        let written = sink.persist("<!DOCTYPE html>\n<html></html>\n").unwrap();

        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_persist_to_unwritable_path_is_an_error() {
        let sink = FileReportSink::new("no/such/dir/rapport.html");
        assert!(sink.persist("<html></html>").is_err());
    }
}
