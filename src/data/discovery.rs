// ============================================================
// Layer 4 — Document Discovery
// ============================================================
// Lists the PDF files the scan will run over.
//
// Only the top level of the directory is searched (no
// recursion), matching files are recognized by their `.pdf`
// extension regardless of case, and the result is sorted by
// file name so every run scans — and therefore reports —
// documents in the same order.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

/// Return the PDF files directly inside `dir`, sorted by name.
///
/// A missing directory returns an empty list rather than an
/// error; the caller reports "no documents found" either way.
pub fn find_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        tracing::warn!("Docs directory '{}' does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
    {
        let entry = entry?;
        let path  = entry.path();

        if path.is_file() && has_pdf_extension(&path) {
            documents.push(path);
        }
    }

    // Directory iteration order is filesystem-dependent; sort for
    // reproducible scan order
    documents.sort();

    tracing::info!("Found {} PDF files in '{}'", documents.len(), dir.display());
    Ok(documents)
}

/// True for `.pdf` in any casing (`.PDF`, `.Pdf`, ...)
fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
}
