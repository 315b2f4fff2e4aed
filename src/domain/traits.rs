// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two collaborator seams of the system:
//
//   PageTextSource — turns a document path into per-page text
//   ReportSink     — persists the rendered report artifact
//
// The scan pipeline only ever talks to these traits, so the
// concrete PDF parser and the concrete file writer can be
// swapped without touching the engine. The unit tests use
// in-memory implementations for exactly that reason.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;
use std::path::{Path, PathBuf};

// ─── PageTextSource ───────────────────────────────────────────────────────────
/// Any component that can extract the raw text of a document,
/// one string per page.
///
/// Implementations:
///   - PdfTextSource → parses PDF files with lopdf
///   - test stubs    → return canned page text
///
/// A failure here is a per-document condition: the caller
/// records it and moves on to the next file. Implementations
/// must release any file handle before returning, so one
/// corrupt document cannot leak resources into the next.
pub trait PageTextSource {
    /// Return the text of every page of the document, in page order
    fn page_texts(&self, path: &Path) -> Result<Vec<String>>;
}

// ─── ReportSink ───────────────────────────────────────────────────────────────
/// Any component that can persist the rendered report.
///
/// Implementations:
///   - FileReportSink → writes the HTML artifact to disk
///
/// Unlike document reads, a failure here is fatal for the run:
/// the report is the sole deliverable.
pub trait ReportSink {
    /// Persist the rendered markup and return where it ended up
    fn persist(&self, html: &str) -> Result<PathBuf>;
}
