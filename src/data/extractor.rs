// ============================================================
// Layer 4 — PDF Text Extraction
// ============================================================
// The production PageTextSource: parses a PDF with lopdf and
// returns one text string per page.
//
// How the extraction works:
//   lopdf parses the PDF object tree; get_pages() maps the
//   1-based page number to the page object, and extract_text()
//   decodes the content streams of the requested pages into
//   plain text. Text quality depends on the PDF's fonts and
//   encodings — scanned (image-only) pages come back empty,
//   which simply means no sentences to match on that page.
//
// Errors (file missing, encrypted, malformed xref, undecodable
// content stream) are returned to the caller, which treats
// them as a soft per-document failure. The lopdf Document is
// dropped when this function returns, before the next file is
// opened.
//
// Reference: lopdf crate documentation

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::traits::PageTextSource;

/// Extracts per-page text from PDF files with lopdf.
pub struct PdfTextSource;

impl PageTextSource for PdfTextSource {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>> {
        let document = lopdf::Document::load(path)
            .with_context(|| format!("Cannot open PDF '{}'", path.display()))?;

        let mut pages = Vec::new();

        // get_pages() is a BTreeMap, so iteration is in page order
        for page_number in document.get_pages().keys() {
            let text = document
                .extract_text(&[*page_number])
                .with_context(|| {
                    format!("Cannot extract text from page {page_number} of '{}'", path.display())
                })?;
            pages.push(text);
        }

        tracing::debug!("Extracted {} pages from '{}'", pages.len(), path.display());
        Ok(pages)
    }
}
