// ============================================================
// Layer 4 — Document Scanner
// ============================================================
// Applies the keyword matchers to every page of one document
// and collects the matching sentences into a DocumentResult.
//
// Per page, in order:
//   1. If an exclusion text is configured and occurs anywhere
//      in the page (case-insensitive substring), the whole
//      page is skipped — it contributes zero matches for
//      every keyword.
//   2. Otherwise the page is split into sentences, and each
//      keyword (in keyword-list order) collects the sentences
//      it matches.
//   3. Collected sentences are whitespace-normalized; anything
//      of 20 characters or fewer after normalization is
//      dropped as noise (page numbers, column headers).
//
// Failures while reading a document are caught at the document
// boundary: the file gets an empty result with the reason
// recorded, and the scan moves on to the next file.
//
// The keyword list and exclusion text are fixed for the whole
// run, so the scanner compiles its matchers once and is passed
// around as read-only configuration.

use std::path::Path;

use crate::data::matcher::KeywordMatcher;
use crate::data::sentences::split_sentences;
use crate::domain::result::DocumentResult;
use crate::domain::traits::PageTextSource;

/// Normalized sentences must be longer than this to count as a match
const MIN_SENTENCE_LEN: usize = 20;

/// Scans documents for a fixed keyword list.
pub struct DocumentScanner {
    /// The configured keywords, in file order
    keywords: Vec<String>,

    /// One compiled matcher per keyword, same order as `keywords`
    matchers: Vec<KeywordMatcher>,

    /// Lowercased exclusion text; None when the filter is disabled
    exclusion: Option<String>,
}

impl DocumentScanner {
    /// Build a scanner for `keywords` with an optional exclusion text.
    /// An empty exclusion string counts as disabled.
    pub fn new(keywords: &[String], exclusion: Option<&str>) -> Self {
        Self {
            keywords:  keywords.to_vec(),
            matchers:  keywords.iter().map(|k| KeywordMatcher::new(k)).collect(),
            exclusion: exclusion
                .filter(|text| !text.is_empty())
                .map(|text| text.to_lowercase()),
        }
    }

    /// Scan one document through the text-extraction collaborator.
    ///
    /// Any failure opening or decoding the file is converted into
    /// a soft per-document error so the corpus scan never aborts.
    /// The collaborator's file handle lives only for the duration
    /// of the `page_texts` call.
    pub fn scan_document(&self, path: &Path, source: &dyn PageTextSource) -> DocumentResult {
        let name = display_name(path);

        match source.page_texts(path) {
            Ok(pages) => self.scan_pages(&name, &pages),
            Err(e) => {
                tracing::warn!("Cannot read '{}': {:#}", path.display(), e);
                DocumentResult::failed(name, &self.keywords, format!("{e:#}"))
            }
        }
    }

    /// Scan already-extracted page texts into a DocumentResult.
    pub fn scan_pages(&self, name: &str, pages: &[String]) -> DocumentResult {
        let mut result = DocumentResult::new(name, &self.keywords);

        for page in pages {
            if self.page_is_excluded(page) {
                tracing::debug!("Skipping one page of '{}': exclusion text present", name);
                continue;
            }

            // Collect so the sentence sequence can be replayed per keyword
            let sentences: Vec<&str> = split_sentences(page).collect();

            for (index, matcher) in self.matchers.iter().enumerate() {
                for sentence in &sentences {
                    if !matcher.is_match(sentence) {
                        continue;
                    }
                    let normalized = normalize_whitespace(sentence);
                    // Length is counted in characters, not bytes, so
                    // "å" and "ø" each count once
                    if normalized.chars().count() > MIN_SENTENCE_LEN {
                        result.push_sentence(index, normalized);
                    }
                }
            }
        }

        result
    }

    /// True when the exclusion filter is enabled and its text occurs
    /// anywhere in the page. Substring, not whole-word — one mention
    /// of the excluded phrase disqualifies the entire page.
    fn page_is_excluded(&self, page: &str) -> bool {
        match &self.exclusion {
            Some(needle) => page.to_lowercase().contains(needle),
            None => false,
        }
    }
}

/// Collapse every internal whitespace run to a single space and
/// trim the ends. Extracted PDF text is full of layout artefacts
/// (line breaks mid-sentence, double spaces after columns).
fn normalize_whitespace(sentence: &str) -> String {
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// File name for display and report headings; falls back to the
/// full path when there is no final component.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
