// ============================================================
// Layer 3 — Scan Result Domain Types
// ============================================================
// Plain data structs describing the outcome of one run:
//
//   KeywordHits     — one keyword and its matched sentences
//   DocumentResult  — all hits for one PDF file
//   ScanSummary     — corpus-wide counters
//   Corpus          — every DocumentResult plus the keyword list
//
// A DocumentResult is created empty when scanning of a file
// begins, is filled in page by page, and is never mutated
// again once the scan of that file has finished. The Corpus
// is built once per run and reordered exactly once, by the
// aggregator.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// One keyword together with every sentence that matched it.
///
/// Sentences are stored in discovery order: page order first,
/// then occurrence order within a page. The hit lists of a
/// DocumentResult are kept as a Vec — not a map — so the order
/// of the configured keyword list is preserved, and duplicate
/// keywords each keep their own slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordHits {
    /// The lowercased keyword as it appears in the keyword file
    pub keyword: String,

    /// Matched sentences, whitespace-normalized
    pub sentences: Vec<String>,
}

/// The full scan outcome for a single PDF file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    /// The file name — kept for traceability so the report
    /// can say which file a sentence came from
    pub source: String,

    /// One entry per configured keyword, in keyword-list order
    pub hits: Vec<KeywordHits>,

    /// Total number of matched sentences across all keywords.
    /// Invariant: equals the sum of hits[i].sentences.len()
    pub total: usize,

    /// Set when the file could not be read or decoded.
    /// A failed document still produces a valid, empty result
    /// so the rest of the run is unaffected.
    pub error: Option<String>,
}

impl DocumentResult {
    /// Create an empty result with one hit slot per keyword.
    /// Pre-allocating the slots keeps section order equal to
    /// keyword-list order even when a keyword only matches on
    /// a later page — or never matches at all.
    pub fn new(source: impl Into<String>, keywords: &[String]) -> Self {
        Self {
            source: source.into(),
            hits:   keywords
                .iter()
                .map(|k| KeywordHits { keyword: k.clone(), sentences: Vec::new() })
                .collect(),
            total:  0,
            error:  None,
        }
    }

    /// Create a result recording a soft per-document failure.
    /// The document contributes zero matches but stays in the
    /// corpus so the summary counts every discovered file.
    pub fn failed(source: impl Into<String>, keywords: &[String], reason: impl Into<String>) -> Self {
        let mut result = Self::new(source, keywords);
        result.error = Some(reason.into());
        result
    }

    /// Append one matched sentence to the keyword slot at `index`.
    /// `index` is the position in the configured keyword list.
    pub fn push_sentence(&mut self, index: usize, sentence: String) {
        self.hits[index].sentences.push(sentence);
        self.total += 1;
    }

    /// True if at least one sentence matched in this document
    pub fn has_matches(&self) -> bool {
        self.total > 0
    }
}

/// Corpus-wide counters shown in the report summary block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of documents with at least one match
    pub files_with_hits: usize,

    /// Sum of the totals of every document
    pub total_hits: usize,
}

/// Everything one run produced: the per-document results in
/// presentation order, the keyword list that was searched for,
/// and the summary counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    pub documents: Vec<DocumentResult>,
    pub keywords:  Vec<String>,
    pub summary:   ScanSummary,
}
