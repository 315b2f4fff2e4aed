// ============================================================
// Layer 4 — Sentence Splitter
// ============================================================
// Splits a block of extracted page text into candidate
// sentences.
//
// The boundary rule is a fixed heuristic: a sentence ends at
// any `.`, `!` or `?` that is directly followed by whitespace,
// and the punctuation mark stays attached to the sentence it
// closes. There is no lookahead for abbreviations ("f.eks. ")
// or decimal numbers — the naive rule is part of the report
// format and must not be tightened, or existing reports stop
// being comparable.
//
// Example:
//   "Dette er en kontrakt. Dette er en kort test."
//   → ["Dette er en kontrakt.", "Dette er en kort test."]
//
// Reference: Rust Book §13 (Iterators and Closures)

use once_cell::sync::Lazy;
use regex::Regex;

/// A sentence-ending punctuation mark followed by whitespace.
/// The punctuation is part of the match so the iterator below
/// can keep it attached to the preceding sentence; `.`, `!`
/// and `?` are all single-byte, so `start + 1` is always a
/// valid char boundary.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary regex"));

/// Split `text` into candidate sentences.
///
/// The returned iterator is lazy and borrows from `text`;
/// calling the function again restarts from the beginning.
/// Empty input yields an empty sequence. Text after the last
/// boundary is yielded as a final sentence even without
/// closing punctuation.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut finder = SENTENCE_BOUNDARY.find_iter(text);
    let mut pos    = 0usize;
    let mut done   = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        match finder.next() {
            // Boundary found: emit up to and including the punctuation,
            // then resume after the whitespace run
            Some(boundary) => {
                let sentence = &text[pos..boundary.start() + 1];
                pos = boundary.end();
                Some(sentence)
            }
            // No more boundaries: emit the trailing remainder, if any
            None => {
                done = true;
                if pos < text.len() {
                    Some(&text[pos..])
                } else {
                    None
                }
            }
        }
    })
}
