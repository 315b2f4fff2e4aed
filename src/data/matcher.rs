// ============================================================
// Layer 4 — Keyword Matcher
// ============================================================
// Whole-word, case-insensitive matching of one keyword, plus
// the highlighting transform used by the report.
//
// The keyword is user data, not a pattern: every regex
// metacharacter in it is escaped before the pattern is built,
// so searching for "a.s" matches the literal text "a.s" and
// nothing else. Word boundaries (\b) on both sides keep
// "avtale" from matching inside "avtalebrudd".
//
// One matcher is compiled per keyword and reused across every
// sentence and page of the run.
//
// Reference: regex crate documentation (RegexBuilder, escape)

use regex::{Regex, RegexBuilder};

/// Compiled whole-word matcher for a single keyword.
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    /// Compile the matcher for `keyword`.
    /// The pattern is `\b<escaped keyword>\b`, case-insensitive.
    pub fn new(keyword: &str) -> Self {
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
            .case_insensitive(true)
            .build()
            .expect("escaped keyword is always a valid pattern");
        Self { pattern }
    }

    /// True iff the keyword occurs in `sentence` as a whole word
    pub fn is_match(&self, sentence: &str) -> bool {
        self.pattern.is_match(sentence)
    }

    /// Return `sentence` with every whole-word occurrence of the
    /// keyword wrapped in the report's highlight marker.
    ///
    /// The original casing of the matched text is preserved —
    /// "Kontrakt" stays "Kontrakt" inside the marker. A sentence
    /// with several occurrences gets several markers. This is a
    /// pure transform: the input is never mutated.
    pub fn highlight(&self, sentence: &str) -> String {
        self.pattern
            .replace_all(sentence, |caps: &regex::Captures| {
                format!("<span class=\"highlight\">{}</span>", &caps[0])
            })
            .into_owned()
    }
}
