// ============================================================
// Layer 5 — Report Renderer
// ============================================================
// Turns an aggregated Corpus into one self-contained HTML
// document. All styling is inline CSS — the file references no
// external resource, so it can be mailed around or archived
// as a single artifact.
//
// Report structure, in order:
//   1. Header with the generation timestamp
//   2. Summary block: files with hits, total hits, keyword list
//   3. One box per document with at least one match (highest
//      totals first — the corpus is already sorted), listing
//      per keyword the match count and every matched sentence
//      with the keyword occurrences highlighted
//
// Documents and keywords without matches render no section;
// zero-match documents are still counted in the summary.
//
// The labels (and lang="no") follow the established report
// format, so new reports stay comparable with old ones.
//
// The timestamp is passed in pre-formatted rather than read
// from the clock here: rendering the same corpus with the same
// timestamp is byte-identical, which the tests rely on.

use crate::data::matcher::KeywordMatcher;
use crate::domain::result::Corpus;

/// Inline stylesheet, carried over from the established report format.
const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            margin: 20px;
            background: #f5f5f5;
        }
        .header {
            background: #2c3e50;
            color: white;
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 20px;
        }
        .stats {
            background: white;
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 20px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
        }
        .file-box {
            background: white;
            padding: 20px;
            margin-bottom: 15px;
            border-radius: 10px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
        }
        .file-name {
            font-size: 1.3em;
            font-weight: bold;
            color: #2c3e50;
            margin-bottom: 15px;
        }
        .keyword-header {
            background: #3498db;
            color: white;
            padding: 8px 15px;
            margin: 10px 0;
            border-radius: 5px;
            font-weight: bold;
        }
        .sentence {
            background: #ecf0f1;
            padding: 10px;
            margin: 5px 0;
            border-left: 4px solid #3498db;
            border-radius: 3px;
        }
        .highlight {
            background: yellow;
            padding: 2px 4px;
            font-weight: bold;
        }"#;

/// Render the complete HTML report for `corpus`.
///
/// `generated_at` is the already-formatted timestamp shown in
/// the header (the use case passes local time as
/// "dd.mm.yyyy kl. hh:mm").
pub fn render(corpus: &Corpus, generated_at: &str) -> String {
    let mut html = String::new();

    // ── Document head and header block ────────────────────────────────────────
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="no">
<head>
    <meta charset="UTF-8">
    <title>Sokerapport - PDF</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <div class="header">
        <h1>PDF Sokerapport</h1>
        <p>Generert: {}</p>
    </div>
"#,
        escape_html(generated_at)
    ));

    // ── Summary block ─────────────────────────────────────────────────────────
    html.push_str(&format!(
        r#"    <div class="stats">
        <h2>Oppsummering</h2>
        <p><strong>Filer med treff:</strong> {}</p>
        <p><strong>Totalt antall treff:</strong> {}</p>
        <p><strong>Sokte etter:</strong> {}</p>
    </div>
"#,
        corpus.summary.files_with_hits,
        corpus.summary.total_hits,
        escape_html(&corpus.keywords.join(", "))
    ));

    // ── One box per document with matches ─────────────────────────────────────
    for document in corpus.documents.iter().filter(|d| d.has_matches()) {
        html.push_str(&format!(
            r#"    <div class="file-box">
        <div class="file-name">{} ({} treff)</div>
"#,
            escape_html(&document.source),
            document.total
        ));

        for hits in document.hits.iter().filter(|h| !h.sentences.is_empty()) {
            html.push_str(&format!(
                r#"        <div class="keyword-header">{} ({} treff)</div>
"#,
                escape_html(&hits.keyword),
                hits.sentences.len()
            ));

            // Highlighting runs on the escaped text, so the markers
            // themselves are the only markup in the sentence
            let matcher = KeywordMatcher::new(&hits.keyword);
            for sentence in &hits.sentences {
                html.push_str(&format!(
                    "        <div class=\"sentence\">{}</div>\n",
                    matcher.highlight(&escape_html(sentence))
                ));
            }
        }

        html.push_str("    </div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Minimal HTML escaping for text interpolated into the report.
/// `&` must be replaced first.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregator::aggregate;
    use crate::domain::result::DocumentResult;

    const TIMESTAMP: &str = "01.01.2026 kl. 12:00";

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sample_corpus() -> Corpus {
        let kw    = keywords(&["kontrakt", "avtale"]);
        let mut a = DocumentResult::new("a.pdf", &kw);
        a.push_sentence(0, "Dette er en kontrakt mellom to parter.".to_string());
        a.push_sentence(0, "Ny kontrakt ble signert i januar i fjor.".to_string());
        let empty = DocumentResult::new("tom.pdf", &kw);
        aggregate(vec![a, empty], kw)
    }

    #[test]
    fn test_summary_block_lists_counts_and_keywords() {
        let html = render(&sample_corpus(), TIMESTAMP);
        assert!(html.contains("<strong>Filer med treff:</strong> 1"));
        assert!(html.contains("<strong>Totalt antall treff:</strong> 2"));
        assert!(html.contains("<strong>Sokte etter:</strong> kontrakt, avtale"));
        assert!(html.contains(TIMESTAMP));
    }

    #[test]
    fn test_zero_match_document_is_omitted_from_body() {
        let html = render(&sample_corpus(), TIMESTAMP);
        assert!(html.contains("a.pdf (2 treff)"));
        assert!(!html.contains("tom.pdf"));
    }

    #[test]
    fn test_zero_match_keyword_renders_no_section() {
        let html = render(&sample_corpus(), TIMESTAMP);
        assert!(html.contains("kontrakt (2 treff)"));
        // "avtale" never matched, so no keyword-header for it
        assert!(!html.contains("avtale ("));
    }

    #[test]
    fn test_sentences_are_highlighted() {
        let html = render(&sample_corpus(), TIMESTAMP);
        assert!(html.contains("<span class=\"highlight\">kontrakt</span> mellom to parter"));
    }

    #[test]
    fn test_markup_text_is_escaped() {
        let kw    = keywords(&["kontrakt"]);
        let mut d = DocumentResult::new("a<b>.pdf", &kw);
        d.push_sentence(0, "Ny kontrakt gjelder for A & B <straks>.".to_string());
        let html = render(&aggregate(vec![d], kw), TIMESTAMP);

        assert!(html.contains("a&lt;b&gt;.pdf"));
        assert!(html.contains("A &amp; B &lt;straks&gt;"));
        assert!(!html.contains("<straks>"));
    }

    #[test]
    fn test_rendering_is_deterministic_for_fixed_timestamp() {
        let corpus = sample_corpus();
        assert_eq!(render(&corpus, TIMESTAMP), render(&corpus, TIMESTAMP));
    }

    #[test]
    fn test_report_is_self_contained() {
        let html = render(&sample_corpus(), TIMESTAMP);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        // No external resources of any kind
        assert!(!html.contains("href="));
        assert!(!html.contains("src="));
    }
}
