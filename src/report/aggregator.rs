// ============================================================
// Layer 5 — Report Aggregator
// ============================================================
// Collects the per-document results of one run into a Corpus:
// computes the summary counters and puts the documents into
// presentation order.
//
// Ordering policy: descending total match count, ties keep
// their scan order. Vec::sort_by is a stable sort, which is
// what makes the tie rule hold; combined with the sorted file
// discovery this makes the report reproducible for identical
// inputs.

use crate::domain::result::{Corpus, DocumentResult, ScanSummary};

/// Build the Corpus for one run.
///
/// Consumes the results exactly once; this is the only place
/// the document order is ever changed.
pub fn aggregate(mut documents: Vec<DocumentResult>, keywords: Vec<String>) -> Corpus {
    let summary = ScanSummary {
        files_with_hits: documents.iter().filter(|d| d.has_matches()).count(),
        total_hits:      documents.iter().map(|d| d.total).sum(),
    };

    // Stable sort: equal totals retain their relative scan order
    documents.sort_by(|a, b| b.total.cmp(&a.total));

    Corpus { documents, keywords, summary }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_total(source: &str, total: usize) -> DocumentResult {
        let keywords = vec!["kontrakt".to_string()];
        let mut doc  = DocumentResult::new(source, &keywords);
        for i in 0..total {
            doc.push_sentence(0, format!("Setning nummer {i} med ordet kontrakt i seg."));
        }
        doc
    }

    #[test]
    fn test_summary_counts_files_and_hits() {
        let corpus = aggregate(
            vec![
                doc_with_total("a.pdf", 2),
                doc_with_total("b.pdf", 0),
                doc_with_total("c.pdf", 3),
            ],
            vec!["kontrakt".to_string()],
        );

        assert_eq!(corpus.summary.files_with_hits, 2);
        assert_eq!(corpus.summary.total_hits, 5);
    }

    #[test]
    fn test_documents_sorted_by_descending_total() {
        let corpus = aggregate(
            vec![
                doc_with_total("low.pdf", 1),
                doc_with_total("high.pdf", 4),
                doc_with_total("mid.pdf", 2),
            ],
            vec!["kontrakt".to_string()],
        );

        let order: Vec<_> = corpus.documents.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(order, vec!["high.pdf", "mid.pdf", "low.pdf"]);
    }

    #[test]
    fn test_equal_totals_keep_input_order() {
        // [DocB, DocA] with equal totals must stay [DocB, DocA]
        let corpus = aggregate(
            vec![
                doc_with_total("doc_b.pdf", 5),
                doc_with_total("doc_a.pdf", 5),
            ],
            vec!["kontrakt".to_string()],
        );

        let order: Vec<_> = corpus.documents.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(order, vec!["doc_b.pdf", "doc_a.pdf"]);
    }

    #[test]
    fn test_empty_input_gives_empty_corpus() {
        let corpus = aggregate(Vec::new(), vec!["kontrakt".to_string()]);
        assert!(corpus.documents.is_empty());
        assert_eq!(corpus.summary.files_with_hits, 0);
        assert_eq!(corpus.summary.total_hits, 0);
    }
}
