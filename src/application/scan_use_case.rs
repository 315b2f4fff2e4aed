// ============================================================
// Layer 2 — Scan Use Case
// ============================================================
// Orchestrates the full run in order:
//
//   Step 1: Load (or create) the keyword list  (Layer 6 - infra)
//   Step 2: Discover PDF files                 (Layer 4 - data)
//   Step 3: Scan every document                (Layer 4 - data)
//   Step 4: Aggregate results                  (Layer 5 - report)
//   Step 5: Render the HTML report             (Layer 5 - report)
//   Step 6: Persist the artifact               (Layer 6 - infra)
//
// An empty document list short-circuits after Step 2 with the
// distinct NoDocumentsFound outcome — that is a valid end of a
// run, not an error, and no report is written for it.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{discovery::find_documents, extractor::PdfTextSource, scanner::DocumentScanner};
use crate::domain::result::ScanSummary;
use crate::domain::traits::{PageTextSource, ReportSink};
use crate::infra::{keyword_store::KeywordStore, report_store::FileReportSink};
use crate::report::{aggregator::aggregate, renderer::render};

// ─── Scan Configuration ───────────────────────────────────────────────────────
// Everything one run needs. The keyword list and exclusion text
// act as process-wide read-only configuration, but they are
// passed down explicitly — nothing in the pipeline reads
// globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory searched (non-recursively) for .pdf files
    pub docs_dir:      String,

    /// One-keyword-per-line text file; created on first run
    pub keywords_file: String,

    /// Where the HTML report is written
    pub report_file:   String,

    /// Pages containing this text are skipped entirely.
    /// None (or empty) disables the filter.
    pub exclusion:     Option<String>,

    /// Open the report in the system viewer after writing it
    pub open_report:   bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            docs_dir:      ".".to_string(),
            keywords_file: "nokkelord.txt".to_string(),
            report_file:   "soke_rapport.html".to_string(),
            exclusion:     None,
            open_report:   false,
        }
    }
}

// ─── Scan Outcome ─────────────────────────────────────────────────────────────
/// How a run ended. Both variants are successes; the caller
/// decides what to print for each.
#[derive(Debug)]
pub enum ScanOutcome {
    /// Documents were scanned and the report was written
    Completed {
        summary:     ScanSummary,
        report_path: PathBuf,
    },

    /// Discovery found nothing to scan; no report was produced
    NoDocumentsFound {
        docs_dir: PathBuf,
    },
}

// ─── ScanUseCase ──────────────────────────────────────────────────────────────
// Owns the config and runs the pipeline end to end.
pub struct ScanUseCase {
    config: ScanConfig,
}

impl ScanUseCase {
    /// Create a new ScanUseCase with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline with the production collaborators:
    /// lopdf for text extraction, a plain file for the report.
    pub fn execute(&self) -> Result<ScanOutcome> {
        let sink = FileReportSink::new(&self.config.report_file);
        self.execute_with(&PdfTextSource, &sink)
    }

    /// Run the pipeline against explicit collaborators.
    /// The unit tests inject canned text sources and capturing
    /// sinks here; `execute` is just this with the real ones.
    pub fn execute_with(
        &self,
        text_source: &dyn PageTextSource,
        sink:        &dyn ReportSink,
    ) -> Result<ScanOutcome> {
        let cfg = &self.config;

        // ── Step 1: Load (or create) the keyword list ─────────────────────────
        let keywords = KeywordStore::new(&cfg.keywords_file).load_or_create()?;
        println!("Searching for: {}", keywords.join(", "));

        // ── Step 2: Discover PDF files ────────────────────────────────────────
        let docs_dir  = Path::new(&cfg.docs_dir);
        let documents = find_documents(docs_dir)?;
        if documents.is_empty() {
            return Ok(ScanOutcome::NoDocumentsFound { docs_dir: docs_dir.to_path_buf() });
        }

        // ── Step 3: Scan every document, in order ─────────────────────────────
        // One bad file never stops the loop: the scanner records
        // the failure in that document's result and we move on.
        let scanner     = DocumentScanner::new(&keywords, cfg.exclusion.as_deref());
        let mut results = Vec::with_capacity(documents.len());

        for (index, path) in documents.iter().enumerate() {
            let result = scanner.scan_document(path, text_source);

            let status = match (&result.error, result.total) {
                (Some(_), _) => "FAILED (see log)".to_string(),
                (None, 0)    => "no hits".to_string(),
                (None, n)    => format!("OK ({n} hits)"),
            };
            println!("[{}/{}] {} ... {}", index + 1, documents.len(), result.source, status);

            results.push(result);
        }

        // ── Step 4: Aggregate into the corpus ─────────────────────────────────
        let corpus = aggregate(results, keywords);
        tracing::info!(
            "Scan finished: {} of {} files with hits, {} hits total",
            corpus.summary.files_with_hits,
            corpus.documents.len(),
            corpus.summary.total_hits
        );

        // ── Step 5: Render the report ─────────────────────────────────────────
        let generated_at = Local::now().format("%d.%m.%Y kl. %H:%M").to_string();
        let html         = render(&corpus, &generated_at);

        // ── Step 6: Persist the artifact ──────────────────────────────────────
        // The report is the deliverable — a failure here fails the run
        let report_path = sink.persist(&html)?;

        Ok(ScanOutcome::Completed { summary: corpus.summary, report_path })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::fs;

    /// Returns canned page text keyed on the file name, and
    /// fails for files marked as broken.
    struct CannedTextSource;

    impl PageTextSource for CannedTextSource {
        fn page_texts(&self, path: &Path) -> Result<Vec<String>> {
            let name = path.file_name().unwrap().to_string_lossy();
            match name.as_ref() {
                "treff.pdf" => Ok(vec![
                    "Dette er en kontrakt mellom to parter.".to_string(),
                ]),
                "tom.pdf"    => Ok(vec!["Ingenting aa finne her i det hele tatt.".to_string()]),
                "broken.pdf" => Err(anyhow!("not a PDF")),
                other        => panic!("unexpected document {other}"),
            }
        }
    }

    /// Captures the rendered markup instead of touching disk.
    struct CapturingSink {
        html: RefCell<Option<String>>,
    }

    impl CapturingSink {
        fn new() -> Self {
            Self { html: RefCell::new(None) }
        }
    }

    impl ReportSink for CapturingSink {
        fn persist(&self, html: &str) -> Result<PathBuf> {
            *self.html.borrow_mut() = Some(html.to_string());
            Ok(PathBuf::from("captured.html"))
        }
    }

    /// Config pointing every path into a temp directory
    fn config_in(dir: &Path) -> ScanConfig {
        ScanConfig {
            docs_dir:      dir.to_string_lossy().into_owned(),
            keywords_file: dir.join("nokkelord.txt").to_string_lossy().into_owned(),
            report_file:   dir.join("soke_rapport.html").to_string_lossy().into_owned(),
            exclusion:     None,
            open_report:   false,
        }
    }

    #[test]
    fn test_full_run_scans_renders_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("treff.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("tom.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("nokkelord.txt"), "kontrakt\n").unwrap();

        let sink    = CapturingSink::new();
        let outcome = ScanUseCase::new(config_in(dir.path()))
            .execute_with(&CannedTextSource, &sink)
            .unwrap();

        match outcome {
            ScanOutcome::Completed { summary, .. } => {
                assert_eq!(summary.files_with_hits, 1);
                assert_eq!(summary.total_hits, 1);
            }
            other => panic!("expected Completed, got {other:?}"),
        }

        let html = sink.html.borrow().clone().unwrap();
        assert!(html.contains("treff.pdf (1 treff)"));
        assert!(!html.contains("tom.pdf"));
    }

    #[test]
    fn test_broken_document_does_not_abort_the_run() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.pdf"), b"junk").unwrap();
        fs::write(dir.path().join("treff.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("nokkelord.txt"), "kontrakt\n").unwrap();

        let sink    = CapturingSink::new();
        let outcome = ScanUseCase::new(config_in(dir.path()))
            .execute_with(&CannedTextSource, &sink)
            .unwrap();

        // The good document is still scanned and reported
        match outcome {
            ScanOutcome::Completed { summary, .. } => assert_eq!(summary.total_hits, 1),
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_directory_is_no_documents_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nokkelord.txt"), "kontrakt\n").unwrap();

        let sink    = CapturingSink::new();
        let outcome = ScanUseCase::new(config_in(dir.path()))
            .execute_with(&CannedTextSource, &sink)
            .unwrap();

        assert!(matches!(outcome, ScanOutcome::NoDocumentsFound { .. }));
        // No report is produced for an empty corpus
        assert!(sink.html.borrow().is_none());
    }

    #[test]
    fn test_missing_keyword_file_is_created_and_used() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("treff.pdf"), b"%PDF").unwrap();

        let sink = CapturingSink::new();
        let cfg  = config_in(dir.path());
        ScanUseCase::new(cfg.clone())
            .execute_with(&CannedTextSource, &sink)
            .unwrap();

        // The starter file was materialized with the two defaults
        let content = fs::read_to_string(&cfg.keywords_file).unwrap();
        assert!(content.contains("kontrakt"));
        assert!(content.contains("avtale"));

        // And the run searched with them
        let html = sink.html.borrow().clone().unwrap();
        assert!(html.contains("Sokte etter:</strong> kontrakt, avtale"));
    }

    #[test]
    fn test_exclusion_from_config_reaches_the_scanner() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("treff.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("nokkelord.txt"), "kontrakt\n").unwrap();

        let sink = CapturingSink::new();
        let cfg  = ScanConfig {
            exclusion: Some("mellom to parter".to_string()),
            ..config_in(dir.path())
        };
        let outcome = ScanUseCase::new(cfg)
            .execute_with(&CannedTextSource, &sink)
            .unwrap();

        // The only page of treff.pdf contains the excluded phrase
        match outcome {
            ScanOutcome::Completed { summary, .. } => assert_eq!(summary.total_hits, 0),
            other => panic!("expected Completed, got {other:?}"),
        }
    }
}
