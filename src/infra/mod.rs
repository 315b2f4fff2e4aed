// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the run's persistence concerns:
//
//   keyword_store.rs — the keyword file. Loads and filters the
//                      one-keyword-per-line list; creates the
//                      file with starter content on first run
//                      so a missing file is never an error.
//
//   report_store.rs  — the report artifact. Writes the rendered
//                      HTML to disk (a failure here is fatal —
//                      the report is the deliverable) and can
//                      open it in the system viewer.
//
// Both are kept out of the data layer: they deal with where
// configuration and output live on this machine, not with the
// documents being searched.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Keyword file loading and first-run creation
pub mod keyword_store;

/// Report artifact writing and viewer launch
pub mod report_store;
