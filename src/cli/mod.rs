// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application);
// this layer only routes and prints.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::ScanArgs;

use crate::application::scan_use_case::{ScanConfig, ScanOutcome, ScanUseCase};
use crate::infra::report_store;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-keyword-search",
    version = "0.1.0",
    about = "Search a directory of PDF files for keywords and build an HTML report."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: ScanArgs,
}

impl Cli {
    /// Hand the parsed options to the use case and print the outcome.
    pub fn run(self) -> Result<()> {
        // Convert CLI args → application config (separates presentation from domain)
        let config: ScanConfig = self.args.into();
        let open_report = config.open_report;

        let use_case = ScanUseCase::new(config);
        match use_case.execute()? {
            ScanOutcome::Completed { summary, report_path } => {
                println!();
                println!("Done.");
                println!("Files with hits: {}", summary.files_with_hits);
                println!("Total hits:      {}", summary.total_hits);
                println!("Report:          {}", report_path.display());

                if open_report {
                    report_store::open_in_viewer(&report_path);
                }
            }
            ScanOutcome::NoDocumentsFound { docs_dir } => {
                // A valid end of a run — nothing to scan, nothing written
                println!("No PDF files found.");
                println!("Put PDF files in: {}", docs_dir.display());
            }
        }

        Ok(())
    }
}
