// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// All command line options of the tool. There is exactly one
// workflow (scan and report), so this is a flat option set
// rather than subcommands.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → bool, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use crate::application::scan_use_case::ScanConfig;

/// All arguments for a scan run.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory containing the PDF files to search
    #[arg(long, default_value = ".")]
    pub docs_dir: String,

    /// Text file with one search keyword per line;
    /// created with starter content if it does not exist
    #[arg(long, default_value = "nokkelord.txt")]
    pub keywords_file: String,

    /// Where to write the HTML report
    #[arg(long, default_value = "soke_rapport.html")]
    pub report_file: String,

    /// Skip any page whose text contains this phrase
    /// (case-insensitive); omit to disable the filter
    #[arg(long)]
    pub exclude: Option<String>,

    /// Open the finished report in the system viewer
    #[arg(long)]
    pub open: bool,
}

/// Convert CLI ScanArgs into the application-layer ScanConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ScanArgs> for ScanConfig {
    fn from(a: ScanArgs) -> Self {
        ScanConfig {
            docs_dir:      a.docs_dir,
            keywords_file: a.keywords_file,
            report_file:   a.report_file,
            exclusion:     a.exclude,
            open_report:   a.open,
        }
    }
}
