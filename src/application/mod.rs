// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one goal: scan a directory of PDFs and deliver the report.
//
// Rules for this layer:
//   - No parsing, matching, or rendering logic here
//   - No direct file access beyond what infra exposes
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The scan-and-report workflow
pub mod scan_use_case;
