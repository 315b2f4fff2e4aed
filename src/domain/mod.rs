// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the system.
//
// Rules for this layer:
//   - NO PDF parsing or regex machinery here
//   - NO file I/O
//   - Only plain structs, enums, and traits
//
// Everything the report shows is a value defined here; the
// other layers only produce and consume these types.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Scan results: per-keyword hits, per-document results, corpus
pub mod result;

// Core abstractions (traits) that other layers implement
pub mod traits;
