// ============================================================
// Layer 5 — Report Layer
// ============================================================
// Turns the raw scan results into the deliverable:
//
//   aggregator.rs — computes summary counters and puts the
//                   documents into presentation order
//                   (descending match count, stable ties)
//
//   renderer.rs   — renders the ordered corpus as one
//                   self-contained HTML file with inline CSS
//                   and keyword highlighting
//
// Both steps are pure functions over domain values: no I/O,
// no clock access (the timestamp is passed in), so the whole
// layer is testable with plain asserts.

/// Summary statistics and presentation ordering
pub mod aggregator;

/// HTML rendering with keyword highlighting
pub mod renderer;
