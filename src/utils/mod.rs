// src/utils/mod.rs
// ============================================================================
// ENGINE UTILITIES
// ============================================================================
// Cross-cutting helpers: logging initialization and presentation-boundary
// formatting. Nothing in here participates in the calculation path.
// ============================================================================

pub mod format;
pub mod logging;
