// PyO3 Bindings Module
//
// Python bindings for the reducer and the project exporter.

mod api;
mod run_summary;

// Re-export for lib.rs
pub use api::{detect_language, export_project, reduce_source, sanitize, supported_languages};
pub use run_summary::PyRunSummary;
