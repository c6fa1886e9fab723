// Nexus Core - tree-sitter syntax trees exported as generic JSON
//
// Source files are parsed with tree-sitter, reduced to a parser-independent
// { type, value, children } tree, and written one artifact per top-level
// declaration under a directory layout that mirrors the project.

pub mod error;
pub mod language;
pub mod logging;
pub mod project;
pub mod syntax;
pub mod utils;

// PyO3 bindings layer (`--features python`)
#[cfg(feature = "python")]
pub mod bindings;

pub use error::{ExportError, FileError, ParseFailure};
pub use language::{LanguageError, LanguageProfile};
pub use project::{run, ExportConfig, RunReport};
pub use syntax::{locate_declaration, parse_source, sanitize_value, ParseOptions, SyntaxNode};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Nexus Core Python module
///
/// Exposes the reducer and the project exporter for Python tooling.
#[cfg(feature = "python")]
#[pymodule]
fn nexus_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(bindings::sanitize, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::reduce_source, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::supported_languages, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::export_project, m)?)?;

    m.add_class::<bindings::PyRunSummary>()?;

    Ok(())
}
