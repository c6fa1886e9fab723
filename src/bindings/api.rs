// API Functions - PyO3-exposed functions for Python
//
// Thin wrappers over the Rust API; errors surface as ValueError.

use super::PyRunSummary;
use crate::language::{self, detect_language_from_extension};
use crate::project::{self, ExportConfig};
use crate::syntax::{parse_source, sanitize_value, ParseOptions};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::Path;

/// Normalize text the way node values are normalized
///
/// Args:
///     raw (str): Any text
///
/// Returns:
///     str: Single-line text with whitespace runs collapsed
#[pyfunction]
pub fn sanitize(raw: &str) -> String {
    sanitize_value(raw)
}

/// Reduce source code to the generic syntax tree
///
/// Args:
///     content (str): Source code
///     language (str): Language name (e.g., "java", "python")
///     allow_syntax_errors (bool): Reduce trees with ERROR nodes instead of failing
///
/// Returns:
///     str: The tree as pretty-printed JSON
///
/// Raises:
///     ValueError: If the language is unsupported or the source does not parse
#[pyfunction]
#[pyo3(signature = (content, language, allow_syntax_errors=false))]
pub fn reduce_source(content: &str, language: &str, allow_syntax_errors: bool) -> PyResult<String> {
    let profile =
        language::profile(language).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let options = ParseOptions {
        allow_syntax_errors,
        ..ParseOptions::default()
    };

    let tree = parse_source(content.as_bytes(), profile, &options)
        .map_err(|e| PyValueError::new_err(format!("Reduction failed: {}", e)))?;

    tree.to_pretty_json()
        .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
}

/// Detect language from a file path's extension
///
/// Returns:
///     str | None: Language name, or None for files no grammar handles
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn detect_language(file_path: &str) -> Option<String> {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    detect_language_from_extension(extension).map(str::to_string)
}

/// Get list of all supported languages
#[pyfunction]
pub fn supported_languages() -> Vec<String> {
    language::supported_languages()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Export every source under a directory, one JSON artifact per declaration
///
/// Releases the GIL while the export runs.
///
/// Args:
///     directory (str): Project root
///     output_dir (str): Artifact root (default "output")
///     language (str): Language name (default "java")
///     jobs (int): Worker threads (default 1)
///
/// Returns:
///     RunSummary: What happened to each file
///
/// Raises:
///     ValueError: If the directory cannot be walked or the configuration is invalid
#[pyfunction]
#[pyo3(signature = (directory, output_dir="output", language="java", jobs=1))]
pub fn export_project(
    py: Python<'_>,
    directory: &str,
    output_dir: &str,
    language: &str,
    jobs: usize,
) -> PyResult<PyRunSummary> {
    let config = ExportConfig::new(directory)
        .with_output_dir(output_dir)
        .with_language(language)
        .with_jobs(jobs);

    let report = py
        .detach(move || project::run(&config))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PyRunSummary::from_report(&report))
}
