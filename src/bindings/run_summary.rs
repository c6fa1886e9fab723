// PyRunSummary - PyO3 view of a project export run
//
// Plain strings and counts only; FileError values are rendered to messages
// because io::Error cannot cross into Python as-is.

use crate::project::RunReport;
use pyo3::prelude::*;

/// Python-accessible summary of an export run
#[pyclass(name = "RunSummary")]
pub struct PyRunSummary {
    #[pyo3(get)]
    pub files_processed: usize,

    #[pyo3(get)]
    pub files_skipped: usize,

    /// Artifact paths written, in walk order
    #[pyo3(get)]
    pub artifacts: Vec<String>,

    /// Sources without a top-level declaration
    #[pyo3(get)]
    pub undeclared: Vec<String>,

    /// One message per failed file
    #[pyo3(get)]
    pub failures: Vec<String>,
}

impl PyRunSummary {
    pub fn from_report(report: &RunReport) -> Self {
        PyRunSummary {
            files_processed: report.files_processed,
            files_skipped: report.files_skipped,
            artifacts: report
                .artifacts
                .iter()
                .map(|a| a.path.display().to_string())
                .collect(),
            undeclared: report
                .undeclared
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            failures: report.failures.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[pymethods]
impl PyRunSummary {
    #[getter]
    fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn __repr__(&self) -> String {
        format!(
            "RunSummary(processed={}, artifacts={}, undeclared={}, failures={})",
            self.files_processed,
            self.artifacts.len(),
            self.undeclared.len(),
            self.failures.len()
        )
    }
}
