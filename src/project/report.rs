//! Run report
//!
//! What happened to every eligible file in a run. Log lines say the same thing
//! for humans; the report is what callers and tests inspect.

use std::path::PathBuf;

use crate::error::FileError;

/// One artifact written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub source: PathBuf,
    pub name: String,
    pub path: PathBuf,
}

/// Result of processing one eligible file
#[derive(Debug)]
pub enum FileOutcome {
    Emitted(Artifact),
    /// Parsed fine but has no top-level named declaration
    NoDeclaration,
    Failed(FileError),
}

#[derive(Debug, Default)]
pub struct RunReport {
    /// Files with the target extension that went through the pipeline
    pub files_processed: usize,
    /// Regular files skipped for their extension or an exclude pattern
    pub files_skipped: usize,
    pub artifacts: Vec<Artifact>,
    pub undeclared: Vec<PathBuf>,
    pub failures: Vec<FileError>,
}

impl RunReport {
    pub fn record(&mut self, source: PathBuf, outcome: FileOutcome) {
        self.files_processed += 1;
        match outcome {
            FileOutcome::Emitted(artifact) => self.artifacts.push(artifact),
            FileOutcome::NoDeclaration => self.undeclared.push(source),
            FileOutcome::Failed(error) => self.failures.push(error),
        }
    }

    pub fn skip(&mut self) {
        self.files_skipped += 1;
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures that happened after a declaration was located
    pub fn save_failures(&self) -> usize {
        self.failures.iter().filter(|err| err.is_save_error()).count()
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        format!(
            "{} files processed, {} artifacts written, {} without declaration, {} failed ({} while saving), {} skipped",
            self.files_processed,
            self.artifacts.len(),
            self.undeclared.len(),
            self.failures.len(),
            self.save_failures(),
            self.files_skipped
        )
    }
}
