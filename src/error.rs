//! Error taxonomy
//!
//! [`ExportError`] ends a run. [`FileError`] is scoped to one source file: it is
//! logged and recorded in the run report, and the walk moves on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::language::LanguageError;

/// Fatal errors; the run stops and the caller sees them
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to walk project directory {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Project root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error("Invalid exclude pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Failed to read ignore file {}: {source}", .path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Why a source could not be turned into a reduced tree
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error("parser produced no tree")]
    NoTree,

    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

/// Per-file failures; never abort the run
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },

    #[error("{} is not inside project root {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Failed to serialize tree for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create output directory {}: {source}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// True for failures that happen after a declaration was located
    pub fn is_save_error(&self) -> bool {
        matches!(
            self,
            FileError::OutsideRoot { .. }
                | FileError::Serialize { .. }
                | FileError::CreateDir { .. }
                | FileError::Write { .. }
        )
    }
}
