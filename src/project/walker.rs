//! Project walker
//!
//! Depth-first, file-name-sorted enumeration of the sources a run will process.
//! Only a failure to open the root itself is fatal; unreadable entries further
//! down are logged and skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::report::RunReport;
use crate::error::ExportError;
use crate::language::LanguageProfile;
use crate::utils::ignore::ExcludeSet;
use crate::utils::paths::display_relative;

pub struct SourceWalker<'a> {
    root: &'a Path,
    profile: &'a LanguageProfile,
    excludes: &'a ExcludeSet,
}

impl<'a> SourceWalker<'a> {
    pub fn new(root: &'a Path, profile: &'a LanguageProfile, excludes: &'a ExcludeSet) -> Self {
        Self {
            root,
            profile,
            excludes,
        }
    }

    /// Collect eligible source files in walk order
    ///
    /// Skipped regular files are counted on `report`.
    pub fn collect(&self, report: &mut RunReport) -> Result<Vec<PathBuf>, ExportError> {
        let metadata = fs::metadata(self.root).map_err(|source| ExportError::Walk {
            root: self.root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ExportError::NotADirectory(self.root.to_path_buf()));
        }

        let mut sources = Vec::new();
        let walker = WalkDir::new(self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(ExportError::Walk {
                        root: self.root.to_path_buf(),
                        source: io::Error::from(err),
                    });
                }
                Err(err) => {
                    warn!("Error accessing {}: {}", self.describe(err.path()), err);
                    continue;
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }

            if !self.is_eligible(entry.path()) {
                report.skip();
                continue;
            }

            sources.push(entry.into_path());
        }

        debug!(
            "Found {} {} sources under {}",
            sources.len(),
            self.profile.name,
            self.root.display()
        );
        Ok(sources)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() || self.excludes.is_empty() {
            return false;
        }
        let excluded = self.excludes.is_excluded(self.relative(entry.path()));
        if excluded {
            debug!("Excluding directory {}", self.describe(Some(entry.path())));
        }
        excluded
    }

    fn is_eligible(&self, path: &Path) -> bool {
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.profile.handles_extension(ext));

        matches_extension && !self.excludes.is_excluded(self.relative(path))
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(self.root).unwrap_or(path)
    }

    fn describe(&self, path: Option<&Path>) -> String {
        match path {
            Some(path) => display_relative(path, self.root),
            None => self.root.display().to_string(),
        }
    }
}

/// Regular files, and symlinks that resolve to one
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
