//! Per-file pipeline: read, parse, reduce, locate, serialize, write
//!
//! Preparation (everything up to serialized bytes) is pure with respect to the
//! output tree and can run on any thread. Writing is a separate step so the
//! caller decides the order in which artifacts land on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, enabled, error, info, warn, Level};
use tree_sitter::Parser;

use super::report::{Artifact, FileOutcome};
use crate::error::FileError;
use crate::language::LanguageProfile;
use crate::syntax::{locate_all, locate_declaration, parse_source, parse_with, ParseOptions};
use crate::utils::paths::{artifact_path, display_relative, relative_dir};

/// Serialized tree waiting to be written
#[derive(Debug)]
pub struct PendingArtifact {
    pub source: PathBuf,
    pub name: String,
    pub path: PathBuf,
    pub json: String,
}

/// What preparing one file produced
#[derive(Debug)]
pub enum Prepared {
    Ready(PendingArtifact),
    NoDeclaration,
    Failed(FileError),
}

/// Shared, read-only state for preparing files of one run
pub struct Emitter<'a> {
    root: &'a Path,
    output_dir: &'a Path,
    profile: &'a LanguageProfile,
    options: ParseOptions,
}

impl<'a> Emitter<'a> {
    pub fn new(
        root: &'a Path,
        output_dir: &'a Path,
        profile: &'a LanguageProfile,
        options: ParseOptions,
    ) -> Self {
        Self {
            root,
            output_dir,
            profile,
            options,
        }
    }

    /// Run one file through the whole pipeline, logging its outcome
    pub fn process(&self, parser: Option<&mut Parser>, source: &Path) -> FileOutcome {
        commit(self.prepare(parser, source))
    }

    /// Everything short of touching the output directory
    ///
    /// Read and parse failures, and the missing-declaration case, are logged here.
    /// Without a parser a fresh one is built for this file.
    pub fn prepare(&self, parser: Option<&mut Parser>, source: &Path) -> Prepared {
        let shown = display_relative(source, self.root);

        let bytes = match fs::read(source) {
            Ok(bytes) => bytes,
            Err(err) => {
                let err = FileError::Read {
                    path: source.to_path_buf(),
                    source: err,
                };
                warn!("{}", err);
                return Prepared::Failed(err);
            }
        };

        let parsed = match parser {
            Some(parser) => parse_with(parser, &bytes, self.profile, &self.options),
            None => parse_source(&bytes, self.profile, &self.options),
        };
        let tree = match parsed {
            Ok(tree) => tree,
            Err(err) => {
                let err = FileError::Parse {
                    path: source.to_path_buf(),
                    source: err,
                };
                warn!("{}", err);
                return Prepared::Failed(err);
            }
        };

        let Some(name) = locate_declaration(&tree, self.profile) else {
            info!("No class or interface found in {}", shown);
            return Prepared::NoDeclaration;
        };

        if enabled!(Level::DEBUG) {
            let declared = locate_all(&tree, self.profile);
            debug!(
                "{} reduced to {} nodes, top-level types {:?}, artifact named after {}",
                shown,
                tree.node_count(),
                declared,
                name
            );
        }

        let Some(relative) = relative_dir(source, self.root) else {
            let err = FileError::OutsideRoot {
                path: source.to_path_buf(),
                root: self.root.to_path_buf(),
            };
            error!("{}", err);
            return Prepared::Failed(err);
        };

        let json = match tree.to_pretty_json() {
            Ok(json) => json,
            Err(err) => {
                let err = FileError::Serialize {
                    path: source.to_path_buf(),
                    source: err,
                };
                error!("{}", err);
                return Prepared::Failed(err);
            }
        };

        Prepared::Ready(PendingArtifact {
            source: source.to_path_buf(),
            name: name.to_string(),
            path: artifact_path(self.output_dir, &relative, name),
            json,
        })
    }
}

/// Write a prepared file's artifact, if it has one, and log the result
pub fn commit(prepared: Prepared) -> FileOutcome {
    match prepared {
        Prepared::Ready(pending) => match write_artifact(pending) {
            Ok(artifact) => {
                info!(
                    "Class {} saved to {}",
                    artifact.name,
                    artifact.path.display()
                );
                FileOutcome::Emitted(artifact)
            }
            Err(err) => {
                error!("{}", err);
                FileOutcome::Failed(err)
            }
        },
        Prepared::NoDeclaration => FileOutcome::NoDeclaration,
        Prepared::Failed(err) => FileOutcome::Failed(err),
    }
}

/// Write a prepared artifact, replacing any previous file at its path
///
/// The bytes go to a temp file in the target directory first and are renamed
/// into place, so a failed write never leaves a truncated artifact behind.
pub fn write_artifact(pending: PendingArtifact) -> Result<Artifact, FileError> {
    let PendingArtifact {
        source,
        name,
        path,
        json,
    } = pending;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&dir).map_err(|source| FileError::CreateDir {
        dir: dir.clone(),
        source,
    })?;

    let write_error = |source: std::io::Error| FileError::Write {
        path: path.clone(),
        source,
    };

    let mut file = NamedTempFile::new_in(&dir).map_err(write_error)?;
    file.write_all(json.as_bytes()).map_err(write_error)?;
    set_artifact_permissions(&file).map_err(write_error)?;
    file.persist(&path).map_err(|err| write_error(err.error))?;

    Ok(Artifact { source, name, path })
}

#[cfg(unix)]
fn set_artifact_permissions(file: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_artifact_permissions(_file: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}
