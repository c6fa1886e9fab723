//! Project export
//!
//! Walks a project root and writes one JSON artifact per source file that has a
//! top-level declaration, mirroring the source directory layout under the output
//! root. Per-file failures are logged and recorded in the [`RunReport`]; only a
//! walk that cannot start ends the run with an error.

pub mod config;
pub mod emitter;
pub mod report;
pub mod walker;

pub use config::{ExportConfig, DEFAULT_OUTPUT_DIR};
pub use emitter::{commit, write_artifact, Emitter, PendingArtifact, Prepared};
pub use report::{Artifact, FileOutcome, RunReport};
pub use walker::SourceWalker;

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::info;

use crate::error::ExportError;
use crate::language::{self, LanguageProfile};
use crate::utils::ignore::{load_nexusignore, ExcludeSet, IGNORE_FILE_NAME};

/// Files prepared per worker before the batch is written out
const FILES_PER_WORKER: usize = 16;

/// Export every eligible file under `config.root`
pub fn run(config: &ExportConfig) -> Result<RunReport, ExportError> {
    let profile = language::profile(&config.language)?;
    // Fail on a broken grammar before walking anything
    profile.parser()?;

    let excludes = build_excludes(config)?;
    let mut report = RunReport::default();
    let sources = SourceWalker::new(&config.root, profile, &excludes).collect(&mut report)?;

    info!(
        "Exporting {} {} files from {} to {}",
        sources.len(),
        profile.name,
        config.root.display(),
        config.output_dir.display()
    );

    let emitter = Emitter::new(&config.root, &config.output_dir, profile, config.parse);
    if config.jobs <= 1 {
        run_sequential(&emitter, profile, sources, &mut report);
    } else {
        run_parallel(&emitter, profile, sources, config.jobs, &mut report)?;
    }

    info!("{}", report.summary());
    Ok(report)
}

fn build_excludes(config: &ExportConfig) -> Result<ExcludeSet, ExportError> {
    let mut patterns = config.exclude.clone();
    if config.use_ignore_file {
        let from_file = load_nexusignore(&config.root).map_err(|source| ExportError::IgnoreFile {
            path: config.root.join(IGNORE_FILE_NAME),
            source,
        })?;
        patterns.extend(from_file);
    }
    Ok(ExcludeSet::new(patterns.as_slice())?)
}

fn run_sequential(
    emitter: &Emitter,
    profile: &LanguageProfile,
    sources: Vec<PathBuf>,
    report: &mut RunReport,
) {
    let mut parser = profile.parser().ok();
    for source in sources {
        let outcome = emitter.process(parser.as_mut(), &source);
        report.record(source, outcome);
    }
}

/// Prepare files on a bounded pool, then write each batch in walk order
///
/// Writing in walk order keeps last-writer-wins identical to a sequential run
/// when two sources map to the same artifact path.
fn run_parallel(
    emitter: &Emitter,
    profile: &LanguageProfile,
    sources: Vec<PathBuf>,
    jobs: usize,
    report: &mut RunReport,
) -> Result<(), ExportError> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    for batch in sources.chunks(jobs * FILES_PER_WORKER) {
        let prepared: Vec<Prepared> = pool.install(|| {
            batch
                .par_iter()
                .map_init(
                    || profile.parser().ok(),
                    |parser, source| emitter.prepare(parser.as_mut(), source),
                )
                .collect()
        });

        for (source, prepared) in batch.iter().zip(prepared) {
            report.record(source.clone(), commit(prepared));
        }
    }

    Ok(())
}
