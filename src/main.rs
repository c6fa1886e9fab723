//! `nexus-ops` command-line entry point.
//!
//! Exit status is non-zero only when a run cannot start: an unreadable project
//! root, an unknown language, or a bad exclude pattern. Files that fail on their
//! own are logged and the run still succeeds.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nexus_core::language::{self, DEFAULT_LANGUAGE};
use nexus_core::logging::init_tracing;
use nexus_core::project::{self, ExportConfig, DEFAULT_OUTPUT_DIR};
use nexus_core::syntax::{parse_source, ParseOptions, DEFAULT_MAX_DEPTH};

#[derive(Debug, Parser)]
#[command(
    name = "nexus-ops",
    version,
    about = "Generate generic JSON syntax trees for the types in a source project."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write one JSON file per class or interface found under a directory.
    Generate {
        /// Project root directory.
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Output root; the project's directory layout is mirrored below it.
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Source language of the project.
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Worker threads; 1 processes files one at a time.
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Glob pattern to leave out of the walk (repeatable).
        #[arg(long, value_name = "GLOB")]
        exclude: Vec<String>,

        /// Ignore the project's .nexusignore file.
        #[arg(long)]
        no_ignore_file: bool,

        /// Deepest tree level that keeps its children.
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Export files even when the parser reports syntax errors.
        #[arg(long)]
        allow_syntax_errors: bool,
    },
    /// Print the reduced tree of a single file as JSON.
    Tree {
        /// The source file to reduce.
        #[arg(required = true)]
        file: PathBuf,

        /// Language; detected from the file extension when omitted.
        #[arg(short, long)]
        language: Option<String>,

        /// Reduce the file even when the parser reports syntax errors.
        #[arg(long)]
        allow_syntax_errors: bool,
    },
    /// List the supported languages and their file extensions.
    Languages,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            directory,
            output,
            language,
            jobs,
            exclude,
            no_ignore_file,
            max_depth,
            allow_syntax_errors,
        } => {
            println!(
                "Generating JSON files for the classes in directory: {}",
                directory.display()
            );

            let config = ExportConfig::new(directory)
                .with_output_dir(output)
                .with_language(language)
                .with_jobs(jobs)
                .with_exclude(exclude)
                .with_ignore_file(!no_ignore_file)
                .with_max_depth(max_depth)
                .with_syntax_errors_allowed(allow_syntax_errors);

            let report = project::run(&config).context("Failed to parse the project")?;

            println!("{}", report.summary());
            println!("JSON files generated for each class.");
            Ok(())
        }
        Command::Tree {
            file,
            language,
            allow_syntax_errors,
        } => print_tree(&file, language.as_deref(), allow_syntax_errors),
        Command::Languages => {
            for name in language::supported_languages() {
                let profile = language::profile(name)?;
                println!("{:<12} {}", name, profile.extensions.join(", "));
            }
            Ok(())
        }
    }
}

fn print_tree(file: &Path, language: Option<&str>, allow_syntax_errors: bool) -> Result<()> {
    let language = match language {
        Some(language) => language,
        None => file
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(language::detect_language_from_extension)
            .with_context(|| {
                format!(
                    "Cannot detect the language of {}; pass --language",
                    file.display()
                )
            })?,
    };
    let profile = language::profile(language)?;

    let source =
        fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let options = ParseOptions {
        allow_syntax_errors,
        ..ParseOptions::default()
    };
    let tree = parse_source(&source, profile, &options)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    println!("{}", tree.to_pretty_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["nexus-ops", "generate"]).unwrap();
        let Command::Generate {
            directory,
            output,
            language,
            jobs,
            exclude,
            no_ignore_file,
            max_depth,
            allow_syntax_errors,
        } = cli.command
        else {
            panic!("Expected the generate subcommand");
        };

        assert_eq!(directory, PathBuf::from("."));
        assert_eq!(output, PathBuf::from("output"));
        assert_eq!(language, "java");
        assert_eq!(jobs, 1);
        assert!(exclude.is_empty());
        assert!(!no_ignore_file);
        assert_eq!(max_depth, DEFAULT_MAX_DEPTH);
        assert!(!allow_syntax_errors);
    }

    #[test]
    fn test_generate_short_flags_and_repeated_excludes() {
        let cli = Cli::try_parse_from([
            "nexus-ops", "generate", "-d", "src", "-o", "out", "-j", "4", "--exclude", "build",
            "--exclude", "*Test.java",
        ])
        .unwrap();
        let Command::Generate {
            directory,
            output,
            jobs,
            exclude,
            ..
        } = cli.command
        else {
            panic!("Expected the generate subcommand");
        };

        assert_eq!(directory, PathBuf::from("src"));
        assert_eq!(output, PathBuf::from("out"));
        assert_eq!(jobs, 4);
        assert_eq!(exclude, vec!["build", "*Test.java"]);
    }

    #[test]
    fn test_tree_requires_a_file() {
        assert!(Cli::try_parse_from(["nexus-ops", "tree"]).is_err());
    }
}
