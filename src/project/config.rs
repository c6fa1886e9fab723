//! Run configuration

use std::path::PathBuf;

use crate::language::DEFAULT_LANGUAGE;
use crate::syntax::ParseOptions;

/// Default output root, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything one export run needs
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Project root to walk
    pub root: PathBuf,
    /// Artifacts land under `output_dir/<relative dir>/<Name>.json`
    pub output_dir: PathBuf,
    /// Name of a profile in `crate::language`
    pub language: String,
    /// Glob patterns pruned from the walk
    pub exclude: Vec<String>,
    /// Also read patterns from `<root>/.nexusignore`
    pub use_ignore_file: bool,
    /// Worker threads; 1 processes files one after another
    pub jobs: usize,
    pub parse: ParseOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            language: DEFAULT_LANGUAGE.to_string(),
            exclude: Vec::new(),
            use_ignore_file: true,
            jobs: 1,
            parse: ParseOptions::default(),
        }
    }
}

impl ExportConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_ignore_file(mut self, enabled: bool) -> Self {
        self.use_ignore_file = enabled;
        self
    }

    /// Zero is treated as one
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.parse.max_depth = max_depth;
        self
    }

    pub fn with_syntax_errors_allowed(mut self, allowed: bool) -> Self {
        self.parse.allow_syntax_errors = allowed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::DEFAULT_MAX_DEPTH;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.language, "java");
        assert_eq!(config.jobs, 1);
        assert_eq!(config.parse.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.parse.allow_syntax_errors);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExportConfig::new("/src")
            .with_output_dir("/out")
            .with_language("python")
            .with_jobs(0)
            .with_max_depth(8)
            .with_syntax_errors_allowed(true);

        assert_eq!(config.root, PathBuf::from("/src"));
        assert_eq!(config.output_dir, PathBuf::from("/out"));
        assert_eq!(config.language, "python");
        assert_eq!(config.jobs, 1, "Zero jobs falls back to sequential");
        assert_eq!(config.parse.max_depth, 8);
        assert!(config.parse.allow_syntax_errors);
    }
}
