//! Exclude patterns for the project walk
//!
//! Patterns come from the command line and from a `.nexusignore` file in the
//! project root. Each pattern is a glob matched against both the path relative to
//! the root (Unix-style) and the entry's file name, so `build` prunes every
//! directory called `build` while `src/gen/*` only matches under `src/gen`.

use glob::{MatchOptions, Pattern, PatternError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Name of the per-project ignore file
pub const IGNORE_FILE_NAME: &str = ".nexusignore";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Load custom ignore patterns from `.nexusignore` in the project root
///
/// Empty lines and comments (lines starting with #) are skipped. A missing file
/// yields no patterns.
///
/// ```text
/// # .nexusignore
/// target
/// **/generated/*
/// *Test.java
/// ```
pub fn load_nexusignore(root: &Path) -> io::Result<Vec<String>> {
    let ignore_file = root.join(IGNORE_FILE_NAME);

    if !ignore_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&ignore_file)?;
    let patterns: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect();

    if !patterns.is_empty() {
        debug!(
            "📋 Loaded {} custom ignore patterns from {}",
            patterns.len(),
            IGNORE_FILE_NAME
        );
    }

    Ok(patterns)
}

/// Compiled exclude patterns
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|pattern| Pattern::new(pattern.as_ref().trim_end_matches('/')))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check a path relative to the project root
    pub fn is_excluded(&self, relative: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        // Normalize to Unix-style so patterns use forward slashes on every platform
        let path_str = relative.to_string_lossy().replace('\\', "/");
        let file_name = relative
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        self.patterns.iter().any(|pattern| {
            pattern.matches_with(&path_str, MATCH_OPTIONS)
                || pattern.matches_with(&file_name, MATCH_OPTIONS)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_nexusignore() {
        let temp_dir = TempDir::new().unwrap();
        let patterns = load_nexusignore(temp_dir.path()).unwrap();
        assert!(
            patterns.is_empty(),
            "Should return empty vector if .nexusignore doesn't exist"
        );
    }

    #[test]
    fn test_load_nexusignore_with_patterns() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(IGNORE_FILE_NAME),
            "# Comment line\ntarget\n*Test.java\n\ngenerated/\n# Another comment\n",
        )
        .unwrap();

        let patterns = load_nexusignore(temp_dir.path()).unwrap();
        assert_eq!(
            patterns,
            vec!["target", "*Test.java", "generated/"],
            "Should load 3 patterns (ignoring comments and empty lines)"
        );
    }

    #[test]
    fn test_directory_name_matches_at_any_depth() {
        let set = ExcludeSet::new(&["generated/"]).unwrap();
        assert!(set.is_excluded(&PathBuf::from("generated")));
        assert!(set.is_excluded(&PathBuf::from("src/main/generated")));
        assert!(!set.is_excluded(&PathBuf::from("src/main/generated_sources")));
    }

    #[test]
    fn test_wildcard_file_pattern() {
        let set = ExcludeSet::new(&["*Test.java"]).unwrap();
        assert!(set.is_excluded(&PathBuf::from("src/test/FooTest.java")));
        assert!(!set.is_excluded(&PathBuf::from("src/main/Foo.java")));
    }

    #[test]
    fn test_anchored_path_pattern() {
        let set = ExcludeSet::new(&["legacy/*"]).unwrap();
        assert!(set.is_excluded(&PathBuf::from("legacy/Old.java")));
        assert!(!set.is_excluded(&PathBuf::from("src/legacy_utils/Old.java")));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExcludeSet::default();
        assert!(set.is_empty());
        assert!(!set.is_excluded(&PathBuf::from("anything/at/all.java")));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(ExcludeSet::new(&["src/[unclosed"]).is_err());
    }
}
