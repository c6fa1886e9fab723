// Nexus Path Utilities
//
// Maps a source file under the project root onto its mirrored location under the
// output root, and renders paths relative to the root for logs and reports.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Extension of every artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// Directory of `file` relative to `root`
///
/// Returns `None` when `file` is not under `root`. A file directly in the root
/// yields an empty path.
pub fn relative_dir(file: &Path, root: &Path) -> Option<PathBuf> {
    let parent = file.parent()?;
    parent.strip_prefix(root).ok().map(Path::to_path_buf)
}

/// Artifact location: `output_root / relative_dir / <name>.json`
pub fn artifact_path(output_root: &Path, relative_dir: &Path, name: &str) -> PathBuf {
    output_root
        .join(relative_dir)
        .join(format!("{}.{}", name, ARTIFACT_EXTENSION))
}

/// Convert a path under `root` to a relative Unix-style path (with `/` separators)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use nexus_core::utils::paths::to_relative_unix_style;
///
/// let relative = to_relative_unix_style(
///     Path::new("/home/dev/project/src/Foo.java"),
///     Path::new("/home/dev/project"),
/// )
/// .unwrap();
/// assert_eq!(relative, "src/Foo.java");
/// ```
pub fn to_relative_unix_style(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "Path '{}' is not within project root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let path_str = relative.to_str().context("Path contains invalid UTF-8")?;

    // On Unix, MAIN_SEPARATOR is already '/', so this is a no-op
    let unix_style = if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    };

    Ok(unix_style)
}

/// Relative Unix-style rendering for log lines, falling back to the full path
pub fn display_relative(path: &Path, root: &Path) -> String {
    to_relative_unix_style(path, root).unwrap_or_else(|_| path.display().to_string())
}
