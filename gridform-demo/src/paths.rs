//! Platform-specific directory paths.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "gridform";
const APPLICATION: &str = "gridform-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/gridform-demo` or `~/.cache/gridform-demo`
/// - macOS: `~/Library/Caches/dev.gridform.gridform-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\gridform\gridform-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
