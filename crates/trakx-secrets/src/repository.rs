//! Repository root discovery.

use std::path::{Path, PathBuf};

/// Location of the env file relative to the repository root.
const ENV_FILE_RELATIVE_PATH: [&str; 2] = ["src", ".env"];

/// A repository root has a `.git` and a `src` directory next to a
/// `README.md` and a `.gitignore`.
pub fn is_repository_root(dir: &Path) -> bool {
    dir.join(".git").is_dir()
        && dir.join("src").is_dir()
        && dir.join("README.md").is_file()
        && dir.join(".gitignore").is_file()
}

/// Walks from `start` up through its parents to the first repository root.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_repository_root(dir))
        .map(Path::to_path_buf)
}

/// `<repository root>/src/.env`, whether or not the file exists.
pub fn default_env_file_path(start: &Path) -> Option<PathBuf> {
    find_repository_root(start)
        .map(|root| ENV_FILE_RELATIVE_PATH.iter().fold(root, |path, part| path.join(part)))
}
