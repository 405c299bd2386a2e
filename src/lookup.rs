//! Fallback filesystem search for tokens that don't name an existing file.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Resolve `file` against `working_dir`, preferring an exact match.
///
/// The joined candidate is stat'ed first (any entry kind, symlinks
/// followed). When it doesn't exist, the tree under `working_dir` is
/// walked depth-first in lexical per-directory order and the first
/// non-directory entry whose path string ends with `file` wins.
///
/// The match is a plain string suffix, not path-boundary-aware:
/// `"get.txt"` matches `"…/target.txt"`. Kept as documented behavior —
/// making it segment-aware would silently change which file opens.
///
/// The walk has no depth limit; symlinks are not followed, so a symlink
/// counts as a non-directory candidate and cycles cannot occur.
pub fn find(working_dir: &Path, file: &str) -> Option<PathBuf> {
    let candidate = working_dir.join(file);
    if std::fs::metadata(&candidate).is_ok() {
        debug!("exact match: {}", candidate.display());
        return Some(candidate);
    }

    for entry in WalkDir::new(working_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path().to_string_lossy().ends_with(file) {
            debug!("walk match: {}", entry.path().display());
            return Some(entry.path().to_path_buf());
        }
    }

    debug!("no match for {file} under {}", working_dir.display());
    return None;
}
