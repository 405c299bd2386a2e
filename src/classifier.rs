//! Argument classification: raw positional arguments into a [`Target`].
//!
//! Terminals report file references in three shapes, distinguished purely
//! by argument count:
//!
//! - `dir file line` — the line number is already explicit, so `file` is
//!   never re-split on `:`;
//! - `dir file` — `file` may embed `:line[:col]` and gets the line split;
//! - `path` — a single token whose directory part becomes the working
//!   directory, with the line split applied to the base name.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::Target;

/// Classify positional arguments into a [`Target`].
///
/// Pure; no filesystem access. Malformed tokens yield empty optional
/// fields, never errors.
///
/// # Errors
///
/// Returns `Error::MissingArguments` on an empty argument list. Clap's
/// `required = true` already rejects this at the CLI boundary; the guard
/// covers direct callers.
pub fn classify(args: &[String]) -> Result<Target, Error> {
    let mut target = match args {
        [] => return Err(Error::MissingArguments),
        [single] => {
            let (working_dir, base) = split_dir_base(single);
            let mut target = Target {
                column: String::new(),
                file: base.clone(),
                line: String::new(),
                original: base,
                working_dir,
            };
            split_line(&mut target);
            target
        },
        [dir, file] => {
            let mut target = Target {
                column: String::new(),
                file: file.clone(),
                line: String::new(),
                original: file.clone(),
                working_dir: PathBuf::from(dir),
            };
            split_line(&mut target);
            target
        },
        // Three or more: the line number is explicit, `file` keeps any `:`.
        [dir, file, line, ..] => Target {
            column: String::new(),
            file: file.clone(),
            line: line.clone(),
            original: file.clone(),
            working_dir: PathBuf::from(dir),
        },
    };

    // Column parsing is strictly a refinement of a present line number —
    // the explicit third argument is subjected to it too ("42:7").
    if !target.line.is_empty() {
        split_column(&mut target);
    }

    return Ok(target);
}

/// Split a single-argument token into directory and base name, with Go
/// `filepath.Dir`/`Base` semantics: empty parent becomes `.`, trailing
/// slashes are ignored for the base.
fn split_dir_base(token: &str) -> (PathBuf, String) {
    let path = Path::new(token);
    let base = path
        .file_name()
        .map_or_else(|| token.to_string(), |name| name.to_string_lossy().into_owned());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    return (dir, base);
}

/// Split `file` on the first `:` into file and raw line number. The line
/// part may itself still contain `:col`.
fn split_line(target: &mut Target) {
    if let Some((file, line)) = target.file.split_once(':') {
        target.line = line.to_string();
        target.file = file.to_string();
    }
}

/// Split `line` on the first `:` into line and column, stripping trailing
/// `:` characters from the column. A line without a second segment is left
/// as-is (no column).
fn split_column(target: &mut Target) {
    if let Some((line, column)) = target.line.split_once(':') {
        target.column = column.trim_end_matches(':').to_string();
        target.line = line.to_string();
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn classify_strs(args: &[&str]) -> Target {
        let owned: Vec<String> = args.iter().map(|a| return (*a).to_string()).collect();
        classify(&owned).unwrap()
    }

    #[test]
    fn zero_arguments_is_fatal() {
        assert!(matches!(classify(&[]), Err(Error::MissingArguments)));
    }

    #[test]
    fn three_arguments_never_resplit_the_file_token() {
        let target = classify_strs(&["/work", "a:b.txt", "12"]);
        assert_eq!(target.file, "a:b.txt");
        assert_eq!(target.original, "a:b.txt");
        assert_eq!(target.line, "12");
        assert_eq!(target.column, "");
    }

    #[test]
    fn explicit_line_argument_still_gets_column_split() {
        let target = classify_strs(&["/work", "main.rs", "42:7"]);
        assert_eq!(target.line, "42");
        assert_eq!(target.column, "7");
    }

    #[test]
    fn two_arguments_split_embedded_line() {
        let target = classify_strs(&["/work", "path:42"]);
        assert_eq!(target.working_dir, PathBuf::from("/work"));
        assert_eq!(target.file, "path");
        assert_eq!(target.original, "path:42");
        assert_eq!(target.line, "42");
        assert_eq!(target.column, "");
    }

    #[test]
    fn two_arguments_split_embedded_line_and_column() {
        let target = classify_strs(&["/work", "path:42:7"]);
        assert_eq!(target.file, "path");
        assert_eq!(target.line, "42");
        assert_eq!(target.column, "7");
    }

    #[test]
    fn trailing_colons_are_stripped_from_the_column() {
        let target = classify_strs(&["/work", "path:42:7:"]);
        assert_eq!(target.line, "42");
        assert_eq!(target.column, "7");
    }

    #[test]
    fn single_argument_splits_into_dir_and_base() {
        let target = classify_strs(&["/a/b/c.go:10"]);
        assert_eq!(target.working_dir, PathBuf::from("/a/b"));
        assert_eq!(target.file, "c.go");
        assert_eq!(target.original, "c.go:10");
        assert_eq!(target.line, "10");
    }

    #[test]
    fn single_bare_name_gets_dot_working_dir() {
        let target = classify_strs(&["c.go"]);
        assert_eq!(target.working_dir, PathBuf::from("."));
        assert_eq!(target.file, "c.go");
        assert_eq!(target.line, "");
    }

    #[test]
    fn token_without_colon_leaves_line_empty() {
        let target = classify_strs(&["/work", "plain.txt"]);
        assert_eq!(target.file, "plain.txt");
        assert_eq!(target.line, "");
        assert_eq!(target.column, "");
    }

    #[test]
    fn original_keeps_the_unsplit_token() {
        let target = classify_strs(&["/work", "https://example.com/x:3"]);
        assert_eq!(target.original, "https://example.com/x:3");
        assert_eq!(target.file, "https");
    }

    #[test]
    fn empty_line_segment_stays_empty() {
        let target = classify_strs(&["/work", "path:"]);
        assert_eq!(target.file, "path");
        assert_eq!(target.line, "");
        assert_eq!(target.column, "");
    }
}
