//! Target resolution: decide what to open and with which program.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::config::Config;
use crate::lookup;
use crate::types::{Invocation, Target};

/// URI-ish tokens get the default opener. Unanchored on purpose — the
/// terminal sometimes prepends junk to a pasted URL.
static URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http(s)?://[\w.-]+").expect("valid regex"));

/// Decide the action for a classified target. First match wins:
///
/// 1. URI in `original` — default opener with the original token; any
///    line/column is ignored.
/// 2. Line number present — editor with `-r -g <path>:<line>[:<col>]`.
///    An absolute file token is used verbatim without an existence check;
///    a relative one goes through [`lookup::find`], and a miss returns
///    `None`: nothing is invoked and the process exits quietly. The tool
///    runs inside the terminal's semantic-history hook, where a noisy
///    failure is more disruptive than a no-op.
/// 3. Otherwise — default opener with the post-split file token (not a
///    resolved path; intentional fallback, not resolution).
pub fn resolve(target: &Target, config: &Config) -> Option<Invocation> {
    if URI_PATTERN.is_match(&target.original) {
        return Some(Invocation {
            args: vec![target.original.clone()],
            program: config.default_opener.clone(),
        });
    }

    if !target.line.is_empty() {
        info!(
            "file: {} lineno: {} colno: {}",
            target.file, target.line, target.column
        );
        let path = if Path::new(&target.file).is_absolute() {
            PathBuf::from(&target.file)
        } else {
            lookup::find(&target.working_dir, &target.file)?
        };

        return Some(Invocation {
            args: vec!["-r".to_string(), "-g".to_string(), open_argument(&path, target)],
            program: config.editor.clone(),
        });
    }

    return Some(Invocation {
        args: vec![target.file.clone()],
        program: config.default_opener.clone(),
    });
}

/// Build `path:line` or `path:line:column` for the editor's `-g` flag.
fn open_argument(path: &Path, target: &Target) -> String {
    if target.column.is_empty() {
        format!("{}:{}", path.display(), target.line)
    } else {
        format!("{}:{}:{}", path.display(), target.line, target.column)
    }
}
