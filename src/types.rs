/// Core value types passed between the classifier and the resolver.
use std::path::PathBuf;

/// The command the resolver decided to run. Pure value; constructing one
/// performs no I/O, so resolution is testable without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Ordered argument list handed to the program.
    pub args: Vec<String>,
    /// Program to execute (one of the two configured openers).
    pub program: PathBuf,
}

/// A classified file reference, built once from the positional arguments
/// and read-only from the point resolution begins.
///
/// Line and column stay raw strings end to end — empty means absent, and a
/// non-numeric "line" flows into the open argument verbatim, matching how
/// terminals report these tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// 1-based column number, empty if absent. Only ever populated by
    /// splitting an already-present line number.
    pub column: String,
    /// File path or path-like token, after any `:line[:col]` split.
    pub file: String,
    /// 1-based line number, empty if absent.
    pub line: String,
    /// The token exactly as first seen, before any `:` splitting.
    /// Used for URI detection and never mutated after assignment.
    pub original: String,
    /// Directory context for relative lookups.
    pub working_dir: PathBuf,
}
