/// Crate-level error types for iterm-open.
use std::path::PathBuf;

/// Every variant carries enough context to produce a useful diagnostic
/// without a debugger. Lookup misses are deliberately not an error — the
/// resolver models them as `None` and the process exits quietly.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// The opener or editor program could not be spawned.
    #[error("cannot launch {}: {source}", program.display())]
    Launch {
        /// Program path that failed to spawn.
        program: PathBuf,
        /// The spawn error reported by the OS.
        source: std::io::Error,
    },

    /// Invoked with zero positional arguments.
    #[error("must have args")]
    MissingArguments,

    /// Config file exists but cannot be parsed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
