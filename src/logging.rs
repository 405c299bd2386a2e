//! Diagnostic logging to the configured append-mode file.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a tracing subscriber writing to `logger_file` in append mode.
///
/// Log level is controlled by the `ITERM_OPEN_LOG` environment variable,
/// defaulting to info for this crate.
///
/// A sink that cannot be opened is not fatal: one warning goes to stderr
/// and the process continues with tracing macros as no-ops, so opening
/// files keeps working independent of logging.
pub fn init(logger_file: &Path) {
    let dir = match logger_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = logger_file
        .file_name()
        .map_or_else(|| "iterm_open.log".to_string(), |n| n.to_string_lossy().into_owned());

    // Rotation::NEVER keeps one stable file at dir/name, plain append.
    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
    {
        Ok(a) => a,
        Err(e) => {
            eprintln!("warning: can't open logger file {}: {e}", logger_file.display());
            return;
        },
    };

    let env_filter = EnvFilter::try_from_env("ITERM_OPEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("iterm_open=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();
}
