mod classifier;
mod config;
mod error;
mod launcher;
mod logging;
mod lookup;
mod resolver;
mod types;

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};

/// Resolve a terminal-reported file reference into an opener invocation.
///
/// Wired up as iTerm2's Semantic History command: the terminal hands over
/// the working directory and the clicked token, this tool decides between
/// the default opener and the editor.
#[derive(Parser)]
#[command(name = "iterm-open", about = "Open terminal file references in an editor")]
struct Cli {
    /// Positional arguments as reported by the terminal:
    /// `<dir> <file> <line>`, `<dir> <file[:line[:col]]>`, or a single
    /// `<path[:line[:col]]>`.
    #[arg(required = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli.args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Config → logging → classify → resolve → launch.
///
/// A lookup miss resolves to nothing and exits successfully (quiet no-op);
/// a launch failure is logged and swallowed. Only a malformed config file
/// (or the unreachable zero-argument guard) surfaces as a process error.
///
/// # Errors
///
/// Returns errors from config loading or classification.
fn run(args: &[String]) -> Result<(), error::Error> {
    let config = config::Config::load()?;
    logging::init(&config.logger_file);

    info!("args: {args:?}");
    let target = classifier::classify(args)?;
    info!(
        "pwd: {} file: {} lineno: {} colno: {}",
        target.working_dir.display(),
        target.file,
        target.line,
        target.column
    );

    let Some(invocation) = resolver::resolve(&target, &config) else {
        info!("no target resolved, nothing to open");
        return Ok(());
    };

    info!("cmd: {} {:?}", invocation.program.display(), invocation.args);
    match launcher::launch(&invocation) {
        Ok(status) if !status.success() => warn!("opener exited with {status}"),
        Ok(_) => {},
        Err(e) => warn!("{e}"),
    }

    return Ok(());
}
