use anyhow::Result;
use clap::Parser;
use core_terminal::CrosstermBackend;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_ENV: &str = "MIRT_LOG";
const LOG_FILE: &str = "mirt.log";

#[derive(Parser, Debug)]
#[command(name = "mirt", version, about = "A small modal text editor")]
struct Args {
    /// File to edit. If omitted an empty scratch buffer is used.
    pub path: Option<PathBuf>,
    /// Run-control file (overrides discovery of `.mirtrc`).
    #[arg(long = "rc")]
    pub rc: Option<PathBuf>,
}

/// File logging is enabled only when `MIRT_LOG` holds a filter directive;
/// the returned guard must live until exit so buffered lines are flushed.
fn configure_logging() -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV).ok()?;
    let log_dir = Path::new(".");
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(args: &Args) -> Result<()> {
    let rc = core_config::load_from(args.rc.clone())?;
    let mut backend = CrosstermBackend::new();
    let mut guard = backend.enter_guard()?;
    let mut state = mirt::bootstrap(args.path.as_deref(), &rc, &mut *guard)?;
    mirt::run(&mut state, &mut *guard)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    // The terminal guard is dropped inside `run`, so the diagnostic below is
    // printed on a restored terminal.
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "runtime", error = %format!("{e:#}"), "fatal");
            eprintln!("mirt: {e:#}");
            ExitCode::FAILURE
        }
    }
}
