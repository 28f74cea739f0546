//! modaltext entrypoint.
use anyhow::Result;
use clap::Parser;
use core_events::{EVENT_CHANNEL_CAP, Event};
use core_terminal::{CrosstermBackend, CrosstermSurface, TerminalBackend};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod app;

use app::{App, Flow};

const LOG_FILE: &str = "modaltext.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "modaltext", version, about = "Two-pane modal text editing demo")]
struct Args {
    /// Optional file whose contents seed both panes. It is never written.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `modaltext.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
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

fn read_seed(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return String::new();
    };
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(target: "runtime", file = %path.display(), size_bytes = content.len(), "seed_read_ok");
            content
        }
        Err(e) => {
            error!(target: "runtime", file = %path.display(), ?e, "seed_read_error");
            String::new()
        }
    }
}

/// Resolves just after `deadline`, or never when there is none.
async fn sequence_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until((at + Duration::from_millis(1)).into()).await,
        None => std::future::pending().await,
    }
}

fn redraw<W: Write>(app: &App, out: &mut CrosstermSurface<W>) -> Result<()> {
    app.draw(out);
    out.flush()
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone())?;
    let seed = read_seed(args.path.as_deref());

    let mut backend = CrosstermBackend::new();
    backend.set_title("modaltext")?;
    let guard = backend.enter_guard()?;
    let size = guard.backend().size().unwrap_or_else(|_| {
        let editor = config.editor();
        (editor.width.saturating_mul(2).saturating_add(1), editor.height.saturating_add(1))
    });
    let mut app = App::new(&config, &seed, args.path.clone(), size);
    info!(
        target: "runtime",
        width = size.0,
        height = size.1,
        config = config.source.as_ref().map(|p| p.display().to_string()),
        "bootstrap_complete"
    );

    let (tx, mut rx) = mpsc::channel::<Event>(EVENT_CHANNEL_CAP);
    let (input_task, input_shutdown) = core_input::spawn_async_input(tx);
    let mut out = CrosstermSurface::new(io::stdout());
    redraw(&app, &mut out)?;

    loop {
        let flow = tokio::select! {
            event = rx.recv() => match event {
                Some(event) => app.handle_event(&event),
                None => Flow::Quit,
            },
            _ = sequence_deadline(app.pending_deadline()) => {
                if app.expire_pending(Instant::now()) { Flow::Redraw } else { Flow::Continue }
            }
        };
        match flow {
            Flow::Quit => break,
            Flow::Redraw => redraw(&app, &mut out)?,
            Flow::Continue => {}
        }
    }

    input_shutdown.signal();
    if let Err(e) = input_task.await {
        error!(target: "runtime", ?e, "input_task_join_failed");
    }
    drop(guard);
    info!(target: "runtime", "shutdown");
    Ok(())
}
