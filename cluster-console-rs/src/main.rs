//! cluster-console
//!
//! Host-side simulation harness for the cluster display engine. Wires the
//! library into a runnable loop:
//!
//! 1. A [`DisplaySession`] is built around [`ConsoleSink`], which logs every
//!    flushed frame instead of driving a panel.
//! 2. The session is initialised, optionally dimmed and self-tested.
//! 3. Text commands (`clear`, `text <string>`, `progress <percent>`) are read
//!    from `--script` or stdin and executed one per line.
//! 4. The session is shut down and a summary is logged.
//!
//! Set `RUST_LOG=debug` to see the per-flush pixel trace.

mod cli;
mod script;
mod sink;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::info;

use cluster_display_rs::{DisplayConfig, DisplaySession};

use crate::cli::Cli;
use crate::script::run_script;
use crate::sink::ConsoleSink;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("cluster-console starting ({}x{})", cli.width, cli.height);

    let config = DisplayConfig::with_panel(cli.width, cli.height);
    let mut display = DisplaySession::new(ConsoleSink::default(), config);

    display
        .init()
        .map_err(|e| anyhow!("display init failed: {e} (diag 0x{:02X})", display.error_code()))?;

    if let Some(level) = cli.brightness {
        display
            .set_brightness(level)
            .map_err(|e| anyhow!("brightness {level} rejected: {e}"))?;
    }

    if cli.self_test {
        display
            .self_test()
            .map_err(|e| anyhow!("self test failed: {e}"))?;
    }

    // ── Command loop ────────────────────────────────────────────────────────
    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            run_script(&mut display, BufReader::new(file))?
        }
        None => run_script(&mut display, io::stdin().lock())?,
    };

    // ── Shutdown ────────────────────────────────────────────────────────────
    display
        .deinit()
        .map_err(|e| anyhow!("display deinit failed: {e}"))?;

    info!(
        "{} commands, {} failed, {} frames presented",
        summary.executed,
        summary.failed,
        display.sink().frames()
    );

    if summary.failed > 0 {
        bail!("{} of {} commands failed", summary.failed, summary.executed);
    }
    Ok(())
}
