use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use tally::counter::CounterViewModel;
use tally::{logging, ui};

/// An educational counter: MVVM over a small reactive state layer.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about)]
struct Cli {
    /// UI animation tick in milliseconds.
    #[arg(long, default_value_t = 250)]
    tick_rate_ms: u64,

    /// Write logs to this file instead of reading `TALLY_LOG`.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let view_model = Arc::new(CounterViewModel::new());
    view_model
        .observe(|state| tracing::trace!(?state, "state replaced"))
        .forget();

    ui::run(
        view_model,
        runtime.handle().clone(),
        Duration::from_millis(cli.tick_rate_ms),
    )?;
    Ok(())
}
