use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zbench_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays diffable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
