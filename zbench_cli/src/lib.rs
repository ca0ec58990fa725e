use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use zbench_codecs::default_suite;
use zbench_core::{load_input, ratio_pass, speed_pass, DEFAULT_INPUT, DEFAULT_REPEATS};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "zbench",
    about = "Compare compression ratio and round-trip speed of zlib, gzip, deflate, LZW, LZ4, LZMA, LZMA2, and Snappy on one file",
    version
)]
pub struct Cli {
    /// File to benchmark
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Timed iterations per compression and decompression loop
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_REPEATS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub repeats: u32,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter implied by `-v` flags, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

// ── Driver ─────────────────────────────────────────────────────────────────

/// Load the input, then run the ratio pass and the speed pass over the full
/// codec suite, writing the report to `out`.
///
/// Any failure ends the run; lines already written stay in `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let data = load_input(&cli.input)?;
    let suite = default_suite();

    ratio_pass(&data, &suite, out)?;
    speed_pass(&data, &suite, cli.repeats, out)?;
    out.flush()?;

    info!(trials = suite.len(), "benchmark complete");
    Ok(())
}
