use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::codec::{compress_stage, decompress_stage, Codec};
use crate::error::Result;
use crate::report::{average_secs, compression_time_line, decompression_time_line};

/// Outcome of one speed trial, in mean seconds per call.
#[derive(Debug, Clone)]
pub struct SpeedTrial {
    pub label: String,
    pub compress_secs: f64,
    pub decompress_secs: f64,
}

/// Time compression and decompression for every codec, in order.
///
/// For each codec: `repeats` compressions of `data` are timed as one loop;
/// then a fresh sample is compressed outside the clock and `repeats`
/// decompressions of that sample are timed as a second loop. Each loop's
/// total is divided by `repeats`. A repeat count of zero is treated as one.
pub fn speed_pass<W: Write>(
    data: &[u8],
    codecs: &[Box<dyn Codec>],
    repeats: u32,
    out: &mut W,
) -> Result<Vec<SpeedTrial>> {
    let repeats = repeats.max(1);
    info!(trials = codecs.len(), repeats, "speed pass starting");

    let mut trials = Vec::with_capacity(codecs.len());
    for codec in codecs {
        trials.push(speed_trial(data, codec.as_ref(), repeats, out)?);
    }

    info!("speed pass finished");
    Ok(trials)
}

fn speed_trial<W: Write>(
    data: &[u8],
    codec: &dyn Codec,
    repeats: u32,
    out: &mut W,
) -> Result<SpeedTrial> {
    let label = codec.label();

    let compress_total = time_repeated(repeats, || {
        compress_stage(codec, &label, data).map(|c| {
            black_box(c);
        })
    })?;
    let compress_secs = average_secs(compress_total, repeats);
    writeln!(out, "{}", compression_time_line(&label, compress_secs))?;

    let sample = compress_stage(codec, &label, data)?;
    let decompress_total = time_repeated(repeats, || {
        decompress_stage(codec, &label, &sample).map(|d| {
            black_box(d);
        })
    })?;
    let decompress_secs = average_secs(decompress_total, repeats);
    writeln!(out, "{}", decompression_time_line(&label, decompress_secs))?;

    debug!(
        %label,
        repeats,
        compress_total_us = compress_total.as_micros() as u64,
        decompress_total_us = decompress_total.as_micros() as u64,
        "timed"
    );

    Ok(SpeedTrial {
        label,
        compress_secs,
        decompress_secs,
    })
}

/// Run `op` `repeats` times and return the wall-clock time of the whole loop.
fn time_repeated<F>(repeats: u32, mut op: F) -> Result<Duration>
where
    F: FnMut() -> Result<()>,
{
    let t0 = Instant::now();
    for _ in 0..repeats {
        op()?;
    }
    Ok(t0.elapsed())
}
