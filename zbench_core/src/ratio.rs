use std::io::Write;

use tracing::{debug, info};

use crate::codec::{compress_stage, decompress_stage, Codec};
use crate::error::{BenchError, Result};
use crate::report::{coefficient, original_size_line, ratio_line};

/// Outcome of one ratio trial.
#[derive(Debug, Clone)]
pub struct RatioTrial {
    pub label: String,
    pub compressed_len: usize,
    pub coefficient: f64,
}

/// Compress `data` once with every codec, in order, and report the size and
/// compression coefficient of each result.
///
/// Writes the `Original size` header first, then one line per codec. Each
/// trial's line is written before its round trip is checked, so when a codec
/// returns the wrong bytes its line is the last one in the report and the
/// returned [`BenchError::RoundTrip`] names it.
pub fn ratio_pass<W: Write>(
    data: &[u8],
    codecs: &[Box<dyn Codec>],
    out: &mut W,
) -> Result<Vec<RatioTrial>> {
    info!(trials = codecs.len(), raw_len = data.len(), "ratio pass starting");
    writeln!(out, "{}", original_size_line(data.len()))?;

    let mut trials = Vec::with_capacity(codecs.len());
    for codec in codecs {
        trials.push(ratio_trial(data, codec.as_ref(), out)?);
    }

    info!("ratio pass finished");
    Ok(trials)
}

fn ratio_trial<W: Write>(data: &[u8], codec: &dyn Codec, out: &mut W) -> Result<RatioTrial> {
    let label = codec.label();
    let compressed = compress_stage(codec, &label, data)?;
    writeln!(out, "{}", ratio_line(&label, data.len(), compressed.len()))?;
    debug!(%label, raw_len = data.len(), compressed_len = compressed.len(), "compressed");

    let restored = decompress_stage(codec, &label, &compressed)?;
    if restored != data {
        return Err(BenchError::RoundTrip {
            label,
            expected: data.len(),
            actual: restored.len(),
        });
    }

    Ok(RatioTrial {
        coefficient: coefficient(data.len(), compressed.len()),
        compressed_len: compressed.len(),
        label,
    })
}
