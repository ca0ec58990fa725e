use crate::error::{BenchError, Stage};

/// Core compression abstraction benchmarked by the harness.
///
/// Each `Codec` value is one trial: a codec family bound to a single
/// parameter combination (level, bit order, block size, ...). Sweeping a
/// parameter space means building one value per combination; see
/// `zbench_codecs::default_suite`.
///
/// Implementations:
/// - Must be lossless: `decompress(compress(x)) == x` for every `x`,
///   including the empty buffer.
/// - Must produce a self-contained payload in the codec's standard wire
///   format, so `decompress` needs nothing beyond the compressed bytes.
/// - Report failures as `Err`; the harness decides they are fatal.
pub trait Codec: Send + Sync {
    /// Codec family name as printed in the report (`zlib`, `lz4`, ...).
    fn name(&self) -> &'static str;

    /// Printed parameter list, without parentheses.
    ///
    /// `None` for codecs benchmarked in a single default configuration.
    fn params(&self) -> Option<String> {
        None
    }

    /// Report label: `name(params)`, or the bare name when there are none.
    fn label(&self) -> String {
        match self.params() {
            Some(params) => format!("{}({})", self.name(), params),
            None => self.name().to_string(),
        }
    }

    /// Compress the whole input into one self-contained payload.
    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>>;

    /// Invert [`Codec::compress`].
    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>>;
}

/// Compress `raw`, tagging any failure with the trial label.
pub(crate) fn compress_stage(codec: &dyn Codec, label: &str, raw: &[u8]) -> crate::Result<Vec<u8>> {
    codec.compress(raw).map_err(|source| BenchError::Codec {
        label: label.to_string(),
        stage: Stage::Compress,
        source,
    })
}

/// Decompress `compressed`, tagging any failure with the trial label.
pub(crate) fn decompress_stage(
    codec: &dyn Codec,
    label: &str,
    compressed: &[u8],
) -> crate::Result<Vec<u8>> {
    codec.decompress(compressed).map_err(|source| BenchError::Codec {
        label: label.to_string(),
        stage: Stage::Decompress,
        source,
    })
}
