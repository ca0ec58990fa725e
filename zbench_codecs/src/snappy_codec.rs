use std::io::{Read, Write};

use snap::read::FrameDecoder;
use snap::write::FrameEncoder;
use zbench_core::Codec;

/// Snappy codec using the framing format (stream identifier plus
/// checksummed chunks), as written by buffered streaming encoders.
///
/// An empty input produces an empty stream, which decodes back to nothing.
pub struct SnappyCodec;

impl Codec for SnappyCodec {
    fn name(&self) -> &'static str {
        "snappy"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut enc = FrameEncoder::new(Vec::new());
        enc.write_all(raw)?;
        enc.into_inner()
            .map_err(|e| anyhow::anyhow!("snappy compress error: {}", e.error()))
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = Vec::new();
        FrameDecoder::new(compressed).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
