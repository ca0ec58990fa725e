use std::io::{Read, Write};

use xz2::read::XzDecoder;
use xz2::stream::{Check, Filters, LzmaOptions, Stream};
use xz2::write::XzEncoder;
use zbench_core::Codec;

/// liblzma's default preset.
pub const LZMA_DEFAULT_PRESET: u32 = 6;

/// Encode `raw` through a configured liblzma stream.
fn encode(raw: &[u8], stream: Stream) -> anyhow::Result<Vec<u8>> {
    let mut enc = XzEncoder::new_stream(Vec::new(), stream);
    enc.write_all(raw)?;
    Ok(enc.finish()?)
}

fn decode(compressed: &[u8], stream: Stream) -> anyhow::Result<Vec<u8>> {
    let mut raw = Vec::new();
    XzDecoder::new_stream(compressed, stream).read_to_end(&mut raw)?;
    Ok(raw)
}

/// Classic LZMA in the `.lzma` ("LZMA alone") container.
///
/// The header records an unknown uncompressed size, so the stream is
/// terminated by an end-of-payload marker.
pub struct LzmaCodec {
    pub preset: u32,
}

impl Default for LzmaCodec {
    fn default() -> Self {
        Self {
            preset: LZMA_DEFAULT_PRESET,
        }
    }
}

impl Codec for LzmaCodec {
    fn name(&self) -> &'static str {
        "lzma"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let opts = LzmaOptions::new_preset(self.preset)?;
        encode(raw, Stream::new_lzma_encoder(&opts)?)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        decode(compressed, Stream::new_lzma_decoder(u64::MAX)?)
    }
}

/// LZMA2 chunks in an `.xz` container with no integrity check, which is as
/// close to a bare LZMA2 stream as liblzma's stream API gets.
pub struct Lzma2Codec {
    pub preset: u32,
}

impl Default for Lzma2Codec {
    fn default() -> Self {
        Self {
            preset: LZMA_DEFAULT_PRESET,
        }
    }
}

impl Codec for Lzma2Codec {
    fn name(&self) -> &'static str {
        "lzma2"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let opts = LzmaOptions::new_preset(self.preset)?;
        let mut filters = Filters::new();
        filters.lzma2(&opts);
        encode(raw, Stream::new_stream_encoder(&filters, Check::None)?)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        decode(compressed, Stream::new_stream_decoder(u64::MAX, 0)?)
    }
}
