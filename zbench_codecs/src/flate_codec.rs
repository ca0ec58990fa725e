use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use zbench_core::Codec;

use crate::deflate::{huffman_only, DeflateLevel, Framing};

/// Raw deflate (RFC 1951) codec, no container.
pub struct FlateCodec {
    pub level: DeflateLevel,
}

impl FlateCodec {
    pub fn new(level: DeflateLevel) -> Self {
        Self { level }
    }
}

impl Codec for FlateCodec {
    fn name(&self) -> &'static str {
        "flate"
    }

    fn params(&self) -> Option<String> {
        Some(self.level.to_string())
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.level.validate()?;
        match self.level {
            DeflateLevel::HuffmanOnly => huffman_only(raw, Framing::Raw),
            DeflateLevel::Level(n) => {
                let mut enc = DeflateEncoder::new(Vec::new(), Compression::new(n));
                enc.write_all(raw)?;
                Ok(enc.finish()?)
            }
        }
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = Vec::new();
        DeflateDecoder::new(compressed).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
