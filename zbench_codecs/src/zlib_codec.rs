use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use zbench_core::Codec;

use crate::deflate::{huffman_only, DeflateLevel, Framing};

/// zlib (RFC 1950) codec: deflate with a 2-byte header and Adler-32 trailer.
pub struct ZlibCodec {
    pub level: DeflateLevel,
}

impl ZlibCodec {
    pub fn new(level: DeflateLevel) -> Self {
        Self { level }
    }
}

impl Codec for ZlibCodec {
    fn name(&self) -> &'static str {
        "zlib"
    }

    fn params(&self) -> Option<String> {
        Some(self.level.to_string())
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.level.validate()?;
        match self.level {
            DeflateLevel::HuffmanOnly => huffman_only(raw, Framing::Zlib),
            DeflateLevel::Level(n) => {
                let mut enc = ZlibEncoder::new(Vec::new(), Compression::new(n));
                enc.write_all(raw)?;
                Ok(enc.finish()?)
            }
        }
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = Vec::new();
        ZlibDecoder::new(compressed).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
