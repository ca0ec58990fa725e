use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::{Compression, Crc};
use zbench_core::Codec;

use crate::deflate::{huffman_only, DeflateLevel, Framing, GZIP_HEADER};

/// gzip (RFC 1952) codec: a single gzip member with a minimal header.
pub struct GzipCodec {
    pub level: DeflateLevel,
}

impl GzipCodec {
    pub fn new(level: DeflateLevel) -> Self {
        Self { level }
    }
}

impl Codec for GzipCodec {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn params(&self) -> Option<String> {
        Some(self.level.to_string())
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.level.validate()?;
        match self.level {
            DeflateLevel::HuffmanOnly => {
                let body = huffman_only(raw, Framing::Raw)?;
                let mut crc = Crc::new();
                crc.update(raw);

                let mut member = Vec::with_capacity(GZIP_HEADER.len() + body.len() + 8);
                member.extend_from_slice(&GZIP_HEADER);
                member.extend_from_slice(&body);
                member.extend_from_slice(&crc.sum().to_le_bytes());
                // ISIZE is the input length modulo 2^32.
                member.extend_from_slice(&crc.amount().to_le_bytes());
                Ok(member)
            }
            DeflateLevel::Level(n) => {
                let mut enc = GzEncoder::new(Vec::new(), Compression::new(n));
                enc.write_all(raw)?;
                Ok(enc.finish()?)
            }
        }
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = Vec::new();
        GzDecoder::new(compressed).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
