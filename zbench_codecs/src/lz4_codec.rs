use std::io::{Read, Write};

use lz4::{BlockSize, Decoder, EncoderBuilder};
use zbench_core::Codec;

/// Maximum LZ4 frame block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz4Block {
    Max64Kb,
    Max256Kb,
    Max1Mb,
    Max4Mb,
}

impl Lz4Block {
    pub fn bytes(self) -> usize {
        match self {
            Lz4Block::Max64Kb => 64 * 1024,
            Lz4Block::Max256Kb => 256 * 1024,
            Lz4Block::Max1Mb => 1024 * 1024,
            Lz4Block::Max4Mb => 4 * 1024 * 1024,
        }
    }

    fn frame_block_size(self) -> BlockSize {
        match self {
            Lz4Block::Max64Kb => BlockSize::Max64KB,
            Lz4Block::Max256Kb => BlockSize::Max256KB,
            Lz4Block::Max1Mb => BlockSize::Max1MB,
            Lz4Block::Max4Mb => BlockSize::Max4MB,
        }
    }
}

/// Fastest mode: plain LZ4, no high-compression search.
pub const LZ4_FASTEST: u32 = 0;

/// Levels swept for LZ4, in report order. Levels of 3 and above use LZ4-HC.
pub const LZ4_LEVELS: [u32; 6] = [LZ4_FASTEST, 1, 3, 5, 7, 9];

/// Block sizes swept for LZ4, in report order.
pub const LZ4_BLOCKS: [Lz4Block; 4] = [
    Lz4Block::Max64Kb,
    Lz4Block::Max256Kb,
    Lz4Block::Max1Mb,
    Lz4Block::Max4Mb,
];

/// LZ4 frame codec.
///
/// Produces a standard LZ4 frame (magic, frame descriptor, blocks, end mark,
/// content checksum), readable by the reference `lz4` tool.
pub struct Lz4Codec {
    pub level: u32,
    pub block: Lz4Block,
}

impl Lz4Codec {
    pub fn new(level: u32, block: Lz4Block) -> Self {
        Self { level, block }
    }
}

impl Codec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn params(&self) -> Option<String> {
        Some(format!("{}, {}", self.level, self.block.bytes()))
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut enc = EncoderBuilder::new()
            .level(self.level)
            .block_size(self.block.frame_block_size())
            .build(Vec::with_capacity(raw.len() / 2))?;
        enc.write_all(raw)?;
        let (compressed, result) = enc.finish();
        result?;
        Ok(compressed)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = Vec::new();
        Decoder::new(compressed)?.read_to_end(&mut raw)?;
        Ok(raw)
    }
}
