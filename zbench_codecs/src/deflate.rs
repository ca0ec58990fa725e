//! Pieces shared by the zlib, gzip, and raw deflate codecs.

use std::fmt;

use miniz_oxide::deflate::core::{
    compress, create_comp_flags_from_zip_params, CompressionStrategy, CompressorOxide, TDEFLFlush,
    TDEFLStatus,
};

/// Compression level for the deflate family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeflateLevel {
    /// Entropy coding only, no LZ77 matching.
    HuffmanOnly,
    /// Standard level, 0 (stored) to 9 (best).
    Level(u32),
}

/// Levels swept for each deflate-family codec, in report order.
pub const DEFLATE_LEVELS: [DeflateLevel; 6] = [
    DeflateLevel::HuffmanOnly,
    DeflateLevel::Level(1),
    DeflateLevel::Level(3),
    DeflateLevel::Level(5),
    DeflateLevel::Level(7),
    DeflateLevel::Level(9),
];

impl DeflateLevel {
    /// Reject levels outside 0–9.
    pub(crate) fn validate(self) -> anyhow::Result<()> {
        match self {
            DeflateLevel::Level(n) if n > 9 => {
                anyhow::bail!("invalid deflate level {}; expected 0-9 or Huffman-only", n)
            }
            _ => Ok(()),
        }
    }
}

/// Printed as `-2` for Huffman-only, the constant zlib-style libraries use
/// for that mode, so reports stay comparable across tools.
impl fmt::Display for DeflateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeflateLevel::HuffmanOnly => f.write_str("-2"),
            DeflateLevel::Level(n) => write!(f, "{}", n),
        }
    }
}

/// Container written around a Huffman-only deflate stream.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Framing {
    Zlib,
    Raw,
}

/// Gzip member header: magic, CM=deflate, no flags, no mtime, XFL=0, OS=unknown.
pub(crate) const GZIP_HEADER: [u8; 10] = [0x1f, 0x8b, 0x08, 0, 0, 0, 0, 0, 0, 0xff];

/// Encode `input` with the Huffman-only strategy.
///
/// flate2 has no knob for compression strategy, so this drives miniz_oxide's
/// deflate core directly. The output decodes with any conforming inflater.
pub(crate) fn huffman_only(mut input: &[u8], framing: Framing) -> anyhow::Result<Vec<u8>> {
    let window_bits = match framing {
        Framing::Zlib => 15,
        Framing::Raw => -15,
    };
    let flags =
        create_comp_flags_from_zip_params(1, window_bits, CompressionStrategy::HuffmanOnly as i32);
    let mut compressor = CompressorOxide::new(flags);

    let mut output = vec![0u8; (input.len() / 2).max(64)];
    let mut out_pos = 0;
    loop {
        let (status, bytes_in, bytes_out) =
            compress(&mut compressor, input, &mut output[out_pos..], TDEFLFlush::Finish);
        out_pos += bytes_out;
        match status {
            TDEFLStatus::Done => {
                output.truncate(out_pos);
                return Ok(output);
            }
            TDEFLStatus::Okay => {
                input = &input[bytes_in..];
                if output.len() - out_pos < 64 {
                    let grown = output.len() * 2;
                    output.resize(grown, 0);
                }
            }
            other => anyhow::bail!("huffman-only deflate failed with status {}", other as i32),
        }
    }
}
