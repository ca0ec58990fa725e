mod deflate;
mod flate_codec;
mod gzip_codec;
mod lz4_codec;
mod lzma_codec;
mod lzw_codec;
mod snappy_codec;
mod zlib_codec;

pub use deflate::{DeflateLevel, DEFLATE_LEVELS};
pub use flate_codec::FlateCodec;
pub use gzip_codec::GzipCodec;
pub use lz4_codec::{Lz4Block, Lz4Codec, LZ4_BLOCKS, LZ4_FASTEST, LZ4_LEVELS};
pub use lzma_codec::{Lzma2Codec, LzmaCodec, LZMA_DEFAULT_PRESET};
pub use lzw_codec::{LzwCodec, LZW_LITERAL_WIDTHS, LZW_ORDERS};
pub use snappy_codec::SnappyCodec;
pub use zlib_codec::ZlibCodec;

pub use weezl::BitOrder;

use zbench_core::Codec;

/// Every benchmarked codec/parameter combination, in report order.
///
/// zlib, gzip, LZW (order × literal width), raw deflate, LZ4 (level × block
/// size), LZMA, LZMA2, Snappy. Both passes walk this list front to back, so
/// the order here is the order of the report lines.
pub fn default_suite() -> Vec<Box<dyn Codec>> {
    let mut suite: Vec<Box<dyn Codec>> = Vec::new();

    for level in DEFLATE_LEVELS {
        suite.push(Box::new(ZlibCodec::new(level)));
    }
    for level in DEFLATE_LEVELS {
        suite.push(Box::new(GzipCodec::new(level)));
    }
    for order in LZW_ORDERS {
        for width in LZW_LITERAL_WIDTHS {
            suite.push(Box::new(LzwCodec::new(order, width)));
        }
    }
    for level in DEFLATE_LEVELS {
        suite.push(Box::new(FlateCodec::new(level)));
    }
    for level in LZ4_LEVELS {
        for block in LZ4_BLOCKS {
            suite.push(Box::new(Lz4Codec::new(level, block)));
        }
    }
    suite.push(Box::new(LzmaCodec::default()));
    suite.push(Box::new(Lzma2Codec::default()));
    suite.push(Box::new(SnappyCodec));

    suite
}
