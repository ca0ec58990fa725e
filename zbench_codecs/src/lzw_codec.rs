use weezl::decode::Decoder;
use weezl::encode::Encoder;
use weezl::BitOrder;
use zbench_core::Codec;

/// Bit orders swept for LZW, in report order.
pub const LZW_ORDERS: [BitOrder; 2] = [BitOrder::Msb, BitOrder::Lsb];

/// Literal widths swept for LZW.
pub const LZW_LITERAL_WIDTHS: [u8; 1] = [8];

/// LZW codec with GIF-style variable-width codes (up to 12 bits).
///
/// The stream starts with a clear code and ends with an end-of-information
/// code, so a decoder configured with the same order and literal width can
/// restore it without any side channel.
pub struct LzwCodec {
    pub order: BitOrder,
    /// Bits per input symbol. Byte input needs 8.
    pub literal_width: u8,
}

impl LzwCodec {
    pub fn new(order: BitOrder, literal_width: u8) -> Self {
        Self {
            order,
            literal_width,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(2..=8).contains(&self.literal_width) {
            anyhow::bail!(
                "invalid lzw literal width {}; expected 2-8",
                self.literal_width
            );
        }
        Ok(())
    }
}

/// Numeric bit order as printed: LSB-first is 0, MSB-first is 1.
fn order_code(order: BitOrder) -> u8 {
    match order {
        BitOrder::Lsb => 0,
        BitOrder::Msb => 1,
    }
}

impl Codec for LzwCodec {
    fn name(&self) -> &'static str {
        "lzw"
    }

    fn params(&self) -> Option<String> {
        Some(format!("{}, {}", order_code(self.order), self.literal_width))
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.validate()?;
        Encoder::new(self.order, self.literal_width)
            .encode(raw)
            .map_err(|e| anyhow::anyhow!("lzw compress error: {}", e))
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.validate()?;
        Decoder::new(self.order, self.literal_width)
            .decode(compressed)
            .map_err(|e| anyhow::anyhow!("lzw decompress error: {}", e))
    }
}
