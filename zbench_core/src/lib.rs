pub mod codec;
pub mod error;
pub mod input;
pub mod ratio;
pub mod report;
pub mod speed;

pub use codec::Codec;
pub use error::{BenchError, Result, Stage};
pub use input::{load_input, DEFAULT_INPUT};
pub use ratio::{ratio_pass, RatioTrial};
pub use speed::{speed_pass, SpeedTrial};

/// Default number of timed iterations per speed-pass loop.
pub const DEFAULT_REPEATS: u32 = 10;
