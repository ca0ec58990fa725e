use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which half of a trial a codec failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Compress,
    Decompress,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Compress => f.write_str("compression"),
            Stage::Decompress => f.write_str("decompression"),
        }
    }
}

/// Every way a benchmark run can fail. None of them are recoverable: the
/// driver surfaces the first one and exits.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The input file could not be read.
    #[error("failed to read input {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A codec rejected its configuration or failed to process the data.
    #[error("{label} {stage} failed: {source:#}")]
    Codec {
        label: String,
        stage: Stage,
        #[source]
        source: anyhow::Error,
    },

    /// Decompressed output differs from the original input.
    #[error("{label} decompression wrong: expected {expected} bytes, got {actual} bytes that differ from the input")]
    RoundTrip {
        label: String,
        expected: usize,
        actual: usize,
    },

    /// Writing a report line failed.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
