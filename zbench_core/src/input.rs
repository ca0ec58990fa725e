use std::path::Path;

use tracing::info;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{BenchError, Result};

/// Default benchmark input, relative to the working directory.
pub const DEFAULT_INPUT: &str = "./test.wasm";

/// Read the whole benchmark input into memory.
///
/// Logs the size and xxh3-64 digest so two reports can be checked against
/// the same input before they are diffed.
pub fn load_input(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| BenchError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        raw_len = data.len(),
        xxh3 = %format!("{:016x}", xxh3_64(&data)),
        "input loaded"
    );
    Ok(data)
}
