//! Harness tests: report arithmetic, pass ordering, and the three fatal
//! failure classes, driven through small hand-written codecs so every
//! outcome is exact.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use zbench_codecs::default_suite;
use zbench_core::report::{
    average_secs, coefficient, compression_time_line, decompression_time_line,
    original_size_line, ratio_line, size_kb,
};
use zbench_core::{ratio_pass, speed_pass, BenchError, Codec, Stage};

/// Generate `len` highly compressible bytes (repeating pattern).
fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog. ";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// ── test codecs ───────────────────────────────────────────────────────────

/// Stores the input behind a 4-byte length prefix.
struct StoreCodec;

impl Codec for StoreCodec {
    fn name(&self) -> &'static str {
        "store"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut out = (raw.len() as u32).to_le_bytes().to_vec();
        out.extend_from_slice(raw);
        Ok(out)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(compressed[4..].to_vec())
    }
}

/// Round-trips everything except the first byte, which it flips.
struct CorruptCodec;

impl Codec for CorruptCodec {
    fn name(&self) -> &'static str {
        "corrupt"
    }

    fn params(&self) -> Option<String> {
        Some("7".to_string())
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(raw.to_vec())
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = compressed.to_vec();
        if let Some(b) = raw.first_mut() {
            *b ^= 0xff;
        }
        Ok(raw)
    }
}

/// Fails at the configured stage.
struct FailingCodec {
    stage: Stage,
}

impl Codec for FailingCodec {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        match self.stage {
            Stage::Compress => anyhow::bail!("level rejected"),
            Stage::Decompress => Ok(raw.to_vec()),
        }
    }

    fn decompress(&self, _compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        anyhow::bail!("corrupt stream")
    }
}

/// Counts calls. Each compressed payload is prefixed with the number of the
/// compress call that produced it, and decompress records the prefix it saw.
#[derive(Default)]
struct CountingCodec {
    compress_calls: AtomicUsize,
    decompress_calls: AtomicUsize,
    last_sample_seen: AtomicUsize,
}

impl Codec for CountingCodec {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        let call = self.compress_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut out = (call as u32).to_le_bytes().to_vec();
        out.extend_from_slice(raw);
        Ok(out)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.decompress_calls.fetch_add(1, Ordering::SeqCst);
        let call = u32::from_le_bytes(compressed[..4].try_into()?);
        self.last_sample_seen.store(call as usize, Ordering::SeqCst);
        Ok(compressed[4..].to_vec())
    }
}

// ── report arithmetic ─────────────────────────────────────────────────────

#[test]
fn test_sizes_truncate_to_whole_kb() {
    assert_eq!(size_kb(0), 0);
    assert_eq!(size_kb(1023), 0);
    assert_eq!(size_kb(1024), 1);
    assert_eq!(size_kb(2047), 1);
    assert_eq!(original_size_line(10 * 1024 + 1023), "Original size: 10kb");
}

#[test]
fn test_ratio_line_format() {
    assert_eq!(
        ratio_line("zlib(9)", 4096, 2048),
        "zlib(9) compressed size: 2kb; compression coefficient: 2.00"
    );
    assert_eq!(
        ratio_line("lzma", 1000, 3),
        "lzma compressed size: 0kb; compression coefficient: 333.33"
    );
    // Expansion is reported, not rejected.
    assert_eq!(
        ratio_line("snappy", 2048, 2100),
        "snappy compressed size: 2kb; compression coefficient: 0.98"
    );
    assert!((coefficient(3000, 1000) - 3.0).abs() < 1e-12);
}

#[test]
fn test_average_time_divides_by_repeats() {
    let avg = average_secs(Duration::from_millis(1500), 10);
    assert!((avg - 0.15).abs() < 1e-12, "avg={avg}");
    assert_eq!(
        compression_time_line("lz4(0, 65536)", 0.126),
        "lz4(0, 65536) average compression time: 0.13s"
    );
    assert_eq!(
        decompression_time_line("gzip(-2)", 2.0),
        "gzip(-2) average decompression time: 2.00s"
    );
}

#[test]
fn test_label_omits_parentheses_without_params() {
    assert_eq!(StoreCodec.label(), "store");
    assert_eq!(CorruptCodec.label(), "corrupt(7)");
}

// ── ratio pass ────────────────────────────────────────────────────────────

#[test]
fn test_ratio_pass_reports_header_and_each_trial() {
    let data = compressible_bytes(4096);
    let codecs: Vec<Box<dyn Codec>> = vec![Box::new(StoreCodec), Box::new(StoreCodec)];
    let mut out = Vec::new();

    let trials = ratio_pass(&data, &codecs, &mut out).unwrap();

    assert_eq!(trials.len(), 2);
    assert_eq!(trials[0].compressed_len, 4100);
    assert!((trials[0].coefficient - 4096.0 / 4100.0).abs() < 1e-12);
    assert_eq!(
        lines(&out),
        vec![
            "Original size: 4kb",
            "store compressed size: 4kb; compression coefficient: 1.00",
            "store compressed size: 4kb; compression coefficient: 1.00",
        ]
    );
}

#[test]
fn test_ratio_pass_round_trip_mismatch_is_fatal() {
    let data = compressible_bytes(100);
    let codecs: Vec<Box<dyn Codec>> = vec![
        Box::new(StoreCodec),
        Box::new(CorruptCodec),
        Box::new(StoreCodec),
    ];
    let mut out = Vec::new();

    let err = ratio_pass(&data, &codecs, &mut out).unwrap_err();
    match &err {
        BenchError::RoundTrip {
            label,
            expected,
            actual,
        } => {
            assert_eq!(label, "corrupt(7)");
            assert_eq!(*expected, 100);
            assert_eq!(*actual, 100);
        }
        other => panic!("expected RoundTrip, got {other:?}"),
    }
    assert!(err.to_string().contains("corrupt(7) decompression wrong"));

    // No trial after the failing one ran.
    let report = lines(&out);
    assert_eq!(report.len(), 3);
    assert!(report[2].starts_with("corrupt(7) compressed size:"));
}

#[test]
fn test_codec_errors_name_the_stage() {
    let data = compressible_bytes(10);

    for stage in [Stage::Compress, Stage::Decompress] {
        let codecs: Vec<Box<dyn Codec>> = vec![Box::new(FailingCodec { stage })];
        let err = ratio_pass(&data, &codecs, &mut Vec::new()).unwrap_err();
        match err {
            BenchError::Codec {
                label,
                stage: failed,
                ..
            } => {
                assert_eq!(label, "failing");
                assert_eq!(failed, stage);
            }
            other => panic!("expected Codec error, got {other:?}"),
        }
    }

    let codecs: Vec<Box<dyn Codec>> = vec![Box::new(FailingCodec {
        stage: Stage::Compress,
    })];
    let err = ratio_pass(&data, &codecs, &mut Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failing compression failed: level rejected"
    );
}

#[test]
fn test_empty_input_ratio_pass() {
    let codecs: Vec<Box<dyn Codec>> = vec![Box::new(StoreCodec)];
    let mut out = Vec::new();
    let trials = ratio_pass(&[], &codecs, &mut out).unwrap();
    assert_eq!(trials[0].compressed_len, 4);
    assert_eq!(trials[0].coefficient, 0.0);
    assert_eq!(lines(&out)[0], "Original size: 0kb");
}

// ── speed pass ────────────────────────────────────────────────────────────

#[test]
fn test_speed_pass_call_counts_and_fresh_sample() {
    let data = compressible_bytes(1000);
    let codec = std::sync::Arc::new(CountingCodec::default());

    struct Shared(std::sync::Arc<CountingCodec>);
    impl Codec for Shared {
        fn name(&self) -> &'static str {
            self.0.name()
        }
        fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
            self.0.compress(raw)
        }
        fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
            self.0.decompress(compressed)
        }
    }

    let codecs: Vec<Box<dyn Codec>> = vec![Box::new(Shared(codec.clone()))];
    let mut out = Vec::new();
    let trials = speed_pass(&data, &codecs, 3, &mut out).unwrap();

    // 3 timed compressions + 1 sample; 3 timed decompressions.
    assert_eq!(codec.compress_calls.load(Ordering::SeqCst), 4);
    assert_eq!(codec.decompress_calls.load(Ordering::SeqCst), 3);
    // Decompression ran on the sample made after the timed loop.
    assert_eq!(codec.last_sample_seen.load(Ordering::SeqCst), 4);

    assert_eq!(trials.len(), 1);
    assert!(trials[0].compress_secs >= 0.0);
    assert!(trials[0].decompress_secs >= 0.0);

    let report = lines(&out);
    assert_eq!(report.len(), 2);
    assert!(report[0].starts_with("counting average compression time: "));
    assert!(report[0].ends_with('s'));
    assert!(report[1].starts_with("counting average decompression time: "));
}

#[test]
fn test_speed_pass_stops_on_codec_error() {
    let codecs: Vec<Box<dyn Codec>> = vec![Box::new(FailingCodec {
        stage: Stage::Decompress,
    })];
    let mut out = Vec::new();
    let err = speed_pass(b"data", &codecs, 2, &mut out).unwrap_err();
    assert!(matches!(
        err,
        BenchError::Codec {
            stage: Stage::Decompress,
            ..
        }
    ));
    // The compression line made it out before decompression failed.
    assert_eq!(lines(&out).len(), 1);
}

// ── ordering over the real suite ──────────────────────────────────────────

fn expected_labels() -> Vec<String> {
    let deflate_levels = ["-2", "1", "3", "5", "7", "9"];
    let mut labels = Vec::new();
    for name in ["zlib", "gzip"] {
        for l in deflate_levels {
            labels.push(format!("{name}({l})"));
        }
    }
    labels.push("lzw(1, 8)".to_string());
    labels.push("lzw(0, 8)".to_string());
    for l in deflate_levels {
        labels.push(format!("flate({l})"));
    }
    for level in [0, 1, 3, 5, 7, 9] {
        for block in [65536, 262144, 1048576, 4194304] {
            labels.push(format!("lz4({level}, {block})"));
        }
    }
    labels.push("lzma".to_string());
    labels.push("lzma2".to_string());
    labels.push("snappy".to_string());
    labels
}

#[test]
fn test_both_passes_follow_suite_order() {
    let data = compressible_bytes(8 * 1024);
    let suite = default_suite();
    assert_eq!(suite.len(), 47);

    let mut ratio_out = Vec::new();
    let ratio = ratio_pass(&data, &suite, &mut ratio_out).unwrap();
    let ratio_labels: Vec<String> = ratio.iter().map(|t| t.label.clone()).collect();
    assert_eq!(ratio_labels, expected_labels());
    assert_eq!(lines(&ratio_out).len(), 48);

    let mut speed_out = Vec::new();
    let speed = speed_pass(&data, &suite, 1, &mut speed_out).unwrap();
    let speed_labels: Vec<String> = speed.iter().map(|t| t.label.clone()).collect();
    assert_eq!(speed_labels, expected_labels());

    let report = lines(&speed_out);
    assert_eq!(report.len(), 94);
    for (pair, label) in report.chunks(2).zip(expected_labels()) {
        assert!(pair[0].starts_with(&format!("{label} average compression time: ")));
        assert!(pair[1].starts_with(&format!("{label} average decompression time: ")));
    }
}
