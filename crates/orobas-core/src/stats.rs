//! Statistics for compression operations.

use crate::types::{Algorithm, CompressionRatio};

/// Statistics from a completed compression operation.
#[derive(Debug, Clone, Default)]
pub struct CompressionStats {
    /// Algorithm used.
    pub algorithm: Option<Algorithm>,

    /// Original (uncompressed) size in bytes.
    pub original_size: usize,

    /// Compressed size in bytes.
    pub compressed_size: usize,

    /// Time taken in microseconds.
    pub time_us: u64,

    /// Maximum lead of the write cursor over the read cursor during
    /// encoding, for codecs whose format supports in-place decompression.
    pub safety_margin: Option<usize>,
}

impl CompressionStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stats from a completed operation.
    pub fn from_operation(
        algorithm: Algorithm,
        original_size: usize,
        compressed_size: usize,
        time_us: u64,
    ) -> Self {
        CompressionStats {
            algorithm: Some(algorithm),
            original_size,
            compressed_size,
            time_us,
            ..Default::default()
        }
    }

    /// Attach the in-place decompression safety margin.
    pub fn with_safety_margin(mut self, margin: usize) -> Self {
        self.safety_margin = Some(margin);
        self
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Get throughput in bytes per second.
    pub fn throughput_bps(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.original_size as f64 * 1_000_000.0 / self.time_us as f64
    }

    /// Get throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        self.throughput_bps() / 1_000_000.0
    }

    /// Get space savings as percentage.
    pub fn savings_percent(&self) -> f64 {
        self.ratio().savings_percent()
    }
}
