//! Core type definitions for compression operations.

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// ZX0 - optimal-parsing LZ77 with a 32640-byte window, targeting
    /// 8-bit machines.
    Zx0,
    /// ZX7 - the earlier format with a 2176-byte window and a different
    /// literal-count encoding. Reserved; no codec in this workspace
    /// implements it yet.
    Zx7,
}

impl Algorithm {
    /// Get algorithm name as string.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Zx0 => "zx0",
            Algorithm::Zx7 => "zx7",
        }
    }

    /// Maximum back-reference distance the format can express.
    pub fn max_offset(self) -> usize {
        match self {
            Algorithm::Zx0 => 32640,
            Algorithm::Zx7 => 2176,
        }
    }
}

/// Compression ratio metrics.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRatio {
    /// Original uncompressed size in bytes.
    pub original_size: usize,
    /// Compressed size in bytes.
    pub compressed_size: usize,
}

impl CompressionRatio {
    /// Create new ratio from sizes.
    pub fn new(original: usize, compressed: usize) -> Self {
        CompressionRatio {
            original_size: original,
            compressed_size: compressed,
        }
    }

    /// Calculate ratio (original / compressed).
    /// Higher is better (more compression).
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.compressed_size as f64
    }

    /// Calculate space savings as percentage (0-100).
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - (self.compressed_size as f64 / self.original_size as f64)) * 100.0
    }

    /// Calculate bytes saved.
    pub fn bytes_saved(&self) -> isize {
        self.original_size as isize - self.compressed_size as isize
    }

    /// Check if compression was effective (saved space).
    pub fn is_effective(&self) -> bool {
        self.compressed_size < self.original_size
    }
}
