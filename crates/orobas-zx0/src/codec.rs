//! ZX0 codec: one-shot compression wired to the workspace traits.

use std::time::Instant;

use orobas_core::{Algorithm, CompressionStats, Compressor, Error, Result};

use crate::block::BlockPool;
use crate::compress::encode;
use crate::optimize::optimize;

/// Largest input the bit-cost accounting accepts. Below this bound every
/// internal accumulator provably stays in range; larger inputs are rejected
/// instead of silently wrapping.
pub const MAX_INPUT_SIZE: usize = 1 << 29;

/// Result of a compression run.
#[derive(Debug, Clone)]
pub struct Zx0Output {
    /// The compressed stream, sized exactly to its content.
    pub bytes: Vec<u8>,
    /// Maximum lead of the write cursor over the read cursor during
    /// encoding; callers use it to size buffers for in-place,
    /// self-overwriting decompression.
    pub delta: usize,
    /// Operation statistics.
    pub stats: CompressionStats,
}

/// ZX0 compressor.
///
/// Defaults to the full 32640-byte offset window, no skipped prefix, and the
/// forward bit-interlacing direction.
#[derive(Debug, Clone)]
pub struct Zx0Codec {
    backwards: bool,
    skip: usize,
    offset_limit: usize,
}

impl Zx0Codec {
    /// Create a new ZX0 codec with default settings.
    pub fn new() -> Self {
        Zx0Codec {
            backwards: false,
            skip: 0,
            offset_limit: Algorithm::Zx0.max_offset(),
        }
    }

    /// Create a codec emitting the backwards stream variant, for decoders
    /// that read the stream from its end toward its start.
    pub fn backwards() -> Self {
        Zx0Codec {
            backwards: true,
            ..Zx0Codec::new()
        }
    }

    /// Exclude `skip` leading bytes from compression. The prefix is assumed
    /// to be stored elsewhere; it still seeds the back-reference window.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Restrict the back-reference window below the format maximum.
    pub fn with_offset_limit(mut self, offset_limit: usize) -> Self {
        self.offset_limit = offset_limit;
        self
    }

    /// Compress, returning the stream together with the in-place
    /// decompression safety margin and operation statistics.
    pub fn compress_with_margin(&self, input: &[u8]) -> Result<Zx0Output> {
        self.run(input, None)
    }

    /// Compress with a progress observer, invoked at fixed percentage
    /// milestones. The observer has no effect on the output.
    pub fn compress_with_progress(
        &self,
        input: &[u8],
        progress: &mut dyn FnMut(u8),
    ) -> Result<Zx0Output> {
        self.run(input, Some(progress))
    }

    fn run(&self, input: &[u8], progress: Option<&mut dyn FnMut(u8)>) -> Result<Zx0Output> {
        if input.len() > MAX_INPUT_SIZE {
            return Err(Error::input_too_large(input.len(), MAX_INPUT_SIZE));
        }
        let window = Algorithm::Zx0.max_offset();
        if self.offset_limit == 0 || self.offset_limit > window {
            return Err(Error::invalid_window(self.offset_limit, window));
        }

        let start = Instant::now();
        let mut pool = BlockPool::new();
        let terminal = optimize(&mut pool, input, self.skip, self.offset_limit, progress);
        let (bytes, delta) = encode(&mut pool, terminal, input, self.skip, self.backwards);

        let stats = CompressionStats::from_operation(
            Algorithm::Zx0,
            input.len(),
            bytes.len(),
            start.elapsed().as_micros() as u64,
        )
        .with_safety_margin(delta);

        Ok(Zx0Output {
            bytes,
            delta,
            stats,
        })
    }
}

impl Default for Zx0Codec {
    fn default() -> Self {
        Zx0Codec::new()
    }
}

impl Compressor for Zx0Codec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zx0
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(self.compress_with_margin(input)?.bytes)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let bytes = self.compress(input)?;
        if bytes.len() > output.len() {
            return Err(Error::buffer_too_small(bytes.len(), output.len()));
        }
        output[..bytes.len()].copy_from_slice(&bytes);
        Ok(bytes.len())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // One worst-case literal run plus end marker, rounded up generously.
        input_len + input_len / 8 + 8
    }

    fn stats(&self) -> Option<CompressionStats> {
        None
    }
}
