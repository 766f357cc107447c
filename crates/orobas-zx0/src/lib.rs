//! # Orobas ZX0
//!
//! Optimal-parsing LZ77 compressor emitting the ZX0 bit-packed stream
//! format used on 8-bit targets.
//!
//! Unlike greedy LZ parsers, the ZX0 parser runs a dynamic program over
//! every admissible literal/match decomposition of the input and picks the
//! one with globally minimal encoded bit length. The search allocates one
//! candidate decision per (position, offset) pair; a reference-counted
//! arena recycles decisions as soon as nothing reaches them, keeping memory
//! bounded by the live search frontier instead of the full search space.
//!
//! The encoder then serializes the winning chain: indicator bits,
//! interlaced Elias-gamma lengths, raw literal bytes, and offset bytes
//! whose lowest bit is patched retroactively with the first bit of the
//! following length code.
//!
//! ## Example
//!
//! ```ignore
//! use orobas_core::Compressor;
//! use orobas_zx0::Zx0Codec;
//!
//! let codec = Zx0Codec::new();
//! let packed = codec.compress(data)?;
//! ```
//!
//! Compression is sequential and self-contained: each call owns its arena
//! and trackers, so compressing several buffers concurrently just means one
//! codec call per thread.

mod block;
mod compress;
mod optimize;

pub mod codec;

// Re-export main types
pub use codec::{Zx0Codec, Zx0Output, MAX_INPUT_SIZE};
