//! # Orobas Core
//!
//! Core traits, types, and error handling for the Orobas compression
//! workspace.
//!
//! Orobas is named after the 55th demon of the Ars Goetia, who gives true
//! answers of things past, present, and to come - as a lossless compressor
//! must give back exactly the bytes it was fed.
//!
//! ## Design Philosophy
//!
//! - **Exact formats**: Every codec targets a fixed, decoder-defined bit
//!   layout; output sizes are computed, never guessed.
//! - **Self-contained runs**: A compression call owns all of its working
//!   state; nothing is shared between invocations.
//! - **Small seams**: One trait per responsibility, so codecs stay
//!   independently testable.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
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

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::CompressionStats;
pub use traits::Compressor;
pub use types::{Algorithm, CompressionRatio};
