//! LZW compressor for arbitrary files.
//!
//! Stages:
//! 1. Canonicalization — raw bytes to printable-ASCII text and back
//! 2. Dictionary — seeded, growable sequence <-> code table
//! 3. Encoder — greedy longest-match LZW over canonical text
//! 4. Decoder — code stream expansion, growing its table in lockstep
//! 5. Container — fixed-width big-endian code file

pub mod alphabet;
pub mod canonical;
pub mod codec;
pub mod config;
pub mod container;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod error;

pub use codec::{compress, decompress, CompressionStats, LzwCodec};
pub use config::{LzwConfig, TrailingBytesPolicy};
pub use decoder::Decoder;
pub use dictionary::Dictionary;
pub use encoder::Encoder;
pub use error::{LzwError, Result};
