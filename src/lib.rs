// src/lib.rs
//! huffpack — static Huffman file compression.
//!
//! One tree per input, built from byte frequencies and stored in the
//! container itself, so a `.huff` file decodes with nothing else at hand.
//!
//! ```
//! let packed = huffpack::compress(b"AAABBC")?;
//! assert_eq!(&packed[..4], b"HUFF");
//! assert_eq!(huffpack::decompress(&packed)?, b"AAABBC");
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! Compression: bytes → [`frequency`] → [`tree`] → [`codes`] →
//! [`tree_codec`] + [`encoder`] → [`container`].
//! Decompression runs the header, [`tree_codec`] and [`decoder`] in turn.
pub mod bitreader;
pub mod bitwriter;
pub mod codes;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod frequency;
pub mod tree;
pub mod tree_codec;

pub use container::{compress, compress_to, decompress, decompress_from, CompressStats, Header};
pub use error::{HuffError, Result, Section};
