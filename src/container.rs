//! `.huff` container: header, then tree and payload in one bitstream.
//!
//! ```text
//!   Bytes 0..4    magic "HUFF"
//!   Bytes 4..12   original length, u64 little-endian
//!   Byte  12..    pre-order tree bits, then payload bits, zero-padded
//!                 to a byte boundary
//! ```

use std::io::{Cursor, Read, Write};

use crate::bitreader::BitSource;
use crate::bitwriter::BitSink;
use crate::codes::CodeTable;
use crate::decoder::decode_payload;
use crate::encoder::encode_payload;
use crate::error::{HuffError, Result, Section};
use crate::format::{self, HEADER_BYTES, LENGTH_BYTES, MAGIC, MAGIC_BYTES};
use crate::frequency::FrequencyTable;
use crate::tree::HuffTree;
use crate::tree_codec::{deserialize_tree, serialize_tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub original_len: u64,
}

impl Header {
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&self.original_len.to_le_bytes())?;
        Ok(())
    }

    /// A stream that ends inside the magic, including an empty one, is a
    /// truncated header; any other mismatch is `InvalidMagic`.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self> {
        let mut magic = Vec::with_capacity(MAGIC_BYTES);
        r.by_ref().take(MAGIC_BYTES as u64).read_to_end(&mut magic)?;
        if magic.len() < MAGIC_BYTES && MAGIC.starts_with(&magic) {
            return Err(HuffError::TruncatedContainer { section: Section::Header });
        }
        if magic != MAGIC {
            let mut found = [0u8; MAGIC_BYTES];
            found[..magic.len()].copy_from_slice(&magic);
            return Err(HuffError::InvalidMagic { found });
        }

        let mut len_bytes = [0u8; LENGTH_BYTES];
        r.read_exact(&mut len_bytes)
            .map_err(|e| HuffError::from_read(e, Section::Header))?;
        Ok(Header { original_len: u64::from_le_bytes(len_bytes) })
    }
}

/// Sizes from one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    pub original_bytes:   u64,
    pub compressed_bytes: u64,
    pub tree_bits:        u64,
    pub payload_bits:     u64,
    pub distinct_symbols: usize,
    pub max_code_len:     u32,
}

impl CompressStats {
    /// compressed / original
    pub fn ratio(&self) -> f64 {
        self.compressed_bytes as f64 / self.original_bytes as f64
    }

    /// Negative when the container is larger than the input.
    pub fn savings_percent(&self) -> f64 {
        (1.0 - self.ratio()) * 100.0
    }
}

/// Compresses `input` into `sink`. Nothing is written for empty input.
pub fn compress_to<W: Write>(input: &[u8], mut sink: W) -> Result<CompressStats> {
    let freq  = FrequencyTable::from_bytes(input)?;
    let tree  = HuffTree::build(&freq);
    let table = CodeTable::from_tree(&tree);

    Header { original_len: input.len() as u64 }.write_to(&mut sink)?;

    let mut w = BitSink::new(&mut sink);
    serialize_tree(&tree, &mut w)?;
    let tree_bits = w.bits_written();
    debug_assert_eq!(tree_bits as usize, format::tree_bits(tree.leaf_count()));
    debug_assert!(!table.is_empty());

    encode_payload(input, &table, &mut w)?;
    let payload_bits = w.bits_written() - tree_bits;
    debug_assert_eq!(Some(payload_bits), table.encoded_bits(input));
    w.flush()?;

    let stats = CompressStats {
        original_bytes:   freq.total(),
        compressed_bytes: HEADER_BYTES as u64 + (tree_bits + payload_bits).div_ceil(8),
        tree_bits,
        payload_bits,
        distinct_symbols: freq.distinct(),
        max_code_len:     tree.max_depth(),
    };

    log::debug!(
        "compressed {} → {} bytes ({} symbols, max code {} bits, tree {} bits, payload {} bits)",
        stats.original_bytes, stats.compressed_bytes, stats.distinct_symbols,
        stats.max_code_len, stats.tree_bits, stats.payload_bits
    );

    Ok(stats)
}

pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(HEADER_BYTES + input.len() / 2);
    compress_to(input, &mut output)?;
    Ok(output)
}

/// Decodes a container read from `source`. The whole container is consumed
/// before anything is returned; no partial output is ever produced.
pub fn decompress_from<R: Read>(mut source: R) -> Result<Vec<u8>> {
    let header = Header::read_from(&mut source)?;
    decode_body(header, source)
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(input);
    let header = Header::read_from(&mut cursor)?;

    // every symbol costs at least one bit
    let body_bits = (input.len() - HEADER_BYTES) as u64 * 8;
    if header.original_len > body_bits {
        return Err(HuffError::TruncatedContainer { section: Section::Payload });
    }

    decode_body(header, cursor)
}

fn decode_body<R: Read>(header: Header, source: R) -> Result<Vec<u8>> {
    let original_len = usize::try_from(header.original_len)
        .map_err(|_| HuffError::TruncatedContainer { section: Section::Payload })?;

    let mut r = BitSource::new(source);
    let tree = deserialize_tree(&mut r)?;
    let tree_bits = r.bits_read();
    let output = decode_payload(&tree, &mut r, original_len)?;

    log::debug!(
        "decompressed {} bytes (tree {} bits, payload {} bits)",
        output.len(), tree_bits, r.bits_read() - tree_bits
    );

    Ok(output)
}
