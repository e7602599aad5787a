//! Container constants — shared by encoder and decoder.
//! Single source of truth for header layout and tree limits.

// ── Header ────────────────────────────────────────────────────────────────────
/// ASCII marker at offset 0.
pub const MAGIC: [u8; 4] = *b"HUFF";
pub const MAGIC_BYTES: usize = MAGIC.len();

/// Original length, u64 little-endian, at offset 4.
pub const LENGTH_BYTES: usize = 8;

/// Tree + payload bitstream starts here.
pub const HEADER_BYTES: usize = MAGIC_BYTES + LENGTH_BYTES;   // 12

// ── Tree encoding ─────────────────────────────────────────────────────────────
pub const SYMBOL_BITS: u32 = 8;
pub const ALPHABET_SIZE: usize = 256;

/// Tag bit in front of every serialized node.
pub const TAG_LEAF:     bool = true;
pub const TAG_INTERNAL: bool = false;

/// A full binary tree with 256 leaves is at most 255 levels deep.
pub const MAX_TREE_DEPTH: usize = ALPHABET_SIZE - 1;

/// Upper bound on serialized tree size: 511 tag bits + 256 symbols.
pub const MAX_TREE_BITS: usize = (2 * ALPHABET_SIZE - 1) + ALPHABET_SIZE * SYMBOL_BITS as usize;

// ── Decoding ──────────────────────────────────────────────────────────────────
/// Output buffers are pre-sized up to this many bytes; a header can claim any
/// length, so anything beyond grows on demand.
pub const PREALLOC_LIMIT: usize = 1 << 24;

// ── Files ─────────────────────────────────────────────────────────────────────
pub const FILE_EXTENSION: &str = "huff";
pub const RESTORED_SUFFIX: &str = "_restored";

/// Serialized tree size for a tree with `leaves` leaves.
pub fn tree_bits(leaves: usize) -> usize {
    debug_assert!(leaves >= 1);
    (2 * leaves - 1) + leaves * SYMBOL_BITS as usize
}
