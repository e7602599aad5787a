// src/tree_codec.rs
//! Pre-order tree serialization.
//!
//! Leaf:     tag 1, then the 8-bit symbol.
//! Internal: tag 0, then the left subtree, then the right subtree.
//!
//! The encoding is self-delimiting, so no node or symbol count is stored.
//! Both directions walk with an explicit stack.

use std::io::{self, Read, Write};

use crate::bitreader::BitSource;
use crate::bitwriter::BitSink;
use crate::error::{HuffError, Result, Section};
use crate::format::{ALPHABET_SIZE, MAX_TREE_DEPTH, TAG_INTERNAL, TAG_LEAF};
use crate::tree::{HuffTree, Node, NodeId};

pub fn serialize_tree<W: Write>(tree: &HuffTree, w: &mut BitSink<W>) -> io::Result<()> {
    let mut stack: Vec<NodeId> = vec![tree.root()];
    while let Some(id) = stack.pop() {
        match tree.node(id) {
            Node::Leaf { symbol } => {
                w.write_bit(TAG_LEAF)?;
                w.write_byte(symbol)?;
            }
            Node::Internal { left, right } => {
                w.write_bit(TAG_INTERNAL)?;
                stack.push(right);
                stack.push(left);
            }
        }
    }
    Ok(())
}

/// Rebuilds a tree written by [`serialize_tree`].
///
/// Rejects input that runs out mid-tree, nests deeper than any 256-symbol
/// tree can, or holds more than 256 leaves. A symbol may appear in more than
/// one leaf: some encoders give the single-symbol placeholder a fixed symbol.
pub fn deserialize_tree<R: Read>(r: &mut BitSource<R>) -> Result<HuffTree> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut leaves = 0usize;
    // internal nodes still waiting for children; flag = left already attached
    let mut open: Vec<(NodeId, bool)> = Vec::new();

    loop {
        if open.len() > MAX_TREE_DEPTH {
            return Err(HuffError::corrupt_tree(format!(
                "nesting exceeds {} levels",
                MAX_TREE_DEPTH
            )));
        }

        let tag = r.read_bit().map_err(|e| HuffError::from_read(e, Section::Tree))?;
        let id = nodes.len();

        if tag == TAG_LEAF {
            leaves += 1;
            if leaves > ALPHABET_SIZE {
                return Err(HuffError::corrupt_tree(format!(
                    "more than {} leaves",
                    ALPHABET_SIZE
                )));
            }
            let symbol = r.read_byte().map_err(|e| HuffError::from_read(e, Section::Tree))?;
            nodes.push(Node::Leaf { symbol });
        } else {
            // children are patched in as they are read
            nodes.push(Node::Internal { left: id, right: id });
        }

        if let Some(&(parent, has_left)) = open.last() {
            if let Node::Internal { left, right } = &mut nodes[parent] {
                if has_left { *right = id; } else { *left = id; }
            }
            if has_left {
                open.pop();
            } else if let Some(top) = open.last_mut() {
                top.1 = true;
            }
        }

        if tag == TAG_INTERNAL {
            open.push((id, false));
        }

        if open.is_empty() {
            break;
        }
    }

    log::trace!("decoded tree: {} nodes in {} bits", nodes.len(), r.bits_read());
    Ok(HuffTree::from_parts(nodes, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use std::io::Cursor;

    fn encode(tree: &HuffTree) -> (Vec<u8>, u64) {
        let mut out = Vec::new();
        let mut w = BitSink::new(&mut out);
        serialize_tree(tree, &mut w).unwrap();
        let bits = w.bits_written();
        w.flush().unwrap();
        (out, bits)
    }

    fn decode(bytes: &[u8]) -> Result<HuffTree> {
        deserialize_tree(&mut BitSource::new(Cursor::new(bytes)))
    }

    fn tree_for(input: &[u8]) -> HuffTree {
        HuffTree::build(&FrequencyTable::from_bytes(input).unwrap())
    }

    #[test]
    fn aaabbc_layout() {
        // 0 1A 0 1C 1B
        let (bytes, bits) = encode(&tree_for(b"AAABBC"));
        assert_eq!(bits, 2 + 3 * 9);
        let expected_bits = "0".to_string()
            + "1" + &format!("{:08b}", b'A')
            + "0"
            + "1" + &format!("{:08b}", b'C')
            + "1" + &format!("{:08b}", b'B');
        let actual: String = bytes.iter().map(|b| format!("{:08b}", b)).collect();
        assert_eq!(&actual[..expected_bits.len()], expected_bits);
    }

    #[test]
    fn roundtrip_keeps_depths() {
        for input in [&b"AAABBC"[..], &b"x"[..], &b"mississippi river"[..], &[0u8, 255, 255, 1][..]] {
            let tree = tree_for(input);
            let (bytes, _) = encode(&tree);
            let back = decode(&bytes).unwrap();
            assert_eq!(back.leaf_depths().len(), tree.leaf_count());
            for (sym, depth) in tree.leaf_depths() {
                assert_eq!(back.leaf_depths()[&sym], depth);
            }
        }
    }

    #[test]
    fn full_alphabet_fits_bound() {
        let input: Vec<u8> = (0u8..=255).collect();
        let (bytes, bits) = encode(&tree_for(&input));
        assert_eq!(bits as usize, crate::format::MAX_TREE_BITS);
        assert_eq!(decode(&bytes).unwrap().leaf_count(), 256);
    }

    #[test]
    fn lone_leaf_is_accepted() {
        // tag 1 + 0x41, padded
        let back = decode(&[0b1010_0000, 0b1000_0000]).unwrap();
        assert_eq!(back.node(back.root()), Node::Leaf { symbol: 0x41 });
    }

    #[test]
    fn truncated_tree() {
        let (bytes, _) = encode(&tree_for(b"AAABBC"));
        let err = decode(&bytes[..2]).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedContainer { section: Section::Tree }));
        let err = decode(&[]).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedContainer { section: Section::Tree }));
    }

    #[test]
    fn endless_internal_tags() {
        let err = decode(&[0u8; 64]).unwrap_err();
        assert!(matches!(err, HuffError::CorruptTree { .. }));
    }

    #[test]
    fn repeated_symbol_is_accepted() {
        // 0 1x00 1x00: single-symbol tree with a placeholder sharing the symbol
        let mut out = Vec::new();
        let mut w = BitSink::new(&mut out);
        w.write_bit(false).unwrap();
        w.write_bit(true).unwrap();
        w.write_byte(0x00).unwrap();
        w.write_bit(true).unwrap();
        w.write_byte(0x00).unwrap();
        w.flush().unwrap();
        let back = decode(&out).unwrap();
        assert_eq!(back.leaf_count(), 2);
        assert_eq!(back.node_count(), 3);
    }

    #[test]
    fn too_many_leaves() {
        // a right-leaning comb: 0 1x 0 1x 0 ... with 257 leaves, each symbol repeated
        let mut out = Vec::new();
        let mut w = BitSink::new(&mut out);
        for i in 0..256u32 {
            w.write_bit(false).unwrap();
            w.write_bit(true).unwrap();
            w.write_byte(i as u8).unwrap();
        }
        w.write_bit(true).unwrap();
        w.write_byte(0x00).unwrap();
        w.flush().unwrap();
        assert!(matches!(decode(&out), Err(HuffError::CorruptTree { .. })));
    }
}
