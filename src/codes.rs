//! Symbol → code table derived from a tree's root-to-leaf paths.

use bitvec::prelude::*;

use crate::format::ALPHABET_SIZE;
use crate::tree::{HuffTree, Node, NodeId};

pub type Code = BitVec<u8, Msb0>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Left edges are `0`, right edges `1`. Every code is at least one bit
    /// long: a root that is itself a leaf gets `0`.
    pub fn from_tree(tree: &HuffTree) -> Self {
        let mut codes: Vec<Option<Code>> = vec![None; ALPHABET_SIZE];
        let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::new())];

        while let Some((id, path)) = stack.pop() {
            match tree.node(id) {
                Node::Leaf { symbol } => {
                    if tree.is_placeholder(id) {
                        continue;
                    }
                    let code = if path.is_empty() { bitvec![u8, Msb0; 0] } else { path };
                    codes[symbol as usize] = Some(code);
                }
                Node::Internal { left, right } => {
                    let mut r = path.clone();
                    r.push(true);
                    stack.push((right, r));
                    let mut l = path;
                    l.push(false);
                    stack.push((left, l));
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[symbol as usize].as_deref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_deref().map(|c| (s as u8, c)))
    }

    /// Total payload bits needed to encode `input` with this table.
    pub fn encoded_bits(&self, input: &[u8]) -> Option<u64> {
        input
            .iter()
            .map(|&b| self.get(b).map(|c| c.len() as u64))
            .sum()
    }

    /// No code is a prefix of another. Quadratic; meant for checks and tests.
    pub fn is_prefix_free(&self) -> bool {
        let all: Vec<_> = self.iter().collect();
        for (i, &(_, a)) in all.iter().enumerate() {
            for (j, &(_, b)) in all.iter().enumerate() {
                if i != j && b.starts_with(a) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn table_for(input: &[u8]) -> CodeTable {
        let freq = FrequencyTable::from_bytes(input).unwrap();
        CodeTable::from_tree(&HuffTree::build(&freq))
    }

    #[test]
    fn aaabbc_codes() {
        let t = table_for(b"AAABBC");
        assert_eq!(t.get(b'A').unwrap(), bits![u8, Msb0; 0]);
        assert_eq!(t.get(b'C').unwrap(), bits![u8, Msb0; 1, 0]);
        assert_eq!(t.get(b'B').unwrap(), bits![u8, Msb0; 1, 1]);
        assert_eq!(t.len(), 3);
        assert!(t.is_prefix_free());
        assert_eq!(t.encoded_bits(b"AAABBC"), Some(9));
    }

    #[test]
    fn single_symbol_code_is_one_bit() {
        let t = table_for(&[0xFF]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(0xFF).unwrap(), bits![u8, Msb0; 0]);
        // placeholder symbol gets no code
        assert!(t.get(0x00).is_none());
    }

    #[test]
    fn lone_leaf_root_is_forced_to_zero() {
        let tree = HuffTree::from_parts(vec![Node::Leaf { symbol: 7 }], 0);
        let t = CodeTable::from_tree(&tree);
        assert_eq!(t.get(7).unwrap(), bits![u8, Msb0; 0]);
    }

    #[test]
    fn unknown_byte_has_no_bit_count() {
        let t = table_for(b"abc");
        assert_eq!(t.encoded_bits(b"abd"), None);
    }

    #[test]
    fn code_lengths_match_depths() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let freq = FrequencyTable::from_bytes(input).unwrap();
        let tree = HuffTree::build(&freq);
        let t = CodeTable::from_tree(&tree);
        for (sym, depth) in tree.leaf_depths() {
            assert_eq!(t.get(sym).unwrap().len() as u32, depth);
        }
        assert!(t.is_prefix_free());
        assert!(t.iter().all(|(_, c)| !c.is_empty()));
    }
}
