//! Huffman prefix tree.
//!
//! Nodes live in one arena and refer to their children by index, so the tree
//! owns everything through a single `Vec` and no node is ever shared. Weights
//! only matter while building and are thrown away once the root is known; a
//! tree rebuilt from a container has the same shape and no weights at all.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::frequency::FrequencyTable;

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8 },
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffTree {
    nodes:       Vec<Node>,
    root:        NodeId,
    /// Zero-weight sibling added for a single-symbol alphabet.
    placeholder: Option<NodeId>,
}

impl HuffTree {
    /// Builds the tree bottom-up from a min-heap of weights.
    ///
    /// Ties are broken by creation order: leaves are created in ascending
    /// symbol order, merged nodes after them, and among equal weights the node
    /// created first pops first. The first node popped becomes the left child.
    /// The same table therefore always yields the same tree.
    pub fn build(freq: &FrequencyTable) -> Self {
        let n = freq.distinct();
        let mut nodes:   Vec<Node> = Vec::with_capacity(2 * n + 1);
        let mut weights: Vec<u64>  = Vec::with_capacity(2 * n + 1);

        for (symbol, count) in freq.iter() {
            nodes.push(Node::Leaf { symbol });
            weights.push(count);
        }

        if n == 1 {
            return Self::with_placeholder(nodes);
        }

        let mut heap: BinaryHeap<(Reverse<u64>, Reverse<NodeId>)> = weights
            .iter()
            .enumerate()
            .map(|(id, &w)| (Reverse(w), Reverse(id)))
            .collect();

        let root = loop {
            match (heap.pop(), heap.pop()) {
                (Some((Reverse(w1), Reverse(left))), Some((Reverse(w2), Reverse(right)))) => {
                    let id = nodes.len();
                    nodes.push(Node::Internal { left, right });
                    weights.push(w1 + w2);
                    heap.push((Reverse(w1 + w2), Reverse(id)));
                }
                (Some((_, Reverse(last))), None) => break last,
                (None, _) => unreachable!("frequency table always holds a symbol"),
            }
        };

        log::trace!("built tree: {} leaves, {} nodes, root weight {}", n, nodes.len(), weights[root]);

        Self { nodes, root, placeholder: None }
    }

    /// A lone leaf cannot be the root: its code would be empty. Pair it with a
    /// placeholder leaf carrying a different symbol so the real one gets `0`.
    fn with_placeholder(mut nodes: Vec<Node>) -> Self {
        let symbol = match nodes[0] {
            Node::Leaf { symbol } => symbol,
            Node::Internal { .. } => unreachable!("only leaves exist before merging"),
        };
        nodes.push(Node::Leaf { symbol: symbol.wrapping_add(1) });
        nodes.push(Node::Internal { left: 0, right: 1 });
        Self { nodes, root: 2, placeholder: Some(1) }
    }

    /// Wraps an already validated arena. Used by the tree decoder.
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root < nodes.len());
        Self { nodes, root, placeholder: None }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_placeholder(&self, id: NodeId) -> bool {
        self.placeholder == Some(id)
    }

    /// Leaves including the placeholder, if any.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| matches!(n, Node::Leaf { .. })).count()
    }

    /// Depth of every real leaf, keyed by symbol. A lone-leaf root reports 1,
    /// the length of the code it is given.
    pub fn leaf_depths(&self) -> BTreeMap<u8, u32> {
        let mut depths = BTreeMap::new();
        let mut stack: Vec<(NodeId, u32)> = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { symbol } => {
                    if !self.is_placeholder(id) {
                        depths.insert(symbol, depth.max(1));
                    }
                }
                Node::Internal { left, right } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        depths
    }

    pub fn max_depth(&self) -> u32 {
        self.leaf_depths().values().copied().max().unwrap_or(0)
    }
}
