//! Payload decoder: walks the tree one bit at a time.
//!
//! Termination is driven only by the symbol count from the header. The final
//! byte of a container carries up to seven zero padding bits that look exactly
//! like payload, so running until the source is empty would over-decode.

use std::io::Read;

use crate::bitreader::BitSource;
use crate::error::{HuffError, Result, Section};
use crate::format::PREALLOC_LIMIT;
use crate::tree::{HuffTree, Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AtRoot,
    /// Sitting on an internal node, children known.
    Traversing { left: NodeId, right: NodeId },
    LeafEmitted,
    Done,
}

pub fn decode_payload<R: Read>(
    tree:         &HuffTree,
    r:            &mut BitSource<R>,
    original_len: usize,
) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(original_len.min(PREALLOC_LIMIT));
    let mut state = if original_len == 0 { State::Done } else { State::AtRoot };

    loop {
        state = match state {
            State::AtRoot => match tree.node(tree.root()) {
                // lone-leaf root: its only code is `0`
                Node::Leaf { symbol } => {
                    if next_bit(r)? {
                        return Err(HuffError::corrupt_tree(
                            "payload bit 1 under a single-leaf tree",
                        ));
                    }
                    output.push(symbol);
                    State::LeafEmitted
                }
                Node::Internal { left, right } => State::Traversing { left, right },
            },
            State::Traversing { left, right } => {
                let child = if next_bit(r)? { right } else { left };
                match tree.node(child) {
                    Node::Leaf { symbol } => {
                        output.push(symbol);
                        State::LeafEmitted
                    }
                    Node::Internal { left, right } => State::Traversing { left, right },
                }
            }
            State::LeafEmitted => {
                if output.len() == original_len { State::Done } else { State::AtRoot }
            }
            State::Done => break,
        };
    }

    Ok(output)
}

fn next_bit<R: Read>(r: &mut BitSource<R>) -> Result<bool> {
    r.read_bit().map_err(|e| HuffError::from_read(e, Section::Payload))
}
