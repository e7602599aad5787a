//! Error type shared by every codec stage.

use std::fmt;
use std::io;

use thiserror::Error;

/// Part of the container that was being read when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Tree,
    Payload,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Header  => "header",
            Section::Tree    => "tree",
            Section::Payload => "payload",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum HuffError {
    /// Zero-length buffer handed to the compressor.
    #[error("input is empty")]
    EmptyInput,

    /// Source or sink failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// First four bytes are not `HUFF`. Short inputs are zero-filled.
    #[error("invalid magic {found:02x?}, not a .huff container")]
    InvalidMagic { found: [u8; 4] },

    #[error("container truncated in {section}")]
    TruncatedContainer { section: Section },

    #[error("corrupt tree: {reason}")]
    CorruptTree { reason: String },

    /// A byte in the input has no entry in the code table.
    #[error("no code for byte 0x{symbol:02x}")]
    MissingCode { symbol: u8 },
}

impl HuffError {
    /// Maps a bit-level read failure onto the section being decoded.
    /// End-of-source becomes `TruncatedContainer`, anything else stays `Io`.
    pub(crate) fn from_read(err: io::Error, section: Section) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            HuffError::TruncatedContainer { section }
        } else {
            HuffError::Io(err)
        }
    }

    pub(crate) fn corrupt_tree(reason: impl Into<String>) -> Self {
        HuffError::CorruptTree { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, HuffError>;
