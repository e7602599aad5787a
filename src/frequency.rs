//! Byte frequency counting.

use crate::error::{HuffError, Result};
use crate::format::ALPHABET_SIZE;

/// Occurrence count per byte value. Never empty: at least one symbol has a
/// non-zero count, and the counts sum to the input length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        if input.is_empty() {
            return Err(HuffError::EmptyInput);
        }
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in input {
            counts[byte as usize] += 1;
        }
        Ok(Self { counts })
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Present symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}
