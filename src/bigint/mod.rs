//! Multi-block unsigned integers. Each operation decomposes into per-block
//! [`Uint`] operations plus cross-block carry or borrow bookkeeping owned by
//! this layer.

mod add;
mod bits;
mod cmp;
mod std;
mod sub;

use crate::uint::Uint;

/// An arbitrary-precision unsigned integer: 64-bit blocks in little-endian
/// order, block 0 least significant.
///
/// Values are kept canonical: no most-significant zero block, and zero is
/// the empty block sequence. Operations never mutate their operands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigNumber {
    blocks: Vec<Uint>,
}

impl BigNumber {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a value from little-endian blocks, stripping most-significant
    /// zero blocks.
    pub fn from_blocks(blocks: Vec<Uint>) -> Self {
        let mut number = Self { blocks };
        number.clear_leading_zeros();
        number
    }

    /// Blocks in little-endian order.
    pub fn blocks(&self) -> &[Uint] {
        &self.blocks
    }

    pub fn is_zero(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of significant bits; 0 for zero.
    pub fn bit_length(&self) -> usize {
        match self.blocks.last() {
            Some(top) => {
                (self.blocks.len() - 1) * Uint::BINARY_LEN
                    + (u64::BITS - top.value().leading_zeros()) as usize
            }
            None => 0,
        }
    }

    fn clear_leading_zeros(&mut self) {
        while self.blocks.last().is_some_and(|block| block.is_zero()) {
            self.blocks.pop();
        }
    }

    /// Block at `i`, zero-extending past the most significant block.
    fn block(&self, i: usize) -> Uint {
        self.blocks.get(i).copied().unwrap_or_default()
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_blocks(vec![Uint::new(value)])
    }
}
