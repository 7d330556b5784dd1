use core::ops::Add;

use crate::bigint::BigNumber;
use crate::uint::Uint;

impl BigNumber {
    /// Block-wise sum, least significant block first, with an explicit carry
    /// block. Carries are re-derived by value comparison instead of a
    /// hardware flag: a 64-bit add wrapped exactly when its result is
    /// smaller than an input, and a block sum plus a 0/1 carry can wrap at
    /// most once. A carry left over after the last position appends one
    /// final block.
    pub fn add(&self, other: &Self) -> Self {
        let len = self.blocks.len().max(other.blocks.len());
        let mut blocks = Vec::with_capacity(len + 1);
        let mut carry = Uint::zero();
        for i in 0..len {
            let a = self.block(i);
            let b = other.block(i);
            let partial = a.add(b);
            let mut overflowed = partial.value() < a.value();
            let sum = partial.add(carry);
            overflowed |= sum.value() < partial.value();
            blocks.push(sum);
            carry = if overflowed { Uint::one() } else { Uint::zero() };
        }
        if !carry.is_zero() {
            blocks.push(carry);
        }
        Self::from_blocks(blocks)
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: Self) -> BigNumber {
        BigNumber::add(self, rhs)
    }
}
