use core::ops::{Rem, Sub};

use crate::bigint::BigNumber;
use crate::error::Error;
use crate::uint::Uint;

impl BigNumber {
    /// Block-wise difference with an explicit borrow block, symmetric to
    /// addition: a 64-bit subtract wrapped exactly when its result exceeds
    /// the value it was taken from. Fails with [`Error::NegativeResult`]
    /// when the minuend is less than the subtrahend, since the type has no
    /// representation for negative magnitudes.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        if self.less_than(other) {
            return Err(Error::NegativeResult);
        }
        let mut blocks = Vec::with_capacity(self.blocks.len());
        let mut borrow = Uint::zero();
        for i in 0..self.blocks.len() {
            let a = self.blocks[i];
            let b = other.block(i);
            let partial = a.sub(b);
            let mut underflowed = partial.value() > a.value();
            let difference = partial.sub(borrow);
            underflowed |= difference.value() > partial.value();
            blocks.push(difference);
            borrow = if underflowed { Uint::one() } else { Uint::zero() };
        }
        Ok(Self::from_blocks(blocks))
    }

    /// Remainder by repeated subtraction: subtract `other` while the working
    /// value is not less than it. Linear in the quotient, not the bit
    /// length, so this stands in only until real division exists. A modulus
    /// larger than the dividend returns the dividend; a zero modulus fails
    /// with [`Error::DivisionByZero`].
    pub fn modulo(&self, other: &Self) -> Result<Self, Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut remainder = self.clone();
        while !remainder.less_than(other) {
            remainder = remainder.sub(other)?;
        }
        Ok(remainder)
    }
}

impl Sub for &BigNumber {
    type Output = BigNumber;

    /// Panics when the subtrahend is larger, like `num-bigint` does.
    fn sub(self, rhs: Self) -> BigNumber {
        match BigNumber::sub(self, rhs) {
            Ok(difference) => difference,
            Err(_) => panic!("attempt to subtract a larger big number from a smaller one"),
        }
    }
}

impl Rem for &BigNumber {
    type Output = BigNumber;

    fn rem(self, rhs: Self) -> BigNumber {
        match self.modulo(rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}
