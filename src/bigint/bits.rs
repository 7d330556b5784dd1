use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::bigint::BigNumber;
use crate::error::Error;
use crate::uint::Uint;

impl BigNumber {
    /// One's complement truncated to the operand's textual hex width, so the
    /// result never grows wider than the input's rendering. Zero inverts to
    /// zero.
    pub fn bitwise_not(&self) -> Self {
        let Some(top) = self.blocks.last() else {
            return Self::zero();
        };
        let hex_width = (self.blocks.len() - 1) * Uint::HEX_LEN + top.to_hex().len();
        let keep_bits = 4 * hex_width;

        let mut blocks: Vec<Uint> = self.blocks.iter().map(|block| block.bitwise_not()).collect();
        blocks.truncate((keep_bits + Uint::BINARY_LEN - 1) / Uint::BINARY_LEN);
        let spare_bits = keep_bits % Uint::BINARY_LEN;
        if spare_bits > 0 {
            if let Some(top) = blocks.last_mut() {
                *top = Uint::new(top.value() & ((1u64 << spare_bits) - 1));
            }
        }
        Self::from_blocks(blocks)
    }

    pub fn xor(&self, other: &Self) -> Self {
        Self::binary_operation(self, other, Uint::xor)
    }

    pub fn and(&self, other: &Self) -> Self {
        Self::binary_operation(self, other, Uint::and)
    }

    pub fn or(&self, other: &Self) -> Self {
        Self::binary_operation(self, other, Uint::or)
    }

    // Position-by-position over the longer operand; a block missing from the
    // shorter operand acts as zero for all three combinators.
    fn binary_operation(a: &Self, b: &Self, operation: fn(Uint, Uint) -> Uint) -> Self {
        let len = a.blocks.len().max(b.blocks.len());
        let mut blocks = Vec::with_capacity(len);
        for i in 0..len {
            blocks.push(operation(a.block(i), b.block(i)));
        }
        Self::from_blocks(blocks)
    }

    /// Appends `n` zero bits at the least significant end, growing the value
    /// by exactly `n` bits. Defined over the binary rendering; re-parsing
    /// re-establishes the block boundaries.
    pub fn shift_left(&self, n: usize) -> Self {
        let mut binary = self.to_binary();
        for _ in 0..n {
            binary.push('0');
        }
        Self::from_binary(&binary).expect("rendered binary text is valid")
    }

    /// Drops the `n` least significant bits. A shift of 0 returns the value
    /// unchanged; a shift of at least [`BigNumber::bit_length`] fails with
    /// [`Error::ShiftOverflow`].
    pub fn shift_right(&self, n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Ok(self.clone());
        }
        let bit_length = self.bit_length();
        if n >= bit_length {
            return Err(Error::ShiftOverflow {
                shift: n,
                bit_length,
            });
        }
        let binary = self.to_binary();
        let kept = &binary[..binary.len() - n];
        Ok(Self::from_binary(kept).expect("rendered binary text is valid"))
    }
}

impl BitXor for &BigNumber {
    type Output = BigNumber;

    fn bitxor(self, rhs: Self) -> BigNumber {
        self.xor(rhs)
    }
}

impl BitAnd for &BigNumber {
    type Output = BigNumber;

    fn bitand(self, rhs: Self) -> BigNumber {
        self.and(rhs)
    }
}

impl BitOr for &BigNumber {
    type Output = BigNumber;

    fn bitor(self, rhs: Self) -> BigNumber {
        self.or(rhs)
    }
}

impl Not for &BigNumber {
    type Output = BigNumber;

    fn not(self) -> BigNumber {
        self.bitwise_not()
    }
}

impl Shl<usize> for &BigNumber {
    type Output = BigNumber;

    fn shl(self, n: usize) -> BigNumber {
        self.shift_left(n)
    }
}

impl Shr<usize> for &BigNumber {
    type Output = BigNumber;

    /// Panics on overshift, like the primitive shift operators.
    fn shr(self, n: usize) -> BigNumber {
        match self.shift_right(n) {
            Ok(shifted) => shifted,
            Err(_) => panic!(
                "attempt to shift a {}-bit value right by {n}",
                self.bit_length()
            ),
        }
    }
}
