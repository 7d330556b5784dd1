use crate::error::Error;
use crate::utils::{validate_binary, validate_hex};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// One 64-bit block of a [`crate::BigNumber`].
///
/// Deliberately carry-free: `add` and `sub` wrap on overflow without
/// signalling, and the multi-block layer re-derives the carry or borrow by
/// comparing values. Every operation returns a new `Uint`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint {
    value: u64,
}

impl Uint {
    /// Widest hex text a single block accepts or renders.
    pub const HEX_LEN: usize = 16;
    /// Widest binary text a single block accepts or renders.
    pub const BINARY_LEN: usize = 64;

    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self::new(0)
    }

    pub fn one() -> Self {
        Self::new(1)
    }

    pub fn value(self) -> u64 {
        self.value
    }

    pub fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Parses up to 16 hex characters, case-insensitively, most significant
    /// digit first.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let hex = validate_hex(hex)?;
        let digits = hex.as_bytes();
        let mut value = 0u64;
        for (i, &digit) in digits.iter().enumerate() {
            // Alphabet already checked by validate_hex.
            let nibble = match digit {
                b'0'..=b'9' => (digit - b'0') as u64,
                _ => (digit - b'a') as u64 + 10,
            };
            value += nibble << (4 * (digits.len() - i - 1));
        }
        Ok(Self::new(value))
    }

    /// Lowercase hex without padding. Zero renders as the empty string;
    /// callers pad when a fixed block width is required.
    pub fn to_hex(self) -> String {
        let mut value = self.value;
        let mut digits = String::new();
        while value > 0 {
            digits.push(HEX_DIGITS[(value % 16) as usize] as char);
            value /= 16;
        }
        digits.chars().rev().collect()
    }

    /// Parses up to 64 binary characters, most significant bit first.
    pub fn from_binary(binary: &str) -> Result<Self, Error> {
        validate_binary(binary)?;
        let digits = binary.as_bytes();
        let mut value = 0u64;
        for (i, &digit) in digits.iter().enumerate() {
            if digit == b'1' {
                value += 1 << (digits.len() - i - 1);
            }
        }
        Ok(Self::new(value))
    }

    /// Unpadded binary; zero renders as the empty string.
    pub fn to_binary(self) -> String {
        let mut value = self.value;
        let mut digits = String::new();
        while value > 0 {
            digits.push(if value % 2 == 1 { '1' } else { '0' });
            value /= 2;
        }
        digits.chars().rev().collect()
    }

    pub fn bitwise_not(self) -> Self {
        Self::new(!self.value)
    }

    pub fn xor(self, other: Self) -> Self {
        Self::new(self.value ^ other.value)
    }

    pub fn and(self, other: Self) -> Self {
        Self::new(self.value & other.value)
    }

    pub fn or(self, other: Self) -> Self {
        Self::new(self.value | other.value)
    }

    /// Wrapping add; no carry-out. The block sum wrapped exactly when the
    /// result is numerically smaller than an operand.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.value.wrapping_add(other.value))
    }

    /// Wrapping sub; no borrow-out. The difference wrapped exactly when the
    /// result is numerically larger than the minuend.
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.value.wrapping_sub(other.value))
    }
}

impl From<u64> for Uint {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::Uint;
    use crate::error::Error;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_to_hex() {
        assert_eq!(Uint::new(81985529216486895).to_hex(), "123456789abcdef");
        assert_eq!(Uint::new(u64::MAX).to_hex(), "ffffffffffffffff");
        assert_eq!(Uint::new(0).to_hex(), "");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Uint::from_hex("123456789aBcDeF").unwrap(),
            Uint::new(81985529216486895)
        );
        assert_eq!(
            Uint::from_hex("FFFFFFFFFFFFFFFF").unwrap(),
            Uint::new(u64::MAX)
        );
        assert_eq!(Uint::from_hex("").unwrap(), Uint::zero());
        assert_eq!(
            Uint::from_hex("abcdef12541abcdef2"),
            Err(Error::TooWide {
                len: 18,
                max: 16,
                radix: 16
            })
        );
        assert_eq!(
            Uint::from_hex("eF3X7"),
            Err(Error::InvalidDigit {
                digit: 'x',
                radix: 16
            })
        );
    }

    #[test]
    fn test_hex_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let value: u64 = prng.gen();
            let uint = Uint::new(value);
            assert_eq!(Uint::from_hex(&uint.to_hex()).unwrap(), uint);
            if value > 0 {
                assert_eq!(uint.to_hex(), format!("{value:x}"));
            }
        }
    }

    #[test]
    fn test_to_binary() {
        assert_eq!(
            Uint::new(81985529216486895).to_binary(),
            "100100011010001010110011110001001101010111100110111101111"
        );
        assert_eq!(Uint::new(u64::MAX).to_binary(), "1".repeat(64));
        assert_eq!(Uint::new(0).to_binary(), "");
    }

    #[test]
    fn test_from_binary() {
        assert_eq!(
            Uint::from_binary("100100011010001010110011110001001101010111100110111101111")
                .unwrap(),
            Uint::new(81985529216486895)
        );
        assert_eq!(
            Uint::from_binary(&"1".repeat(64)).unwrap(),
            Uint::new(u64::MAX)
        );
        assert_eq!(Uint::from_binary("").unwrap(), Uint::zero());
        assert_eq!(
            Uint::from_binary(&"10".repeat(36)),
            Err(Error::TooWide {
                len: 72,
                max: 64,
                radix: 2
            })
        );
        assert_eq!(
            Uint::from_binary("10101201"),
            Err(Error::InvalidDigit {
                digit: '2',
                radix: 2
            })
        );
    }

    #[test]
    fn test_binary_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..100 {
            let value: u64 = prng.gen();
            let uint = Uint::new(value);
            assert_eq!(Uint::from_binary(&uint.to_binary()).unwrap(), uint);
            if value > 0 {
                assert_eq!(uint.to_binary(), format!("{value:b}"));
            }
        }
    }

    #[test]
    fn test_bitwise() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);
        for _ in 0..100 {
            let a: u64 = prng.gen();
            let b: u64 = prng.gen();
            assert_eq!(Uint::new(a).xor(Uint::new(b)).value(), a ^ b);
            assert_eq!(Uint::new(a).and(Uint::new(b)).value(), a & b);
            assert_eq!(Uint::new(a).or(Uint::new(b)).value(), a | b);
            assert_eq!(Uint::new(a).bitwise_not().value(), !a);
        }
    }

    #[test]
    fn test_wrapping_arithmetic() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..100 {
            let a: u64 = prng.gen();
            let b: u64 = prng.gen();
            assert_eq!(Uint::new(a).add(Uint::new(b)).value(), a.wrapping_add(b));
            assert_eq!(Uint::new(a).sub(Uint::new(b)).value(), a.wrapping_sub(b));
        }
        assert_eq!(Uint::new(u64::MAX).add(Uint::one()), Uint::zero());
        assert_eq!(Uint::zero().sub(Uint::one()), Uint::new(u64::MAX));
    }
}
