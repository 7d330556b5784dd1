use core::fmt;

/// Failures raised by the textual codecs and the fallible arithmetic
/// operations. Parsing rejects bad input immediately; nothing substitutes a
/// default value on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character outside the alphabet of the declared radix.
    InvalidDigit { digit: char, radix: u32 },
    /// A single block's text exceeds its fixed width (16 hex characters or
    /// 64 binary characters). Never raised by [`crate::BigNumber`], which
    /// pre-chunks input to exact block width.
    TooWide { len: usize, max: usize, radix: u32 },
    /// Subtraction where the minuend is less than the subtrahend.
    NegativeResult,
    /// Right shift by an amount not below the value's bit length.
    ShiftOverflow { shift: usize, bit_length: usize },
    /// Modulo with a zero modulus.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDigit { digit, radix } => {
                write!(f, "'{digit}' is not a base-{radix} digit")
            }
            Error::TooWide { len, max, radix } => {
                write!(f, "base-{radix} block is {len} characters long, max is {max}")
            }
            Error::NegativeResult => write!(f, "sub result is negative"),
            Error::ShiftOverflow { shift, bit_length } => {
                write!(f, "cannot shift a {bit_length}-bit value right by {shift}")
            }
            Error::DivisionByZero => write!(f, "modulo by zero"),
        }
    }
}

impl std::error::Error for Error {}
