//! Arbitrary-precision unsigned integers stored as sequences of 64-bit
//! blocks, with hexadecimal and binary text as the interchange format.
//!
//! [`Uint`] is a single carry-free 64-bit block; [`BigNumber`] layers
//! multi-block arithmetic, bitwise logic, shifting and comparison on top of
//! it. Every operation returns a fresh value; operands are never mutated.

pub mod bigint;
pub mod error;
pub mod uint;
pub mod utils;

pub use bigint::BigNumber;
pub use error::Error;
pub use uint::Uint;
