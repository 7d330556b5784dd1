use core::fmt;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::BigNumber;
use crate::error::Error;
use crate::uint::Uint;
use crate::utils::{pad_left, split_into_blocks};

impl BigNumber {
    /// Parses a hex string of any length, case-insensitively, taking 16
    /// characters per block from the least significant end. The empty
    /// string parses to zero.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Self::parse(hex, Uint::HEX_LEN, Uint::from_hex)
    }

    /// Parses a binary string of any length, 64 characters per block.
    pub fn from_binary(binary: &str) -> Result<Self, Error> {
        Self::parse(binary, Uint::BINARY_LEN, Uint::from_binary)
    }

    fn parse(
        text: &str,
        block_len: usize,
        parse_block: fn(&str) -> Result<Uint, Error>,
    ) -> Result<Self, Error> {
        let mut blocks = Vec::new();
        for chunk in split_into_blocks(text, block_len) {
            blocks.push(parse_block(&chunk)?);
        }
        Ok(Self::from_blocks(blocks))
    }

    /// Lowercase hex, most significant block first, no `0x` prefix and no
    /// leading zeros across the value. Zero renders as `"0"`.
    pub fn to_hex(&self) -> String {
        self.render(Uint::HEX_LEN, Uint::to_hex)
    }

    /// Binary rendering, analogous to [`BigNumber::to_hex`].
    pub fn to_binary(&self) -> String {
        self.render(Uint::BINARY_LEN, Uint::to_binary)
    }

    // Every block except the most significant is left-padded to the full
    // block width, so block boundaries are invisible in the output.
    fn render(&self, block_len: usize, render_block: fn(Uint) -> String) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut text = String::new();
        for (i, block) in self.blocks.iter().enumerate().rev() {
            let block_text = render_block(*block);
            if i == self.blocks.len() - 1 {
                text.push_str(&block_text);
            } else {
                text.push_str(&pad_left(&block_text, block_len));
            }
        }
        text
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Binary for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_binary())
    }
}

impl FromStr for BigNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// The hex text form doubles as the wire format.
impl Serialize for BigNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BigNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = BigNumber;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hexadecimal string")
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<BigNumber, E> {
                BigNumber::from_hex(text).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
