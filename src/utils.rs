use crate::error::Error;
use crate::uint::Uint;

/// Splits `input` into chunks of at most `block_size` characters, counted
/// from the rightmost end. Chunk 0 holds the least significant characters;
/// the last (most significant) chunk may be shorter than `block_size`.
pub fn split_into_blocks(input: &str, block_size: usize) -> Vec<String> {
    let digits: Vec<char> = input.chars().collect();
    digits
        .rchunks(block_size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Pads `value` with `'0'` characters on the left up to `width`.
pub fn pad_left(value: &str, width: usize) -> String {
    format!("{value:0>width$}")
}

/// Lowercases `hex` and checks that it fits a single 64-bit block:
/// at most 16 characters, alphabet `[0-9a-f]`.
pub fn validate_hex(hex: &str) -> Result<String, Error> {
    let hex = hex.to_lowercase();
    let len = hex.chars().count();
    if len > Uint::HEX_LEN {
        return Err(Error::TooWide {
            len,
            max: Uint::HEX_LEN,
            radix: 16,
        });
    }
    for digit in hex.chars() {
        if !matches!(digit, '0'..='9' | 'a'..='f') {
            return Err(Error::InvalidDigit { digit, radix: 16 });
        }
    }
    Ok(hex)
}

/// Checks that `binary` fits a single 64-bit block: at most 64 characters,
/// all of them `'0'` or `'1'`.
pub fn validate_binary(binary: &str) -> Result<(), Error> {
    let len = binary.chars().count();
    if len > Uint::BINARY_LEN {
        return Err(Error::TooWide {
            len,
            max: Uint::BINARY_LEN,
            radix: 2,
        });
    }
    for digit in binary.chars() {
        if digit != '0' && digit != '1' {
            return Err(Error::InvalidDigit { digit, radix: 2 });
        }
    }
    Ok(())
}
