//! Byte content wrappers with a canonical `0x…` hex rendering.
//!
//! A [`ByteValue`] is the domain's byte wrapper type: constructed from a
//! hex string, compared by content, rendered back as lowercase hex. It is
//! deliberately not a string, even though its rendering is one.

use std::fmt;

use bytes::Bytes;

/// Byte width of an account address.
pub const ADDRESS_LEN: usize = 20;

/// Errors produced when parsing hex text into byte content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// The text does not start with `0x`.
    #[error("missing 0x prefix")]
    MissingPrefix,

    /// The digit run does not split into whole bytes.
    #[error("odd number of hex digits ({0})")]
    OddDigits(usize),

    /// A character outside `[0-9a-fA-F]` appeared after the prefix.
    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidDigit { found: char, offset: usize },

    /// The decoded content has the wrong width for the target type.
    #[error("expected {expected} bytes, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },
}

/// Immutable byte content with a canonical hex representation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteValue(Bytes);

impl ByteValue {
    /// Parse a `0x`-prefixed hex string. `"0x"` alone is the empty value.
    pub fn from_hex(text: &str) -> Result<Self, HexError> {
        let digits = text.strip_prefix("0x").ok_or(HexError::MissingPrefix)?;
        if digits.len() % 2 != 0 {
            return Err(HexError::OddDigits(digits.len()));
        }

        let mut content = Vec::with_capacity(digits.len() / 2);
        let mut high = None;
        for (offset, ch) in digits.char_indices() {
            let nibble = ch.to_digit(16).ok_or(HexError::InvalidDigit {
                found: ch,
                offset: offset + 2,
            })? as u8;
            match high.take() {
                None => high = Some(nibble),
                Some(first) => content.push(first << 4 | nibble),
            }
        }

        Ok(Self(Bytes::from(content)))
    }

    /// Wrap raw bytes, copying them.
    pub fn from_slice(content: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(content))
    }

    /// Canonical lowercase `0x…` rendering.
    pub fn hex(&self) -> String {
        let mut out = String::with_capacity(2 + self.0.len() * 2);
        out.push_str("0x");
        for byte in self.0.iter() {
            out.push(char::from_digit((byte >> 4) as u32, 16).unwrap_or('0'));
            out.push(char::from_digit((byte & 0x0f) as u32, 16).unwrap_or('0'));
        }
        out
    }

    /// The wrapped content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the content is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ByteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteValue({})", self.hex())
    }
}

impl fmt::Display for ByteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// A 20-byte account address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address(ByteValue);

impl Address {
    /// Parse a `0x`-prefixed hex string of exactly 20 bytes.
    pub fn from_hex(text: &str) -> Result<Self, HexError> {
        let value = ByteValue::from_hex(text)?;
        if value.len() != ADDRESS_LEN {
            return Err(HexError::WidthMismatch {
                expected: ADDRESS_LEN,
                actual: value.len(),
            });
        }
        Ok(Self(value))
    }

    /// Canonical lowercase `0x…` rendering.
    pub fn hex(&self) -> String {
        self.0.hex()
    }

    /// The 20-byte content.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl From<Address> for ByteValue {
    fn from(address: Address) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip_is_canonical() {
        let value = ByteValue::from_hex("0x2344").expect("valid hex should parse");
        assert_eq!(value.hex(), "0x2344");
        assert_eq!(value.as_bytes(), &[0x23, 0x44]);
    }

    #[test]
    fn uppercase_digits_normalize_to_lowercase() {
        let value = ByteValue::from_hex("0xDEADBEEF").expect("valid hex should parse");
        assert_eq!(value.hex(), "0xdeadbeef");
    }

    #[test]
    fn empty_digit_run_is_empty_value() {
        let value = ByteValue::from_hex("0x").expect("bare prefix should parse");
        assert!(value.is_empty());
        assert_eq!(value.hex(), "0x");
    }

    #[test]
    fn missing_prefix_is_rejected() {
        assert_eq!(ByteValue::from_hex("2344"), Err(HexError::MissingPrefix));
    }

    #[test]
    fn odd_digit_count_is_rejected() {
        assert_eq!(ByteValue::from_hex("0x234"), Err(HexError::OddDigits(3)));
    }

    #[test]
    fn non_hex_digit_is_rejected() {
        assert_eq!(
            ByteValue::from_hex("0x23xy"),
            Err(HexError::InvalidDigit {
                found: 'x',
                offset: 4
            })
        );
    }

    #[test]
    fn second_prefix_is_rejected() {
        assert!(ByteValue::from_hex("0x200x").is_err());
    }

    #[test]
    fn equality_is_by_content() {
        let lower = ByteValue::from_hex("0xabcd").expect("valid hex should parse");
        let upper = ByteValue::from_hex("0xABCD").expect("valid hex should parse");
        let raw = ByteValue::from_slice(&[0xab, 0xcd]);
        assert_eq!(lower, upper);
        assert_eq!(lower, raw);
    }

    #[test]
    fn address_requires_exact_width() {
        let hex = format!("0x{}", "ab".repeat(ADDRESS_LEN));
        let address = Address::from_hex(&hex).expect("20-byte hex should parse");
        assert_eq!(address.as_bytes().len(), ADDRESS_LEN);
        assert_eq!(address.hex(), hex);

        assert_eq!(
            Address::from_hex("0x2344"),
            Err(HexError::WidthMismatch {
                expected: ADDRESS_LEN,
                actual: 2
            })
        );
    }

    #[test]
    fn debug_shows_hex_form() {
        let value = ByteValue::from_hex("0x01ff").expect("valid hex should parse");
        assert_eq!(format!("{value:?}"), "ByteValue(0x01ff)");
    }
}
