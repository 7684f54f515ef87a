use crate::validation_result::InvalidReason;
use std::fmt;

pub const CEDULA_LENGTH: usize = 10;

/// A structurally well-formed cédula: exactly ten ASCII digits.
///
/// Holding one says nothing about the region code or the check digit, only that
/// the checks on them can run without further bounds checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifierCode {
    raw: String,
    digits: [u32; CEDULA_LENGTH],
}

impl IdentifierCode {
    pub fn parse(raw: &str) -> Result<Self, InvalidReason> {
        Ok(IdentifierCode {
            raw: raw.to_owned(),
            digits: parse_ascii_digits(raw)?,
        })
    }

    /// The input exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn digits(&self) -> &[u32; CEDULA_LENGTH] {
        &self.digits
    }

    /// Two-digit province code, with the leading zero significant ("01" is 1).
    pub fn region_code(&self) -> u32 {
        self.digits[0] * 10 + self.digits[1]
    }

    pub fn third_digit(&self) -> u32 {
        self.digits[2]
    }

    pub fn check_digit(&self) -> u32 {
        self.digits[CEDULA_LENGTH - 1]
    }
}

impl TryFrom<&str> for IdentifierCode {
    type Error = InvalidReason;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        IdentifierCode::parse(value)
    }
}

impl fmt::Display for IdentifierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parses exactly `N` ASCII digits. Anything else (signs, spaces, separators,
/// non-ASCII digits, wrong count) is a `BadLength`. Comparing the byte length is
/// enough because every ASCII digit is one byte, and a multi-byte character then
/// fails the per-byte digit check.
pub(crate) fn parse_ascii_digits<const N: usize>(input: &str) -> Result<[u32; N], InvalidReason> {
    let bytes = input.as_bytes();
    if bytes.len() != N {
        return Err(InvalidReason::BadLength);
    }
    let mut digits = [0; N];
    for (digit, byte) in digits.iter_mut().zip(bytes) {
        if !byte.is_ascii_digit() {
            return Err(InvalidReason::BadLength);
        }
        *digit = u32::from(byte - b'0');
    }
    Ok(digits)
}
