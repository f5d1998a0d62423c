//! Numeric base conversion between binary, octal, decimal and hexadecimal.
//!
//! Conversion runs on a digit vector instead of a fixed-width integer, so
//! there is no length limit on the input.

use crate::error::ToolError;

/// The four supported numeric bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// The numeric base value.
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Canonical prefix used when rendering (`0b`, `0o`, none, `0x`).
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }

    /// Display name, as shown in base selectors.
    pub fn label(self) -> &'static str {
        match self {
            Radix::Binary => "Binary",
            Radix::Octal => "Octal",
            Radix::Decimal => "Decimal",
            Radix::Hexadecimal => "Hexadecimal",
        }
    }

    pub fn from_value(value: u32) -> Option<Radix> {
        Radix::ALL.iter().copied().find(|r| r.value() == value)
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert `digits`, interpreted in `from`, into its rendering in `to`.
///
/// Accepts an optional leading sign and, for non-decimal source radices, the
/// matching canonical prefix (`0x1A` parses as hexadecimal `1A`). Output is
/// sign, canonical prefix, then lowercase digits; zero never carries a sign.
pub fn convert_number(digits: &str, from: Radix, to: Radix) -> Result<String, ToolError> {
    let trimmed = digits.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let body = strip_source_prefix(body, from);
    if body.is_empty() {
        return Err(ToolError::InvalidDigits(
            "no digits to convert".to_string(),
        ));
    }

    let mut source = Vec::with_capacity(body.len());
    for ch in body.chars() {
        let digit = ch.to_digit(from.value()).ok_or_else(|| {
            ToolError::InvalidDigits(format!(
                "'{ch}' is not a valid digit in base {}",
                from.value()
            ))
        })?;
        source.push(digit);
    }

    let magnitude = rebase(&source, from.value(), to.value());
    let is_zero = magnitude == [0];

    let mut out = String::with_capacity(magnitude.len() + 3);
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(to.prefix());
    for digit in magnitude {
        // rebase keeps every digit below the target base
        if let Some(ch) = char::from_digit(digit, to.value()) {
            out.push(ch);
        }
    }
    Ok(out)
}

fn strip_source_prefix(body: &str, from: Radix) -> &str {
    let stripped = match from {
        Radix::Binary => body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")),
        Radix::Octal => body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")),
        Radix::Hexadecimal => body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")),
        Radix::Decimal => None,
    };
    stripped.unwrap_or(body)
}

/// Re-express big-endian `digits` (base `from`) as big-endian digits in base
/// `to`, by multiply-accumulate over a little-endian accumulator.
fn rebase(digits: &[u32], from: u32, to: u32) -> Vec<u32> {
    let mut out: Vec<u32> = vec![0];
    for &digit in digits {
        let mut carry = digit;
        for slot in out.iter_mut() {
            let value = *slot * from + carry;
            *slot = value % to;
            carry = value / to;
        }
        while carry > 0 {
            out.push(carry % to);
            carry /= to;
        }
    }
    while out.len() > 1 && out.last() == Some(&0) {
        out.pop();
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_decimal() {
        assert_eq!(
            convert_number("FF", Radix::Hexadecimal, Radix::Decimal).unwrap(),
            "255"
        );
    }

    #[test]
    fn binary_to_hex_is_lowercase() {
        assert_eq!(
            convert_number("1010", Radix::Binary, Radix::Hexadecimal).unwrap(),
            "0xa"
        );
        assert_eq!(
            convert_number("255", Radix::Decimal, Radix::Hexadecimal).unwrap(),
            "0xff"
        );
    }

    #[test]
    fn decimal_to_binary_and_octal() {
        assert_eq!(
            convert_number("10", Radix::Decimal, Radix::Binary).unwrap(),
            "0b1010"
        );
        assert_eq!(
            convert_number("64", Radix::Decimal, Radix::Octal).unwrap(),
            "0o100"
        );
    }

    #[test]
    fn sign_precedes_prefix() {
        assert_eq!(
            convert_number("-FF", Radix::Hexadecimal, Radix::Decimal).unwrap(),
            "-255"
        );
        assert_eq!(
            convert_number("-255", Radix::Decimal, Radix::Binary).unwrap(),
            "-0b11111111"
        );
        assert_eq!(
            convert_number("+7", Radix::Decimal, Radix::Octal).unwrap(),
            "0o7"
        );
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(
            convert_number("0", Radix::Decimal, Radix::Binary).unwrap(),
            "0b0"
        );
        assert_eq!(
            convert_number("-0", Radix::Decimal, Radix::Hexadecimal).unwrap(),
            "0x0"
        );
        assert_eq!(
            convert_number("000", Radix::Binary, Radix::Decimal).unwrap(),
            "0"
        );
    }

    #[test]
    fn accepts_matching_source_prefix() {
        assert_eq!(
            convert_number("0x1A", Radix::Hexadecimal, Radix::Decimal).unwrap(),
            "26"
        );
        assert_eq!(
            convert_number("0B101", Radix::Binary, Radix::Decimal).unwrap(),
            "5"
        );
    }

    #[test]
    fn rejects_illegal_digits() {
        assert!(matches!(
            convert_number("2", Radix::Binary, Radix::Decimal).unwrap_err(),
            ToolError::InvalidDigits(_)
        ));
        assert!(matches!(
            convert_number("G1", Radix::Hexadecimal, Radix::Decimal).unwrap_err(),
            ToolError::InvalidDigits(_)
        ));
        assert!(matches!(
            convert_number("", Radix::Decimal, Radix::Binary).unwrap_err(),
            ToolError::InvalidDigits(_)
        ));
        assert!(matches!(
            convert_number("0x", Radix::Hexadecimal, Radix::Decimal).unwrap_err(),
            ToolError::InvalidDigits(_)
        ));
    }

    #[test]
    fn leading_zeros_collapse() {
        assert_eq!(
            convert_number("0010", Radix::Binary, Radix::Decimal).unwrap(),
            "2"
        );
    }

    #[test]
    fn handles_values_beyond_machine_width() {
        let decimal = "123456789012345678901234567890123456789";
        let hex = convert_number(decimal, Radix::Decimal, Radix::Hexadecimal).unwrap();
        let back = convert_number(&hex, Radix::Hexadecimal, Radix::Decimal).unwrap();
        assert_eq!(back, decimal);
    }
}
