//! Hex text for frames on the command line.

use std::fmt::Write;

use crate::exit::{CliError, CliResult, USAGE};

/// Parse hex digits, ignoring whitespace, `:` / `-` separators and an
/// optional leading `0x`.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: Vec<u8> = trimmed
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':' && *b != b'-')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            format!("hex input has an odd number of digits ({})", digits.len()),
        ));
    }

    digits
        .chunks_exact(2)
        .map(|pair| -> CliResult<u8> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
        .collect()
}

fn nibble(digit: u8) -> CliResult<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        other => Err(CliError::new(
            USAGE,
            format!("invalid hex digit {:?}", char::from(other)),
        )),
    }
}

/// Lowercase hex, bytes separated by single spaces.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        let expected = vec![0x01, 0x08, 0x02, 0x01];
        assert_eq!(parse_hex("01080201").unwrap(), expected);
        assert_eq!(parse_hex("01 08 02 01").unwrap(), expected);
        assert_eq!(parse_hex("0x01:08:02:01\n").unwrap(), expected);
        assert_eq!(parse_hex("01-08-02-01").unwrap(), expected);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_bad_digits() {
        assert_eq!(parse_hex("0g").unwrap_err().code, USAGE);
        assert_eq!(parse_hex("010").unwrap_err().code, USAGE);
    }

    #[test]
    fn formats_spaced_lowercase() {
        assert_eq!(to_hex(&[0x01, 0xAB, 0x00]), "01 ab 00");
        assert_eq!(to_hex(&[]), "");
    }
}
