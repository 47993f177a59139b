//! Numeric field scanning for colors and palette lines.
//!
//! Fields are read the way C `scanf` reads `%u` and `%x`: leading
//! whitespace and an optional `+` sign are skipped, the longest run of
//! digits is consumed, and the remainder is left for the caller. Values
//! must fit in 32 bits.

use crate::{ColorError, ColorResult};

/// Parses a hexadecimal RGB value such as `aa87b4` or `0xAA87B4`.
///
/// Only the leading run of hex digits is read, so `"ff0000 red"` parses as
/// `0xff0000`. Up to 32 bits are accepted; channels are taken from the low
/// 24 bits later on.
///
/// # Example
///
/// ```rust
/// use rgb2pal_color::parse_hex_rgb;
///
/// assert_eq!(parse_hex_rgb("aa87b4").unwrap(), 0xaa87b4);
/// assert_eq!(parse_hex_rgb("0x10").unwrap(), 0x10);
/// assert!(parse_hex_rgb("zz").is_err());
/// ```
pub fn parse_hex_rgb(text: &str) -> ColorResult<u32> {
    scan_hex(text)
        .map(|(value, _)| value)
        .ok_or_else(|| ColorError::InvalidHex(text.to_string()))
}

/// Splits a palette record `<index>=<hex>` into its two fields.
///
/// Text after the hex digits is ignored.
pub(crate) fn parse_entry_line(line: &str) -> Option<(u32, u32)> {
    let (index, rest) = scan_decimal(line)?;
    let rest = rest.strip_prefix('=')?;
    let (rgb, _) = scan_hex(rest)?;
    Some((index, rgb))
}

fn scan_hex(text: &str) -> Option<(u32, &str)> {
    let s = skip_sign(text);
    // "0x" only counts as a prefix when digits follow it
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = u32::from_str_radix(&s[..end], 16).ok()?;
    Some((value, &s[end..]))
}

fn scan_decimal(text: &str) -> Option<(u32, &str)> {
    let s = skip_sign(text);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse::<u32>().ok()?;
    Some((value, &s[end..]))
}

fn skip_sign(text: &str) -> &str {
    let s = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    s.strip_prefix('+').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_plain() {
        assert_eq!(parse_hex_rgb("000000").unwrap(), 0);
        assert_eq!(parse_hex_rgb("ffffff").unwrap(), 0xffffff);
        assert_eq!(parse_hex_rgb("BC5475").unwrap(), 0xbc5475);
        assert_eq!(parse_hex_rgb("7").unwrap(), 7);
    }

    #[test]
    fn test_hex_prefix_and_whitespace() {
        assert_eq!(parse_hex_rgb("0xff").unwrap(), 0xff);
        assert_eq!(parse_hex_rgb("0X1a").unwrap(), 0x1a);
        assert_eq!(parse_hex_rgb("  \tab").unwrap(), 0xab);
        // bare "0x" reads as zero followed by junk
        assert_eq!(parse_hex_rgb("0x").unwrap(), 0);
    }

    #[test]
    fn test_hex_plus_sign() {
        assert_eq!(parse_hex_rgb("+ff").unwrap(), 0xff);
        assert_eq!(parse_hex_rgb(" +0x10").unwrap(), 0x10);
        assert!(parse_hex_rgb("+").is_err());
        assert!(parse_hex_rgb("++ff").is_err());
        assert!(parse_hex_rgb("-ff").is_err());
    }

    #[test]
    fn test_hex_trailing_text_ignored() {
        assert_eq!(parse_hex_rgb("ff00zz").unwrap(), 0xff00);
        assert_eq!(parse_hex_rgb("123456\r").unwrap(), 0x123456);
    }

    #[test]
    fn test_hex_32_bit_limit() {
        assert_eq!(parse_hex_rgb("ffffffff").unwrap(), u32::MAX);
        assert_eq!(parse_hex_rgb("0000000012").unwrap(), 0x12);
        assert!(parse_hex_rgb("100000000").is_err());
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(matches!(parse_hex_rgb(""), Err(ColorError::InvalidHex(_))));
        assert!(parse_hex_rgb("g00000").is_err());
        assert!(parse_hex_rgb("#ffffff").is_err());
        assert!(parse_hex_rgb("   ").is_err());
    }

    #[test]
    fn test_entry_line() {
        assert_eq!(parse_entry_line("1=5566ab"), Some((1, 0x5566ab)));
        assert_eq!(parse_entry_line("255=eeeeee"), Some((255, 0xeeeeee)));
        assert_eq!(parse_entry_line(" 3= ff"), Some((3, 0xff)));
        assert_eq!(parse_entry_line("+4=0x10 trailing"), Some((4, 0x10)));
        assert_eq!(parse_entry_line("+4=+ff"), Some((4, 0xff)));
    }

    #[test]
    fn test_entry_line_rejects() {
        assert_eq!(parse_entry_line(""), None);
        assert_eq!(parse_entry_line("1 = ff"), None);
        assert_eq!(parse_entry_line("=ff"), None);
        assert_eq!(parse_entry_line("1="), None);
        assert_eq!(parse_entry_line("1:ff"), None);
        assert_eq!(parse_entry_line("-1=ff"), None);
        assert_eq!(parse_entry_line("4294967296=ff"), None);
        assert_eq!(parse_entry_line("color=ff"), None);
    }
}
