//! Unicode ranges and glyph entry points.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::Error;

/// Labels that name a ligature rather than a single character.
pub const LIGATURES: &[(&str, u16)] = &[("fi", 0xFB01), ("fl", 0xFB02)];

static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"U\+([A-Fa-f0-9]+)-([A-Fa-f0-9]+)").unwrap());

/// A half-open range of code points, `begin..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnicodeRange {
    begin: u32,
    end: u32,
}

impl UnicodeRange {
    /// Create a range from an inclusive begin and exclusive end.
    pub fn new(begin: u32, end: u32) -> Result<Self, Error> {
        if begin > end {
            return Err(Error::InvertedUnicodeRange { begin, end });
        }
        Ok(UnicodeRange { begin, end })
    }

    /// Parse a range written as `U+<hex>-<hex>`, with both ends inclusive.
    ///
    /// The first occurrence of the pattern anywhere in `s` is used, so
    /// `"U+0020-007E"` and `"latin U+0020-007E"` are equivalent.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidUnicodeRange(s.to_owned());
        let captures = RANGE_PATTERN.captures(s).ok_or_else(invalid)?;
        let begin = u32::from_str_radix(&captures[1], 16).map_err(|_| invalid())?;
        let last = u32::from_str_radix(&captures[2], 16).map_err(|_| invalid())?;
        if begin > last {
            return Err(Error::InvertedUnicodeRange { begin, end: last });
        }
        let end = last.checked_add(1).ok_or_else(invalid)?;
        Ok(UnicodeRange { begin, end })
    }

    pub fn begin(&self) -> u32 {
        self.begin
    }

    /// The first code point past the end of the range.
    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        (self.begin..self.end).contains(&codepoint)
    }
}

impl FromStr for UnicodeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for UnicodeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.begin == self.end {
            return write!(f, "U+{:04X} (empty)", self.begin);
        }
        write!(f, "U+{:04X}-{:04X}", self.begin, self.end - 1)
    }
}

/// The code point a glyph with this unicode label is stored under.
///
/// Returns `None` for a missing label, for U+0000, for characters outside
/// the basic multilingual plane, and for any label longer than one
/// character that is not a known ligature.
pub fn entry_point_for_label(label: Option<&str>) -> Option<u16> {
    let label = label?;
    if let Some((_, entry_point)) = LIGATURES.iter().find(|(name, _)| *name == label) {
        return Some(*entry_point);
    }
    let mut chars = label.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    u16::try_from(u32::from(c))
        .ok()
        .filter(|entry_point| *entry_point != 0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn parse_range() {
        let range = UnicodeRange::parse("U+0041-0043").unwrap();
        assert_eq!(0x41, range.begin());
        assert_eq!(0x44, range.end());
        assert!(range.contains(0x41));
        assert!(range.contains(0x43));
        assert!(!range.contains(0x44));
        assert!(!range.contains(0x40));
        assert_eq!("U+0041-0043", range.to_string());
    }

    #[test]
    fn parse_is_unanchored() {
        let range: UnicodeRange = "basic latin: U+20-7e, more".parse().unwrap();
        assert_eq!(UnicodeRange::new(0x20, 0x7f).unwrap(), range);
    }

    #[test]
    fn single_codepoint_range() {
        let range = UnicodeRange::parse("U+FFFF-FFFF").unwrap();
        assert_eq!(0x1_0000, range.end());
        assert!(range.contains(0xFFFF));
    }

    #[rstest]
    #[case("")]
    #[case("0041-0043")]
    #[case("U+0041")]
    #[case("u+0041-0043")]
    #[case("U+123456789-123456789")]
    #[case("U+FFFFFFFF-FFFFFFFF")]
    fn invalid_ranges(#[case] input: &str) {
        assert_eq!(
            Err(Error::InvalidUnicodeRange(input.to_owned())),
            UnicodeRange::parse(input)
        );
    }

    #[test]
    fn inverted_range() {
        assert_eq!(
            Err(Error::InvertedUnicodeRange {
                begin: 0x43,
                end: 0x41
            }),
            UnicodeRange::parse("U+0043-0041")
        );
        assert!(UnicodeRange::new(5, 4).is_err());
        assert!(UnicodeRange::new(5, 5).is_ok());
    }

    #[rstest]
    #[case(Some("A"), Some(0x41))]
    #[case(Some("fi"), Some(0xFB01))]
    #[case(Some("fl"), Some(0xFB02))]
    #[case(Some("\u{FB01}"), Some(0xFB01))]
    #[case(Some("é"), Some(0xE9))]
    #[case(Some("\u{FFFF}"), Some(0xFFFF))]
    #[case(Some("\0"), None)]
    #[case(Some("ff"), None)]
    #[case(Some("ab"), None)]
    #[case(Some(""), None)]
    #[case(Some("😀"), None)]
    #[case(None, None)]
    fn entry_points(#[case] label: Option<&str>, #[case] expected: Option<u16>) {
        assert_eq!(expected, entry_point_for_label(label));
    }
}
