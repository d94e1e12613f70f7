//! Tolerant parser for phasor vector descriptions.
//!
//! Input is plain text with one vector per line:
//!
//! ```text
//! Va = 230∠0°
//! Vb = 230∠−120°
//! Vc : 230 @ 120 [deg]
//! ```
//!
//! Parsing never fails. Each non-blank line becomes exactly one
//! [`VectorLine`], whatever its content. Fields that do not read as numbers
//! are kept as [`Fragment::Text`] (or NaN) for the layout stage to collapse.
//!
//! # Overview
//!
//! - [`parse`] - Splits a whole description into vector lines
//! - [`parse_vector_line`] - Splits one line into name, magnitude and angle
//! - [`parse_fragment`] - Interprets one piece as a number or text
//! - [`parse_number`] - Recognizes numeric literals

mod fragment;
mod line;
mod number;

pub use fragment::{Fragment, UNICODE_MINUS, parse_fragment};
pub use line::{SEPARATORS, VectorLine, parse_vector_line};
pub use number::parse_number;

use log::debug;

/// Returns the trimmed, non-blank lines of `source`, in order.
pub fn raw_lines(source: &str) -> impl Iterator<Item = &str> {
    source.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parses every non-blank line of `source` into a [`VectorLine`].
///
/// The result preserves input order, and its length equals the number of
/// non-blank lines.
///
/// # Examples
///
/// ```
/// let lines = phasor_parser::parse("A=5∠0\n\n  B=5∠90°  \n");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].angle_value(), 90.0);
/// ```
pub fn parse(source: &str) -> Vec<VectorLine> {
    let lines: Vec<_> = raw_lines(source).map(parse_vector_line).collect();
    debug!(lines = lines.len(); "Parsed vector description");
    lines
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let lines = parse("\n  \nA=1∠0\r\n\t\nB=2∠90\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name(), &Fragment::Text("A".to_string()));
        assert_eq!(lines[1].name(), &Fragment::Text("B".to_string()));
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n").is_empty());
    }

    #[test]
    fn test_parse_keeps_malformed_lines() {
        let lines = parse("A=5∠0\ngarbage\nC=x∠y");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].magnitude_value().is_nan());
        assert!(lines[2].angle_value().is_nan());
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics_and_keeps_count(source in "\\PC*") {
            let expected = raw_lines(&source).count();
            prop_assert_eq!(parse(&source).len(), expected);
        }

        #[test]
        fn prop_well_formed_lines_round_trip(
            name in "[A-Za-z][A-Za-z0-9_]{0,6}",
            magnitude in -1.0e6f64..1.0e6,
            angle in -720.0f64..720.0,
        ) {
            let line = parse_vector_line(&format!("{name}={magnitude}∠{angle}°"));
            prop_assert_eq!(line.name(), &Fragment::Text(name));
            prop_assert_eq!(line.magnitude_value(), magnitude);
            prop_assert_eq!(line.angle_value(), angle);
        }
    }
}
