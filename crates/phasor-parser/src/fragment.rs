//! Fragments: the name, magnitude and angle pieces of a vector line.

use std::fmt;

use crate::number::parse_number;

/// The Unicode minus sign (U+2212), as produced by word processors and
/// copied from typeset formulas.
pub const UNICODE_MINUS: char = '\u{2212}';

/// One interpreted piece of a vector line.
///
/// A fragment is numeric when its text reads as a number, and text
/// otherwise. Names are usually text, magnitudes and angles usually numeric,
/// but either kind can appear in any position.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A numeric value. May be NaN when a `−` prefix precedes non-numeric text.
    Numeric(f64),
    /// Text that does not read as a number, kept verbatim.
    Text(String),
}

impl Fragment {
    /// Returns the numeric value, or NaN for text.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Numeric(value) => *value,
            Self::Text(_) => f64::NAN,
        }
    }

    /// Returns `true` if this fragment holds a number that is not NaN.
    pub fn is_numeric(&self) -> bool {
        !self.to_number().is_nan()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Numeric(value) if value.is_infinite() => {
                let sign = if value.is_sign_negative() { "-" } else { "" };
                write!(f, "{sign}Infinity")
            }
            // Negative zero prints as plain zero
            Self::Numeric(value) if *value == 0.0 => f.write_str("0"),
            Self::Numeric(value) if !value.is_nan() && !(1e-6..1e21).contains(&value.abs()) => {
                write_exponent(f, *value)
            }
            Self::Numeric(value) => write!(f, "{value}"),
        }
    }
}

/// Writes `value` as `1.5e+22` or `1e-7`, the form numbers take in
/// names outside the plain decimal range.
fn write_exponent(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&formatted),
    }
}

/// Interprets one cleaned token.
///
/// - A leading `−` (U+2212) negates the number that follows. The result is
///   NaN if the remainder is not numeric.
/// - A token that reads as a number becomes [`Fragment::Numeric`].
/// - Anything else is returned unchanged as [`Fragment::Text`].
///
/// # Examples
///
/// ```
/// # use phasor_parser::{Fragment, parse_fragment};
/// assert_eq!(parse_fragment("−3"), Fragment::Numeric(-3.0));
/// assert_eq!(parse_fragment("30"), Fragment::Numeric(30.0));
/// assert_eq!(parse_fragment("Vab"), Fragment::Text("Vab".to_string()));
/// ```
pub fn parse_fragment(token: &str) -> Fragment {
    if let Some(rest) = token.strip_prefix(UNICODE_MINUS) {
        return Fragment::Numeric(-parse_number(rest).unwrap_or(f64::NAN));
    }

    match parse_number(token) {
        Some(value) => Fragment::Numeric(value),
        None => Fragment::Text(token.to_string()),
    }
}
