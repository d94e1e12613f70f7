//! Vector line parsing.
//!
//! A vector line has the shape `name<sep>magnitude<sep>angle`, where `<sep>`
//! is any of `=`, `:`, `@` or `∠`. Magnitude and angle may carry decorations
//! that are stripped before interpretation: a degree sign, a bracketed
//! annotation such as `[V]`, and parentheses.
//!
//! ```text
//! Va = 230∠0°
//! Ib: (5) @ −120 [deg]
//! ```

use log::trace;

use crate::fragment::{Fragment, parse_fragment};

/// Characters that separate the name, magnitude and angle.
pub const SEPARATORS: [char; 4] = ['=', ':', '@', '∠'];

/// Only the first three pieces of a line are kept.
const MAX_FRAGMENTS: usize = 3;

/// One parsed line, before conversion to Cartesian form.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorLine {
    name: Fragment,
    magnitude: Option<Fragment>,
    angle: Option<Fragment>,
}

impl VectorLine {
    /// Creates a vector line from its fragments.
    pub fn new(name: Fragment, magnitude: Option<Fragment>, angle: Option<Fragment>) -> Self {
        Self {
            name,
            magnitude,
            angle,
        }
    }

    /// Returns the name fragment.
    pub fn name(&self) -> &Fragment {
        &self.name
    }

    /// Returns the magnitude fragment, if the line had one.
    pub fn magnitude(&self) -> Option<&Fragment> {
        self.magnitude.as_ref()
    }

    /// Returns the angle fragment, if the line had one.
    pub fn angle(&self) -> Option<&Fragment> {
        self.angle.as_ref()
    }

    /// Returns the magnitude as a number; NaN when missing or not numeric.
    pub fn magnitude_value(&self) -> f64 {
        self.magnitude.as_ref().map_or(f64::NAN, Fragment::to_number)
    }

    /// Returns the angle in degrees; NaN when missing or not numeric.
    pub fn angle_value(&self) -> f64 {
        self.angle.as_ref().map_or(f64::NAN, Fragment::to_number)
    }
}

/// Parses a single vector line.
///
/// The line is split on every separator and only the first three pieces are
/// kept; text after a third separator is discarded. Missing pieces are
/// `None`. This never fails: malformed content is left for the layout stage
/// to collapse.
///
/// # Examples
///
/// ```
/// # use phasor_parser::{Fragment, parse_vector_line};
/// let line = parse_vector_line("Va = 230∠30°");
/// assert_eq!(line.name(), &Fragment::Text("Va".to_string()));
/// assert_eq!(line.magnitude_value(), 230.0);
/// assert_eq!(line.angle_value(), 30.0);
/// ```
pub fn parse_vector_line(line: &str) -> VectorLine {
    let mut fragments = line
        .split(SEPARATORS)
        .take(MAX_FRAGMENTS)
        .map(|raw| parse_fragment(&clean_fragment(raw)));

    // `split` always yields at least one piece
    let name = fragments.next().unwrap_or_else(|| parse_fragment(""));
    let magnitude = fragments.next();
    let angle = fragments.next();

    trace!(line = line, name:% = name; "Parsed vector line");

    VectorLine::new(name, magnitude, angle)
}

/// Strips decorations from a raw piece: a bracketed annotation (from the
/// first `[` to the last `]` after it), degree signs and parentheses.
fn clean_fragment(raw: &str) -> String {
    let mut cleaned = raw.to_string();

    if let Some(open) = cleaned.find('[') {
        if let Some(close) = cleaned[open..].rfind(']') {
            cleaned.replace_range(open..=open + close, "");
        }
    }

    cleaned.retain(|c| !matches!(c, '°' | '(' | ')'));
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Fragment {
        Fragment::Text(s.to_string())
    }

    #[test]
    fn test_every_separator() {
        for line in ["A=5=30", "A:5:30", "A@5@30", "A∠5∠30", "A=5∠30", "A:5@30"] {
            let parsed = parse_vector_line(line);
            assert_eq!(parsed.name(), &text("A"), "line {line}");
            assert_eq!(parsed.magnitude_value(), 5.0, "line {line}");
            assert_eq!(parsed.angle_value(), 30.0, "line {line}");
        }
    }

    #[test]
    fn test_decorations_are_stripped() {
        let parsed = parse_vector_line("Ia = (10) [A] ∠ −45° [deg]");
        assert_eq!(parsed.name(), &text("Ia"));
        assert_eq!(parsed.magnitude_value(), 10.0);
        assert_eq!(parsed.angle_value(), -45.0);
    }

    #[test]
    fn test_brackets_are_greedy() {
        assert_eq!(clean_fragment("5 [a] 7 [b]"), "5");
        assert_eq!(clean_fragment("x]y[z"), "x]y[z");
        assert_eq!(clean_fragment("[only]"), "");
    }

    #[test]
    fn test_parentheses_and_degrees_removed() {
        assert_eq!(clean_fragment(" (90°) "), "90");
        assert_eq!(clean_fragment("((−1))"), "−1");
    }

    #[test]
    fn test_missing_fields_are_none() {
        let parsed = parse_vector_line("A=5");
        assert_eq!(parsed.magnitude(), Some(&Fragment::Numeric(5.0)));
        assert_eq!(parsed.angle(), None);
        assert!(parsed.angle_value().is_nan());

        let parsed = parse_vector_line("lonely");
        assert_eq!(parsed.name(), &text("lonely"));
        assert_eq!(parsed.magnitude(), None);
        assert!(parsed.magnitude_value().is_nan());
    }

    #[test]
    fn test_empty_field_reads_as_zero() {
        let parsed = parse_vector_line("A=5∠");
        assert_eq!(parsed.angle(), Some(&Fragment::Numeric(0.0)));
    }

    #[test]
    fn test_extra_pieces_are_discarded() {
        let parsed = parse_vector_line("A=5∠30@junk");
        assert_eq!(parsed.angle_value(), 30.0);
    }

    #[test]
    fn test_text_magnitude_is_nan() {
        let parsed = parse_vector_line("A=big∠30");
        assert_eq!(parsed.magnitude(), Some(&text("big")));
        assert!(parsed.magnitude_value().is_nan());
    }

    #[test]
    fn test_numeric_name() {
        let parsed = parse_vector_line("1=5∠0");
        assert_eq!(parsed.name(), &Fragment::Numeric(1.0));
        assert_eq!(parsed.name().to_string(), "1");
    }
}
