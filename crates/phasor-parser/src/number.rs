//! Numeric literal recognition.
//!
//! Accepts the literal forms a vector description may use for magnitudes and
//! angles:
//!
//! - decimal: `5`, `5.`, `.5`, `-2.5`, `+1e3`, `4.7E-2`
//! - `Infinity` with an optional sign
//! - unsigned radix integers: `0x1F`, `0o17`, `0b101`
//!
//! Surrounding whitespace is ignored and blank input reads as zero. Anything
//! else, including Rust-only spellings such as `inf` or `NaN`, is not a
//! number.

use winnow::{
    Parser as _,
    ascii::{digit1, hex_digit1},
    combinator::{alt, opt, preceded},
    error::{ContextError, ErrMode},
    token::{one_of, take_while},
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Reads `input` as a number, or returns `None` if it is not one.
///
/// # Examples
///
/// ```
/// # use phasor_parser::parse_number;
/// assert_eq!(parse_number(" 30 "), Some(30.0));
/// assert_eq!(parse_number("0x10"), Some(16.0));
/// assert_eq!(parse_number(""), Some(0.0));
/// assert_eq!(parse_number("Va"), None);
/// ```
pub fn parse_number(input: &str) -> Option<f64> {
    let mut remaining = input.trim();
    if remaining.is_empty() {
        return Some(0.0);
    }

    let value = number(&mut remaining).ok()?;
    remaining.is_empty().then_some(value)
}

fn number(input: &mut &str) -> IResult<f64> {
    alt((radix_integer, signed_decimal)).parse_next(input)
}

fn radix_integer(input: &mut &str) -> IResult<f64> {
    preceded(
        '0',
        alt((
            preceded(one_of(['x', 'X']), hex_digit1).map(|digits| radix_value(digits, 16)),
            preceded(one_of(['o', 'O']), take_while(1.., '0'..='7'))
                .map(|digits| radix_value(digits, 8)),
            preceded(one_of(['b', 'B']), take_while(1.., ['0', '1']))
                .map(|digits| radix_value(digits, 2)),
        )),
    )
    .parse_next(input)
}

fn signed_decimal(input: &mut &str) -> IResult<f64> {
    (sign, alt(("Infinity".value(f64::INFINITY), decimal)))
        .map(|(negative, magnitude)| if negative { -magnitude } else { magnitude })
        .parse_next(input)
}

fn sign(input: &mut &str) -> IResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

fn decimal(input: &mut &str) -> IResult<f64> {
    decimal_literal
        .verify_map(|literal: &str| literal.parse::<f64>().ok())
        .parse_next(input)
}

fn decimal_literal<'s>(input: &mut &'s str) -> IResult<&'s str> {
    (
        alt((
            (digit1, opt(('.', opt(digit1)))).void(),
            ('.', digit1).void(),
        )),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

// Digits are pre-validated by the caller's token set.
fn radix_value(digits: &str, radix: u32) -> f64 {
    digits.chars().fold(0.0, |acc, digit| {
        acc * f64::from(radix) + f64::from(digit.to_digit(radix).unwrap_or(0))
    })
}
