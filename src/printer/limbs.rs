//! Limb list parsing
//!
//! Turns the textual dump of a limb array into raw `u32` limbs. Accepted
//! shapes:
//!
//! - `{1, 2, 3, 4, 5}` or `[1, 2, 3, 4, 5]`
//! - `{_M_elems = {1, 2, 3, 4, 5}}`, as libstdc++ arrays are dumped
//! - `1 2 3 4 5` or `1,2,3,4,5`
//!
//! Elements are decimal or `0x`-prefixed hex. The number of elements is not
//! checked here, [`super::format_slice`] does that.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit1, hex_digit1, multispace0, multispace1},
    combinator::{all_consuming, map, value},
    multi::separated_list0,
    sequence::{delimited, preceded},
};
use std::fmt;

use super::PrinterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Literal<'a> {
    Decimal(&'a str),
    Hex(&'a str),
}

impl Literal<'_> {
    fn value(self) -> Result<u32, PrinterError> {
        let parsed = match self {
            Literal::Decimal(digits) => digits.parse::<u32>(),
            Literal::Hex(digits) => u32::from_str_radix(digits, 16),
        };

        parsed.map_err(|_| PrinterError::Parse(format!("limb {self} does not fit in 32 bits")))
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Decimal(digits) => write!(f, "{digits}"),
            Literal::Hex(digits) => write!(f, "0x{digits}"),
        }
    }
}

fn literal(input: &str) -> IResult<&str, Literal<'_>> {
    alt((
        map(preceded(tag_no_case("0x"), hex_digit1), Literal::Hex),
        map(digit1, Literal::Decimal),
    ))
    .parse(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, char(','), multispace0)),
        value((), multispace1),
    ))
    .parse(input)
}

fn elements(input: &str) -> IResult<&str, Vec<Literal<'_>>> {
    separated_list0(separator, literal).parse(input)
}

fn bracketed(input: &str) -> IResult<&str, Vec<Literal<'_>>> {
    alt((
        delimited((char('{'), multispace0), elements, (multispace0, char('}'))),
        delimited((char('['), multispace0), elements, (multispace0, char(']'))),
    ))
    .parse(input)
}

fn array_dump(input: &str) -> IResult<&str, Vec<Literal<'_>>> {
    delimited(
        (
            char('{'),
            multispace0,
            tag("_M_elems"),
            multispace0,
            char('='),
            multispace0,
        ),
        bracketed,
        (multispace0, char('}')),
    )
    .parse(input)
}

fn limb_list(input: &str) -> IResult<&str, Vec<Literal<'_>>> {
    all_consuming(delimited(
        multispace0,
        alt((array_dump, bracketed, elements)),
        multispace0,
    ))
    .parse(input)
}

/// Parse a textual limb list into limbs, most significant first
///
/// # Errors
///
/// Returns `PrinterError::Parse` if the text is not a limb list or if an
/// element does not fit in 32 bits.
pub fn parse_limb_list(input: &str) -> Result<Vec<u32>, PrinterError> {
    let (_, literals) = limb_list(input).map_err(|e| match e {
        nom::Err::Error(err) | nom::Err::Failure(err) => {
            PrinterError::Parse(format!("unexpected input at `{}`", err.input))
        }
        nom::Err::Incomplete(_) => PrinterError::Parse("incomplete input".to_string()),
    })?;

    literals.into_iter().map(Literal::value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_braced_list() {
        assert_eq!(parse_limb_list("{1, 2, 3, 4, 5}").unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(parse_limb_list("[ 1,2,3 ]").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_array_dump() {
        let limbs =
            parse_limb_list("{_M_elems = {3735928559, 305419896, 0, 0, 4294967295}}").unwrap();
        assert_eq!(limbs, vec![0xDEAD_BEEF, 0x1234_5678, 0, 0, u32::MAX]);
    }

    #[test]
    fn test_parse_bare_list() {
        assert_eq!(
            parse_limb_list("  0xdeadbeef 0X12345678 0 0 0xFFFFFFFF\n").unwrap(),
            vec![0xDEAD_BEEF, 0x1234_5678, 0, 0, u32::MAX]
        );
        assert_eq!(parse_limb_list("7,8").unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_limb_list("").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_limb_list("{}").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = parse_limb_list("{4294967296, 0, 0, 0, 0}").unwrap_err();
        assert_eq!(
            err,
            PrinterError::Parse("limb 4294967296 does not fit in 32 bits".to_string())
        );
        assert!(parse_limb_list("0x100000000").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_limb_list("{1, -2, 3}"),
            Err(PrinterError::Parse(_))
        ));
        assert!(matches!(parse_limb_list("one two"), Err(PrinterError::Parse(_))));
        assert!(matches!(parse_limb_list("{1, 2"), Err(PrinterError::Parse(_))));
    }

    #[test]
    fn test_parsed_list_feeds_formatter() {
        let limbs = parse_limb_list("{_M_elems = {0, 0, 0, 0, 1}}").unwrap();
        assert_eq!(
            super::super::format_slice(&limbs).unwrap(),
            "0000000000000000000000000000000000000001"
        );

        let short = parse_limb_list("{1, 2, 3, 4}").unwrap();
        assert_eq!(
            super::super::format_slice(&short),
            Err(PrinterError::InvalidInput {
                expected: 5,
                actual: 4
            })
        );
    }
}
