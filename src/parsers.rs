//! A module for parsing raw byte slices into matrix rows.

extern crate nom;
use std::str::from_utf8_unchecked;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, multispace0};
use nom::combinator::opt;
use nom::multi::many0;
use nom::sequence::{delimited, tuple};
use nom::IResult;

#[inline(always)]
fn parse_value(i: &[u8]) -> IResult<&[u8], i64> {
    let (remaining_input, (sign, number)) = tuple((opt(alt((tag("+"), tag("-")))), digit1))(i)?;
    let multiplier = match sign {
        None => 1,
        Some(b"+") => 1,
        Some(b"-") => -1,
        _ => unreachable!(),
    };
    // not unsafe because digit1 only ever matches ASCII digits
    let num = unsafe { from_utf8_unchecked(number) }
        .parse::<i64>()
        .unwrap()
        * multiplier;
    Ok((remaining_input, num))
}

/// Parses one line of matrix text, `i` (as a `&[u8]`), into an
/// `Option<Vec<i64>>`, returning `Some` if the whole line is a
/// whitespace-separated sequence of signed base-10 integers and `None`
/// otherwise. An empty line parses to an empty row.
///
/// # Examples
/// ```
/// use matgen::parsers::parse_row;
/// let i = b"4 8 -15 16";
///
/// assert_eq!(Some(vec![4, 8, -15, 16]), parse_row(i));
/// ```
pub fn parse_row(i: &[u8]) -> Option<Vec<i64>> {
    // note: multispace0 also swallows the terminating newline
    let (remaining_input, values) =
        many0(delimited(multispace0, parse_value, multispace0))(i).unwrap();
    if remaining_input != b"" {
        None
    } else {
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        let x = parse_value(b"+123");
        assert_eq!(x.unwrap().1, 123);
        let y = parse_value(b"-123");
        assert_eq!(y.unwrap().1, -123);
        let z = parse_value(b"123");
        assert_eq!(z.unwrap().1, 123);
        let w = parse_value(b"01");
        assert_eq!(w.unwrap().1, 1);
    }

    #[test]
    fn test_parse_row() {
        let row = parse_row(b"1 -2 +3 40");
        assert_eq!(row, Some(vec![1, -2, 3, 40]));

        let trailing_newline = parse_row(b"-50 50\n");
        assert_eq!(trailing_newline, Some(vec![-50, 50]));

        let extra_spacing = parse_row(b"  7   8 ");
        assert_eq!(extra_spacing, Some(vec![7, 8]));

        let empty = parse_row(b"");
        assert_eq!(empty, Some(vec![]));

        let single = parse_row(b"-7");
        assert_eq!(single, Some(vec![-7]));
    }

    #[test]
    fn test_parse_row_rejects_bad_lines() {
        let failing = parse_row(b"1 2 three");
        assert_eq!(failing, None);
        let failing2 = parse_row(b"1.5 2");
        assert_eq!(failing2, None);
        let failing3 = parse_row(b"- 1");
        assert_eq!(failing3, None);
        let failing4 = parse_row(b"3 -");
        assert_eq!(failing4, None);
    }
}
