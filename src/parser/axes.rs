// Axes expression parser

use super::lexer::{identifier, string_literal, ws};
use crate::mapper::AxisSelection;
use nom::{branch::alt, bytes::complete::tag, character::complete::char, IResult};

/// A column name is a bare identifier, or a quoted literal for names with
/// spaces or non-ASCII characters
fn column_name(input: &str) -> IResult<&str, String> {
    alt((string_literal, identifier))(input)
}

/// Parse an axis assignment expression
/// Format: axes(x: col, y: col, z: col)
pub fn parse_axes(input: &str) -> IResult<&str, AxisSelection> {
    let (input, _) = ws(tag("axes"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, _) = ws(tag("x:"))(input)?;
    let (input, x) = ws(column_name)(input)?;
    let (input, _) = ws(char(','))(input)?;

    let (input, _) = ws(tag("y:"))(input)?;
    let (input, y) = ws(column_name)(input)?;
    let (input, _) = ws(char(','))(input)?;

    let (input, _) = ws(tag("z:"))(input)?;
    let (input, z) = ws(column_name)(input)?;

    let (input, _) = ws(char(')'))(input)?;

    Ok((input, AxisSelection { x, y, z }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axes() {
        let result = parse_axes("axes(x: height, y: weight, z: species)");
        assert!(result.is_ok());
        let (_, selection) = result.unwrap();
        assert_eq!(selection.x, "height");
        assert_eq!(selection.y, "weight");
        assert_eq!(selection.z, "species");
    }

    #[test]
    fn test_parse_axes_with_whitespace() {
        let result = parse_axes("  axes( x: a , y: b , z: c )  ");
        assert!(result.is_ok());
        let (_, selection) = result.unwrap();
        assert_eq!(selection.x, "a");
        assert_eq!(selection.z, "c");
    }

    #[test]
    fn test_parse_axes_quoted_column() {
        let result = parse_axes("axes(x: \"sepal length\", y: b, z: \"température\")");
        assert!(result.is_ok());
        let (_, selection) = result.unwrap();
        assert_eq!(selection.x, "sepal length");
        assert_eq!(selection.z, "température");
    }

    #[test]
    fn test_parse_axes_missing_z() {
        assert!(parse_axes("axes(x: a, y: b)").is_err());
    }

    #[test]
    fn test_parse_axes_missing_comma() {
        assert!(parse_axes("axes(x: a y: b, z: c)").is_err());
    }

    #[test]
    fn test_parse_axes_wrong_order() {
        // The parser expects x, y, z in that order
        assert!(parse_axes("axes(y: b, x: a, z: c)").is_err());
    }

    #[test]
    fn test_parse_axes_unclosed_paren() {
        assert!(parse_axes("axes(x: a, y: b, z: c").is_err());
    }
}
