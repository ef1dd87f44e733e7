use nom::IResult;
use nom::bytes::complete::{tag, take_while1, take_while_m_n};
use nom::character::complete::{char, space0};
use nom::combinator::{all_consuming, map, map_res, opt, rest};
use nom::sequence::{delimited, preceded, tuple};

/// One data line of `WordBreakProperty.txt`, e.g.
/// `0041..005A    ; ALetter # L&  [26] LATIN CAPITAL LETTER A..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct UcdEntry<'a> {
    pub start: u32,
    pub end: u32,
    pub tag: &'a str,
}

/// Returns true for lines that carry no data.
pub(super) fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

pub(super) fn parse_entry(input: &str) -> IResult<&str, UcdEntry<'_>> {
    map(
        all_consuming(tuple((
            preceded(space0, parse_range),
            delimited(space0, char(';'), space0),
            parse_tag,
            space0,
            opt(parse_comment),
        ))),
        |((start, end), _, tag, _, _)| UcdEntry { start, end, tag },
    )(input)
}

fn parse_codepoint(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u32::from_str_radix(hex, 16),
    )(input)
}

fn parse_range(input: &str) -> IResult<&str, (u32, u32)> {
    let (input, start) = parse_codepoint(input)?;
    let (input, end) = opt(preceded(tag(".."), parse_codepoint))(input)?;
    Ok((input, (start, end.unwrap_or(start))))
}

fn parse_tag(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn parse_comment(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), rest)(input)
}
