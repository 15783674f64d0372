//! # IBM codepage files
//!
//! The IBM globalization site publishes one text file per code page. Apart from
//! `*` comment lines, each line lists a byte value, the GCGID of the graphic
//! character and its description:
//!
//! ```text
//! * Code Page          : 01140
//! C1   LA020000    LATIN CAPITAL LETTER A
//! 9F   SC200000    EURO SIGN
//! ```
use displaydoc::Display;
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::space1,
    combinator::{eof, map_res, opt, recognize},
    sequence::{pair, preceded, terminated},
    Finish, IResult, Offset,
};

use crate::description::CodePoint;

/// One character of a codepage file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepageEntry {
    /// The 1-based line number in the source file
    pub line: usize,
    /// The byte value
    pub byte: u8,
    /// The IBM graphic character global identifier
    pub gcgid: Option<String>,
    /// The unicode value, if the file lists it
    pub unicode: Option<CodePoint>,
    /// The character description as written in the file
    pub description: String,
}

/// Why a line was skipped
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// not a codepage entry ({0:?} at column {1})
    Syntax(nom::error::ErrorKind, usize),
    /// entry has neither description nor unicode value
    Empty,
}

/// A line that could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// The 1-based line number
    pub line: usize,
    /// The text of the line
    pub text: String,
    /// The reason
    pub reason: SkipReason,
}

/// A parsed IBM codepage file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodepageFile {
    /// The code page identifier from the header, e.g. `01140`
    pub code_page: Option<String>,
    /// The entries in file order
    pub entries: Vec<CodepageEntry>,
    /// Lines that were not understood
    pub skipped: Vec<SkippedLine>,
}

fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    preceded(
        opt(tag_no_case("0x")),
        map_res(take_while_m_n(2, 2, is_hex), |src| {
            u8::from_str_radix(src, 16)
        }),
    )(input)
}

/// A whitespace separated token
fn field<'a, O, F>(f: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    terminated(f, alt((space1, eof)))
}

fn gcgid(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while_m_n(2, 2, |c: char| c.is_ascii_uppercase()),
        take_while_m_n(6, 6, |c: char| c.is_ascii_digit()),
    ))(input)
}

fn unicode(input: &str) -> IResult<&str, CodePoint> {
    preceded(
        tag_no_case("U+"),
        map_res(take_while_m_n(4, 6, is_hex), |src: &str| {
            src.parse::<CodePoint>()
        }),
    )(input)
}

fn p_entry_line(input: &str) -> IResult<&str, (u8, Option<&str>, Option<CodePoint>)> {
    let (input, byte) = field(hex_byte)(input)?;
    let (input, gcgid) = opt(field(gcgid))(input)?;
    let (input, unicode) = opt(field(unicode))(input)?;
    Ok((input, (byte, gcgid, unicode)))
}

fn p_code_page_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("* Code Page")?;
    let (_, id) = rest.split_once(':')?;
    Some(id.trim())
}

/// Parse the text of an IBM codepage file
///
/// ```
/// use ibm_codepage::codepage::parse_codepage_file;
/// let file = parse_codepage_file("* Code Page : 01140\nC1   LA020000    LATIN CAPITAL LETTER A\n");
/// assert_eq!(file.code_page.as_deref(), Some("01140"));
/// assert_eq!(file.entries[0].byte, 0xC1);
/// assert_eq!(file.entries[0].description, "LATIN CAPITAL LETTER A");
/// ```
pub fn parse_codepage_file(input: &str) -> CodepageFile {
    let mut file = CodepageFile::default();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('*') {
            if file.code_page.is_none() {
                file.code_page = p_code_page_header(line).map(str::to_owned);
            }
            continue;
        }

        let num = index + 1;
        let skip = |reason| SkippedLine {
            line: num,
            text: line.to_owned(),
            reason,
        };
        match p_entry_line(line).finish() {
            Ok((rest, (byte, gcgid, unicode))) => {
                let description = rest.trim();
                if description.is_empty() && unicode.is_none() {
                    file.skipped.push(skip(SkipReason::Empty));
                } else {
                    file.entries.push(CodepageEntry {
                        line: num,
                        byte,
                        gcgid: gcgid.map(str::to_owned),
                        unicode,
                        description: description.to_owned(),
                    });
                }
            }
            Err(e) => {
                let reason = SkipReason::Syntax(e.code, line.offset(e.input) + 1);
                file.skipped.push(skip(reason));
            }
        }
    }
    file
}

#[cfg(test)]
mod tests {
    use super::{parse_codepage_file, SkipReason};
    use crate::description::CodePoint;

    const CP01140: &str = "\
* Code Page          : 01140
* Description        : USA/Canada - CECP with Euro
*
*  Hex  GCGID     Description
40   SP010000    SPACE
C1   LA020000    LATIN CAPITAL LETTER A\r
9F   SC200000    EURO SIGN
";

    #[test]
    fn test_ibm_layout() {
        let file = parse_codepage_file(CP01140);
        assert_eq!(file.code_page.as_deref(), Some("01140"));
        assert!(file.skipped.is_empty());
        assert_eq!(file.entries.len(), 3);

        let euro = &file.entries[2];
        assert_eq!(euro.line, 7);
        assert_eq!(euro.byte, 0x9F);
        assert_eq!(euro.gcgid.as_deref(), Some("SC200000"));
        assert_eq!(euro.unicode, None);
        assert_eq!(euro.description, "EURO SIGN");
        assert_eq!(file.entries[1].description, "LATIN CAPITAL LETTER A");
    }

    #[test]
    fn test_short_layout() {
        let file = parse_codepage_file("0xC1 LATIN CAPITAL LETTER A\n0xc2 latin capital letter b");
        assert_eq!(file.code_page, None);
        assert_eq!(file.entries[0].byte, 0xC1);
        assert_eq!(file.entries[0].gcgid, None);
        assert_eq!(file.entries[0].description, "LATIN CAPITAL LETTER A");
        assert_eq!(file.entries[1].byte, 0xC2);
        assert_eq!(file.entries[1].description, "latin capital letter b");
    }

    #[test]
    fn test_description_looks_like_gcgid() {
        let file = parse_codepage_file("C1 LATIN CAPITAL LETTER A\n41 SP010000\n");
        assert_eq!(file.entries[0].gcgid, None);
        assert_eq!(file.entries[0].description, "LATIN CAPITAL LETTER A");
        assert_eq!(file.skipped.len(), 1);
        assert_eq!(file.skipped[0].line, 2);
        assert_eq!(file.skipped[0].reason, SkipReason::Empty);
    }

    #[test]
    fn test_unicode_column() {
        let file = parse_codepage_file("9F SC200000 U+20AC EURO SIGN\nA0 U+00A0\n");
        assert_eq!(file.entries[0].unicode, Some(CodePoint(0x20AC)));
        assert_eq!(file.entries[0].description, "EURO SIGN");
        assert_eq!(file.entries[1].unicode, Some(CodePoint(0xA0)));
        assert_eq!(file.entries[1].description, "");
    }

    #[test]
    fn test_malformed_lines() {
        let file = parse_codepage_file("Hex Description\nC1\tLATIN CAPITAL LETTER A\nC12 FOO\n");
        assert_eq!(file.entries.len(), 1);
        assert_eq!(file.entries[0].line, 2);
        assert_eq!(file.skipped.len(), 2);
        assert_eq!(file.skipped[0].line, 1);
        assert_eq!(file.skipped[0].text, "Hex Description");
        assert!(matches!(file.skipped[0].reason, SkipReason::Syntax(_, 1)));
        assert!(matches!(file.skipped[1].reason, SkipReason::Syntax(_, 3)));
    }
}
