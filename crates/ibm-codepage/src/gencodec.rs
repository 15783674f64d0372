//! # Mapping tables for `gencodec.py`
//!
//! `gencodec.py` reads lines of the form `0xHH<TAB>0xHHHH<TAB># COMMENT`.
//! Lines starting with `#` are ignored, and an empty unicode column marks the
//! byte as undefined.
use std::io::{self, Write};

use crate::{
    codepage::{CodepageEntry, CodepageFile},
    description::{normalize, CodePoint, DescriptionMap},
};

/// Comment prefix for entries whose description could not be resolved
pub const UNRESOLVED_MARKER: &str = "UNRESOLVED";

/// How a single entry was resolved
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The codepage file lists the unicode value
    Listed(CodePoint),
    /// The description map knows the description
    Mapped(CodePoint),
    /// Nothing is known about the description
    Unresolved,
}

impl Resolution {
    /// The code point, if any
    pub fn code_point(self) -> Option<CodePoint> {
        match self {
            Self::Listed(cp) | Self::Mapped(cp) => Some(cp),
            Self::Unresolved => None,
        }
    }
}

/// Find the unicode value of an entry
pub fn resolve(entry: &CodepageEntry, map: &DescriptionMap) -> Resolution {
    if let Some(cp) = entry.unicode {
        Resolution::Listed(cp)
    } else if let Some(cp) = map.get(&entry.description) {
        Resolution::Mapped(cp)
    } else {
        Resolution::Unresolved
    }
}

/// Write the header comment
pub fn write_header<W: Write>(out: &mut W, file: &CodepageFile, source: &str) -> io::Result<()> {
    writeln!(out, "#")?;
    if let Some(code_page) = &file.code_page {
        writeln!(out, "#\tName:     IBM code page {}", code_page)?;
    }
    writeln!(out, "#\tSource:   {}", source)?;
    writeln!(out, "#")?;
    Ok(())
}

/// Write one entry line
pub fn write_entry<W: Write>(
    out: &mut W,
    entry: &CodepageEntry,
    resolution: Resolution,
) -> io::Result<()> {
    let description = normalize(&entry.description);
    match resolution.code_point() {
        Some(cp) => writeln!(out, "0x{:02X}\t{}\t# {}", entry.byte, cp, description),
        None => writeln!(
            out,
            "0x{:02X}\t\t# {}: {}",
            entry.byte, UNRESOLVED_MARKER, description
        ),
    }
}

/// Write a full mapping table, returning the resolution of every entry
pub fn write_mapping<W: Write>(
    out: &mut W,
    file: &CodepageFile,
    map: &DescriptionMap,
    source: &str,
) -> io::Result<Vec<Resolution>> {
    write_header(out, file, source)?;
    let mut resolutions = Vec::with_capacity(file.entries.len());
    for entry in &file.entries {
        let resolution = resolve(entry, map);
        write_entry(out, entry, resolution)?;
        resolutions.push(resolution);
    }
    Ok(resolutions)
}

#[cfg(test)]
mod tests {
    use super::{write_mapping, Resolution};
    use crate::{
        codepage::parse_codepage_file,
        description::{CodePoint, DescriptionMap},
    };

    fn render(input: &str, map: &DescriptionMap) -> (String, Vec<Resolution>) {
        let file = parse_codepage_file(input);
        let mut out = Vec::new();
        let res = write_mapping(&mut out, &file, map, "TEST.txt").unwrap();
        (String::from_utf8(out).unwrap(), res)
    }

    #[test]
    fn test_known_description() {
        let map = DescriptionMap::from_json(r#"{"LATIN CAPITAL LETTER A": "0041"}"#).unwrap();
        let (text, res) = render("0xC1 LATIN CAPITAL LETTER A\n", &map);
        assert_eq!(
            text,
            "#\n#\tSource:   TEST.txt\n#\n0xC1\t0x0041\t# LATIN CAPITAL LETTER A\n"
        );
        assert_eq!(res, [Resolution::Mapped(CodePoint(0x41))]);
    }

    #[test]
    fn test_unresolved() {
        let (text, res) = render(
            "* Code Page : 01147\n9F   SC200000    Euro sign\n",
            &DescriptionMap::new(),
        );
        assert!(text.starts_with("#\n#\tName:     IBM code page 01147\n"));
        assert!(text.ends_with("0x9F\t\t# UNRESOLVED: EURO SIGN\n"));
        assert_eq!(res, [Resolution::Unresolved]);
    }

    #[test]
    fn test_listed_wins() {
        let mut map = DescriptionMap::new();
        map.insert("NO-BREAK SPACE", CodePoint(0x20));
        let (text, res) = render("41 SP300000 U+00A0 NO-BREAK SPACE\n", &map);
        assert!(text.ends_with("0x41\t0x00A0\t# NO-BREAK SPACE\n"));
        assert_eq!(res, [Resolution::Listed(CodePoint(0xA0))]);
    }
}
