//! # Reference encodings
//!
//! A reference encoding is a single byte encoding whose mapping to unicode is
//! already known. Decoding the bytes of an IBM codepage file under such an
//! encoding teaches us which unicode character each description stands for.
//!
//! Four sources are consulted, in this order:
//!
//! - ISO-8859-1 and US-ASCII, which are decoded directly,
//! - the built-in EBCDIC tables (037, 273, 500 and their euro variants),
//! - the DOS OEM code pages of the [`oem_cp`] crate,
//! - the WHATWG labels understood by [`encoding_rs`].
use std::fmt;

use displaydoc::Display;
use encoding_rs::Encoding;
use oem_cp::code_table::DECODING_TABLE_CP_MAP;
use oem_cp::code_table_type::TableType;
use thiserror::Error;

pub mod ebcdic;

use ebcdic::EURO_BYTE;

const EURO_SIGN: char = '\u{20AC}';

/// Error when looking up a reference encoding
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Unknown encoding `{0}`
    Unknown(String),
    /// Encoding `{0}` is not a single byte encoding
    NotSingleByte(String),
}

/// An EBCDIC table, optionally with the euro sign patched in
#[derive(Copy, Clone)]
pub struct Ebcdic {
    id: u16,
    table: &'static [char; 256],
    euro: bool,
}

impl Ebcdic {
    /// Look up a built-in EBCDIC code page by number
    pub fn for_id(id: u16) -> Option<Self> {
        let (table, euro) = match id {
            37 => (&ebcdic::CP037, false),
            273 => (&ebcdic::CP273, false),
            500 => (&ebcdic::CP500, false),
            1140 => (&ebcdic::CP037, true),
            1141 => (&ebcdic::CP273, true),
            1148 => (&ebcdic::CP500, true),
            _ => return None,
        };
        Some(Self { id, table, euro })
    }

    /// Decode a single byte
    pub fn decode(&self, byte: u8) -> char {
        if self.euro && byte == EURO_BYTE {
            EURO_SIGN
        } else {
            self.table[byte as usize]
        }
    }
}

/// A single byte encoding that is used as a reference
#[derive(Copy, Clone)]
pub enum ReferenceEncoding {
    /// ISO-8859-1, where every byte is the code point of the same value
    Latin1,
    /// US-ASCII, which leaves the upper half undefined
    Ascii,
    /// A built-in EBCDIC code page
    Ebcdic(Ebcdic),
    /// A DOS OEM code page
    Oem(u16, &'static TableType),
    /// A single byte encoding from the WHATWG encoding standard
    Whatwg(&'static Encoding),
}

impl fmt::Debug for ReferenceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReferenceEncoding({})", self)
    }
}

impl fmt::Display for ReferenceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latin1 => f.write_str("ISO-8859-1"),
            Self::Ascii => f.write_str("US-ASCII"),
            Self::Ebcdic(e) => write!(f, "IBM{:03}", e.id),
            Self::Oem(id, _) => write!(f, "IBM{:03}", id),
            Self::Whatwg(enc) => f.write_str(enc.name()),
        }
    }
}

// WHATWG folds these into windows-1252, so they never reach encoding_rs
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso88591",
    "iso-ir-100",
    "latin1",
    "l1",
    "csisolatin1",
    "cp819",
    "ibm819",
    "ibm-819",
];

const ASCII_LABELS: &[&str] = &[
    "ascii",
    "us-ascii",
    "ansi_x3.4-1968",
    "iso646-us",
    "csascii",
    "cp367",
    "ibm367",
    "ibm-367",
];

/// Extract the code page number from labels like `cp037`, `IBM-1140` or `00500`
fn code_page_number(label: &str) -> Option<u16> {
    let digits = ["ibm-", "ibm", "cp-", "cp", "ccsid"]
        .iter()
        .find_map(|prefix| label.strip_prefix(prefix))
        .unwrap_or(label);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl ReferenceEncoding {
    /// Find the reference encoding for a label
    ///
    /// ```
    /// use ibm_codepage::encoding::ReferenceEncoding;
    /// let cp1140 = ReferenceEncoding::for_label("cp1140").unwrap();
    /// assert_eq!(cp1140.decode(0xC1), Some('A'));
    /// assert_eq!(cp1140.decode(0x9F), Some('€'));
    /// ```
    pub fn for_label(label: &str) -> Result<Self, LookupError> {
        let norm = label.trim().to_ascii_lowercase();
        if LATIN1_LABELS.contains(&norm.as_str()) {
            return Ok(Self::Latin1);
        }
        if ASCII_LABELS.contains(&norm.as_str()) {
            return Ok(Self::Ascii);
        }
        let number = match norm.as_str() {
            "ebcdic-cp-us" => Some(37),
            other => code_page_number(other),
        };

        if let Some(id) = number {
            if let Some(ebcdic) = Ebcdic::for_id(id) {
                return Ok(Self::Ebcdic(ebcdic));
            }
            if let Some(table) = DECODING_TABLE_CP_MAP.get(&id) {
                return Ok(Self::Oem(id, table));
            }
        }

        match Encoding::for_label(norm.as_bytes()) {
            Some(enc) if enc.is_single_byte() => Ok(Self::Whatwg(enc)),
            Some(_) => Err(LookupError::NotSingleByte(label.to_owned())),
            None => Err(LookupError::Unknown(label.to_owned())),
        }
    }

    /// Decode a single byte, returning `None` if it is undefined
    pub fn decode(&self, byte: u8) -> Option<char> {
        match self {
            Self::Latin1 => Some(char::from(byte)),
            Self::Ascii => (byte < 0x80).then(|| char::from(byte)),
            Self::Ebcdic(e) => Some(e.decode(byte)),
            Self::Oem(_, table) => table.decode_char_checked(byte),
            Self::Whatwg(enc) => enc
                .decode_without_bom_handling_and_without_replacement(&[byte])
                .and_then(|s| s.chars().next()),
        }
    }

    /// Decode all 256 byte values
    pub fn chars(&self) -> [Option<char>; 256] {
        let mut chars = [None; 256];
        for (byte, slot) in chars.iter_mut().enumerate() {
            *slot = self.decode(byte as u8);
        }
        chars
    }
}

#[cfg(test)]
mod tests {
    use super::{LookupError, ReferenceEncoding};

    #[test]
    fn test_ebcdic() {
        let cp037 = ReferenceEncoding::for_label("IBM037").unwrap();
        assert_eq!(cp037.decode(0xC1), Some('A'));
        assert_eq!(cp037.decode(0x81), Some('a'));
        assert_eq!(cp037.decode(0x40), Some(' '));
        assert_eq!(cp037.decode(0x9F), Some('\u{A4}'));

        let cp1140 = ReferenceEncoding::for_label(" cp1140 ").unwrap();
        assert_eq!(cp1140.decode(0x9F), Some('\u{20AC}'));
        assert_eq!(cp1140.decode(0xF0), Some('0'));
        assert_eq!(cp1140.to_string(), "IBM1140");

        let alias = ReferenceEncoding::for_label("ebcdic-cp-us").unwrap();
        assert_eq!(alias.to_string(), "IBM037");
        assert_eq!(ReferenceEncoding::for_label("00500").unwrap().to_string(), "IBM500");
        assert_eq!(ReferenceEncoding::for_label("cp273").unwrap().decode(0x4A), Some('Ä'));
    }

    #[test]
    fn test_oem() {
        let cp850 = ReferenceEncoding::for_label("cp850").unwrap();
        assert_eq!(cp850.decode(0x82), Some('é'));
        assert_eq!(cp850.decode(b'A'), Some('A'));
        assert_eq!(cp850.to_string(), "IBM850");
    }

    #[test]
    fn test_whatwg() {
        let latin9 = ReferenceEncoding::for_label("ISO-8859-15").unwrap();
        assert_eq!(latin9.decode(0xA4), Some('€'));
        assert_eq!(latin9.decode(0xC1), Some('Á'));
        assert_eq!(latin9.to_string(), "ISO-8859-15");

        let cp1252 = ReferenceEncoding::for_label("cp1252").unwrap();
        assert_eq!(cp1252.decode(0x80), Some('€'));
        assert_eq!(cp1252.decode(0x81), Some('\u{81}'));

        let greek = ReferenceEncoding::for_label("windows-1253").unwrap();
        assert_eq!(greek.decode(0xAA), None);
    }

    #[test]
    fn test_latin1_and_ascii() {
        for label in ["iso-8859-1", "Latin1", "l1", "cp819", "IBM819"] {
            let latin1 = ReferenceEncoding::for_label(label).unwrap();
            assert_eq!(latin1.decode(0x80), Some('\u{80}'), "{}", label);
            assert_eq!(latin1.decode(0xA4), Some('\u{A4}'));
            assert_eq!(latin1.decode(0xFF), Some('ÿ'));
            assert_eq!(latin1.to_string(), "ISO-8859-1");
        }

        let ascii = ReferenceEncoding::for_label("US-ASCII").unwrap();
        assert_eq!(ascii.decode(b'A'), Some('A'));
        assert_eq!(ascii.decode(0x7F), Some('\u{7F}'));
        assert_eq!(ascii.decode(0x80), None);
        assert_eq!(ascii.decode(0xE9), None);
        assert_eq!(ascii.to_string(), "US-ASCII");
        assert_eq!(ascii.chars().iter().filter(|c| c.is_some()).count(), 128);
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(
            ReferenceEncoding::for_label("klingon").unwrap_err(),
            LookupError::Unknown("klingon".to_owned())
        );
        assert_eq!(
            ReferenceEncoding::for_label("shift_jis").unwrap_err(),
            LookupError::NotSingleByte("shift_jis".to_owned())
        );
        assert!(ReferenceEncoding::for_label("cp").is_err());
    }

    #[test]
    fn test_chars() {
        let chars = ReferenceEncoding::for_label("cp500").unwrap().chars();
        assert_eq!(chars[0xC1], Some('A'));
        assert!(chars.iter().all(Option::is_some));
    }
}
