//! # The description map
//!
//! IBM codepage files identify characters by a textual description such as
//! `LATIN CAPITAL LETTER A`. The [`DescriptionMap`] remembers which unicode
//! code point each description stands for.
use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;

/// A unicode code point
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(pub u32);

impl From<char> for CodePoint {
    fn from(chr: char) -> Self {
        Self(chr as u32)
    }
}

impl CodePoint {
    /// Get the corresponding character, if this is a unicode scalar value
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Failed to parse a code point
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid code point `{0}`")]
pub struct CodePointError(String);

impl FromStr for CodePoint {
    type Err = CodePointError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();
        let digits = src
            .strip_prefix("0x")
            .or_else(|| src.strip_prefix("0X"))
            .or_else(|| src.strip_prefix("U+"))
            .or_else(|| src.strip_prefix("u+"))
            .unwrap_or(src);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CodePointError(src.to_owned()));
        }
        u32::from_str_radix(digits, 16)
            .ok()
            .filter(|&v| char::from_u32(v).is_some())
            .map(CodePoint)
            .ok_or_else(|| CodePointError(src.to_owned()))
    }
}

impl Serialize for CodePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct CodePointVisitor;

impl<'de> Visitor<'de> for CodePointVisitor {
    type Value = CodePoint;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a hex code point string or an integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u32::try_from(v)
            .ok()
            .filter(|&v| char::from_u32(v).is_some())
            .map(CodePoint)
            .ok_or_else(|| E::custom(format!("invalid code point {}", v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("invalid code point {}", v)))
            .and_then(|v| self.visit_u64(v))
    }
}

impl<'de> Deserialize<'de> for CodePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CodePointVisitor)
    }
}

/// Normalize a character description
///
/// ```
/// use ibm_codepage::description::normalize;
/// assert_eq!(normalize("  Latin capital\tletter  A "), "LATIN CAPITAL LETTER A");
/// ```
pub fn normalize(description: &str) -> String {
    let mut norm = String::with_capacity(description.len());
    for word in description.split_whitespace() {
        if !norm.is_empty() {
            norm.push(' ');
        }
        norm.push_str(word);
    }
    norm.make_ascii_uppercase();
    norm
}

/// Failed to load or store a description map
#[derive(Debug, Error)]
#[error("invalid description map: {0}")]
pub struct MapError(#[from] serde_json::Error);

const DESCRIPTIONS_KEY: &str = "unicode_by_description";

/// The full layout of a description map file
#[derive(Deserialize)]
struct MapFile {
    #[serde(default)]
    filenames: Vec<String>,
    unicode_by_description: BTreeMap<String, serde_json::Value>,
}

#[derive(Serialize)]
struct MapFileRef<'a> {
    filenames: &'a [String],
    unicode_by_description: &'a BTreeMap<String, CodePoint>,
}

/// Maps normalized character descriptions to code points
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DescriptionMap {
    sources: Vec<String>,
    entries: BTreeMap<String, CodePoint>,
}

impl DescriptionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of descriptions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no descriptions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the code point for a description
    pub fn get(&self, description: &str) -> Option<CodePoint> {
        self.entries.get(&normalize(description)).copied()
    }

    /// Record a code point, returning the previous one
    pub fn insert(&mut self, description: &str, code_point: CodePoint) -> Option<CodePoint> {
        self.entries.insert(normalize(description), code_point)
    }

    /// Iterate over all descriptions in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, CodePoint)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The reference sources that were applied to this map
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Whether a reference source was already applied
    pub fn has_source(&self, key: &str) -> bool {
        self.sources.iter().any(|s| s == key)
    }

    /// Remember that a reference source was applied
    pub fn add_source(&mut self, key: &str) {
        if !self.has_source(key) {
            self.sources.push(key.to_owned());
        }
    }

    /// Parse a map from JSON
    pub fn from_json(input: &str) -> Result<Self, MapError> {
        // Files without the descriptions key use the flat layout
        let value: serde_json::Value = serde_json::from_str(input)?;
        let (sources, raw) = if value.get(DESCRIPTIONS_KEY).is_some() {
            let file: MapFile = serde_json::from_value(value)?;
            (file.filenames, file.unicode_by_description)
        } else {
            let flat: BTreeMap<String, serde_json::Value> = serde_json::from_value(value)?;
            (Vec::new(), flat)
        };
        let mut map = Self {
            sources,
            entries: BTreeMap::new(),
        };
        for (description, value) in raw {
            let code_point = CodePoint::deserialize(&value).map_err(|e| {
                <serde_json::Error as de::Error>::custom(format!("`{}`: {}", description, e))
            })?;
            map.insert(&description, code_point);
        }
        Ok(map)
    }

    /// Serialize the map to pretty printed JSON
    pub fn to_json(&self) -> Result<String, MapError> {
        let file = MapFileRef {
            filenames: &self.sources,
            unicode_by_description: &self.entries,
        };
        let mut out = serde_json::to_string_pretty(&file)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{CodePoint, DescriptionMap};

    #[test]
    fn test_code_point() {
        assert_eq!("0x00C1".parse::<CodePoint>(), Ok(CodePoint(0xC1)));
        assert_eq!("0041".parse::<CodePoint>(), Ok(CodePoint(0x41)));
        assert_eq!("U+20AC".parse::<CodePoint>(), Ok(CodePoint(0x20AC)));
        assert!("0xD800".parse::<CodePoint>().is_err());
        assert!("zz".parse::<CodePoint>().is_err());
        assert!("+41".parse::<CodePoint>().is_err());
        assert!("0x+41".parse::<CodePoint>().is_err());
        assert!("U+".parse::<CodePoint>().is_err());
        assert_eq!(CodePoint(0x41).to_string(), "0x0041");
        assert_eq!(CodePoint(0x1F600).to_string(), "0x1F600");
        assert_eq!(CodePoint::from('€').to_char(), Some('€'));
    }

    #[test]
    fn test_original_layout() {
        let input = r#"{"filenames": ["iso-8859-15"], "unicode_by_description": {"Euro sign": "0x20AC", "LATIN CAPITAL LETTER A": 65}}"#;
        let map = DescriptionMap::from_json(input).unwrap();
        assert_eq!(map.sources(), ["iso-8859-15".to_owned()]);
        assert_eq!(map.get("EURO SIGN"), Some(CodePoint(0x20AC)));
        assert_eq!(map.get("latin capital letter a"), Some(CodePoint(0x41)));
    }

    #[test]
    fn test_flat_layout() {
        let map = DescriptionMap::from_json(r#"{"LATIN CAPITAL LETTER A": "0041"}"#).unwrap();
        assert!(map.sources().is_empty());
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("LATIN CAPITAL LETTER A"), Some(CodePoint(0x41)));
    }

    #[test]
    fn test_corrupt() {
        assert!(DescriptionMap::from_json("{\"A\": ").is_err());
        assert!(DescriptionMap::from_json("[1, 2]").is_err());
        assert!(DescriptionMap::from_json(r#"{"A": "0xD800"}"#).is_err());

        let input = r#"{"filenames": [], "unicode_by_description": {"SPACE": "0x0020", "BROKEN": "0xD800"}}"#;
        let msg = DescriptionMap::from_json(input).unwrap_err().to_string();
        assert!(msg.contains("`BROKEN`"), "{}", msg);
        assert!(msg.contains("0xD800"), "{}", msg);
    }

    #[test]
    fn test_json_round_trip() {
        let mut map = DescriptionMap::new();
        map.insert("Latin small letter a", CodePoint(0x61));
        map.insert("EURO SIGN", CodePoint(0x20AC));
        map.add_source("cp1140:CP01140.txt");
        map.add_source("cp1140:CP01140.txt");

        let json = map.to_json().unwrap();
        assert!(json.contains("\"LATIN SMALL LETTER A\": \"0x0061\""));
        assert_eq!(DescriptionMap::from_json(&json).unwrap(), map);
        assert_eq!(map.sources().len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = DescriptionMap::new();
        assert_eq!(map.insert("SPACE", CodePoint(0x20)), None);
        assert_eq!(map.insert(" space ", CodePoint(0xA0)), Some(CodePoint(0x20)));
        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());
    }
}
