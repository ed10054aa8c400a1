//! Common data types
//!
//! Shows as returned by the search endpoint and stored as favorites.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// ShowId - Canonical show identifier
// =============================================================================

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Identifier of a show
///
/// The endpoint sends ids as JSON numbers, while ids that travel through a
/// front-end usually come back as text. Both forms are normalized to one
/// canonical string when the id is built, so `5`, `"5"` and `5.0` compare,
/// hash and order as the same id. Strings that are not numbers are kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShowId(String);

impl ShowId {
    /// Build an id from any textual form
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(canonicalize(raw.as_ref()))
    }

    /// Canonical text of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the canonical form is an integer
    pub fn as_integer(&self) -> Option<i64> {
        let n = self.0.parse::<i64>().ok()?;
        (n.to_string() == self.0).then_some(n)
    }
}

/// Normalize numeric-looking text to its canonical number form
fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return raw.to_string();
    }
    if let Some(integer) = canonical_integer(trimmed) {
        return integer;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => format_number(n),
        _ => raw.to_string(),
    }
}

/// Exact canonical text of a plain integer, of any length
///
/// Drops a leading `+`, leading zeros and the sign of zero.
fn canonical_integer(text: &str) -> Option<String> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    Some(match (digits.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{digits}"),
        (false, false) => digits.to_string(),
    })
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ShowId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ShowId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<u64> for ShowId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i64> for ShowId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<f64> for ShowId {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            Self(format_number(n))
        } else {
            Self(n.to_string())
        }
    }
}

impl std::str::FromStr for ShowId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for ShowId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Integers go back out as JSON numbers, matching the endpoint's shape.
        // Anything wider than 64 bits stays text so no digits are lost.
        if let Some(n) = self.as_integer() {
            serializer.serialize_i64(n)
        } else if let Ok(n) = self.0.parse::<u64>() {
            serializer.serialize_u64(n)
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

struct ShowIdVisitor;

impl<'de> Visitor<'de> for ShowIdVisitor {
    type Value = ShowId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a show id as a number or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShowId, E> {
        Ok(ShowId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShowId, E> {
        Ok(ShowId::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ShowId, E> {
        Ok(ShowId::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ShowId, E> {
        Ok(ShowId::new(v))
    }
}

impl<'de> Deserialize<'de> for ShowId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ShowIdVisitor)
    }
}

// =============================================================================
// Show - A single show entry
// =============================================================================

/// Image variants published for a show
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShowImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

/// A show with its display metadata
///
/// Used both for search results and for favorites. Fields beyond `id`,
/// `name` and `image` are informational; unknown fields from the endpoint
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub id: ShowId,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ShowImage>,

    // === Metadata ===
    /// Show page on the provider's site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    /// First air date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premiered: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Show {
    /// Create a show with minimal info
    pub fn new(id: impl Into<ShowId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            url: None,
            language: None,
            genres: Vec::new(),
            premiered: None,
        }
    }

    /// Set the medium image URL
    pub fn with_image(mut self, medium: impl Into<String>) -> Self {
        let image = self.image.get_or_insert_with(ShowImage::default);
        image.medium = Some(medium.into());
        self
    }

    /// Set descriptive metadata
    pub fn with_metadata(
        mut self,
        language: Option<String>,
        genres: Vec<String>,
        premiered: Option<String>,
    ) -> Self {
        self.language = language;
        self.genres = genres;
        self.premiered = premiered;
        self
    }

    /// Medium image URL, if the provider published one
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(|i| i.medium.as_deref())
    }
}

// =============================================================================
// ShowRecord - Wire and storage record shape
// =============================================================================

/// A show wrapped the way the search endpoint returns it
///
/// Favorites are persisted in this same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowRecord {
    /// Relevance score from the search endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub show: Show,
}

impl From<Show> for ShowRecord {
    fn from(show: Show) -> Self {
        Self { score: None, show }
    }
}

impl From<ShowRecord> for Show {
    fn from(record: ShowRecord) -> Self {
        record.show
    }
}
