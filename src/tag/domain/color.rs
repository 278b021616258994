//! Validated tag color value.

use super::TagDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hex digits following the leading `#`.
const HEX_DIGITS: usize = 6;

/// Tag color in `#RRGGBB` form.
///
/// Hex digits are accepted in either case and stored as supplied.
///
/// # Examples
///
/// ```
/// use taskboard::tag::domain::TagColor;
///
/// let color = TagColor::parse("#ABC123").expect("valid color");
/// assert_eq!(color.as_str(), "#ABC123");
/// assert!(TagColor::parse("ABC1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagColor(String);

impl TagColor {
    /// Parses a `#RRGGBB` color.
    ///
    /// # Errors
    ///
    /// Returns [`TagDomainError::InvalidColor`] unless the value is exactly a
    /// `#` followed by six hexadecimal digits.
    pub fn parse(value: impl Into<String>) -> Result<Self, TagDomainError> {
        let raw = value.into();
        if !Self::is_hex_color(&raw) {
            return Err(TagDomainError::InvalidColor(raw));
        }
        Ok(Self(raw))
    }

    fn is_hex_color(value: &str) -> bool {
        value.strip_prefix('#').is_some_and(|digits| {
            digits.len() == HEX_DIGITS && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
    }

    /// Returns the color as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TagColor {
    type Error = TagDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TagColor> for String {
    fn from(value: TagColor) -> Self {
        value.0
    }
}
