//! Human-readable location name with validation.
//!
//! Names are display labels only; they never take part in lookup.

use std::fmt::Display;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationName(String);

#[derive(Debug, Error)]
pub enum LocationNameError {
    #[error("Location name cannot be empty.")]
    EmptyName,

    #[error("Location name is too long (max 256 characters, got {0}).")]
    TooLong(usize),
}

impl LocationName {
    /// Parse a location name string into a validated LocationName
    ///
    /// Cannot be empty or only whitespaces
    /// Must be between 1 and 256 characters
    /// Automatically trim whitespace
    pub fn parse(s: String) -> Result<LocationName, LocationNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(LocationNameError::EmptyName);
        }

        let char_count = trimmed.graphemes(true).count();
        if char_count > 256 {
            return Err(LocationNameError::TooLong(char_count));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for LocationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl serde::Serialize for LocationName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for LocationName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LocationName::parse(s).map_err(serde::de::Error::custom)
    }
}
