//! Stable location identifier.
//!
//! Identifiers are lookup keys, so parsing never normalises them: `Kandy`
//! is rejected rather than silently folded into `kandy`.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationId(String);

#[derive(Debug, thiserror::Error)]
pub enum LocationIdError {
    #[error("Location id cannot be empty.")]
    Empty,

    #[error("Location id is too long (max 64 characters, got {0}).")]
    TooLong(usize),

    #[error("Location id contains invalid character {0:?}. Use lowercase letters, digits, '-' or '_'.")]
    InvalidCharacter(char),
}

impl LocationId {
    const MAX_LENGTH: usize = 64;

    pub fn parse(s: String) -> Result<Self, LocationIdError> {
        if s.is_empty() {
            return Err(LocationIdError::Empty);
        }

        let length = s.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(LocationIdError::TooLong(length));
        }

        if let Some(invalid) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
        {
            return Err(LocationIdError::InvalidCharacter(invalid));
        }

        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl serde::Serialize for LocationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for LocationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LocationId::parse(s).map_err(serde::de::Error::custom)
    }
}
