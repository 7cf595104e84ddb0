//! Boundary text types for the hospital administration API.
//!
//! Request bodies deserialize into these types, so a payload that parses is
//! already known to satisfy the field-level rules. Both types serialize as
//! plain JSON strings.

/// Errors produced when constructing validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input was empty or contained only whitespace.
    #[error("text cannot be empty")]
    Empty,
    /// The input was not a valid national identifier.
    #[error("tc_no must be exactly 11 digits")]
    InvalidTcNo,
}

/// A string that is guaranteed to hold at least one non-whitespace character.
///
/// Input is trimmed during construction; the stored value never carries
/// leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Trims the input and wraps it, rejecting blank strings.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A Turkish national identity number: exactly 11 ASCII digits.
///
/// Uniqueness across patients is a business rule enforced by the API layer,
/// not by this type; `TcNo` only guarantees the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TcNo(String);

impl TcNo {
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let s = input.as_ref().trim();
        if s.len() != 11 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TextError::InvalidTcNo);
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TcNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TcNo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for TcNo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TcNo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TcNo::new(&s).map_err(serde::de::Error::custom)
    }
}
