//! Entry title validation
//!
//! Titles are free text, trimmed nowhere: what the caller sends is what
//! gets stored. The only rule is non-empty; length is unbounded since the
//! backing column is TEXT.

use super::ValidationError;

/// Validated entry title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTitle(String);

impl EntryTitle {
    /// Create a new entry title.
    ///
    /// # Rules
    /// - Must not be empty
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EntryTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
