//! Research query validation.

use std::fmt;

use thiserror::Error;

/// Minimum number of characters a query must have after trimming.
pub const MIN_QUERY_LENGTH: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Query too short: {length} characters (min {min})")]
    TooShort { length: usize, min: usize },
}

/// A query that passed [`validate_query`].
///
/// Holds the trimmed text, which is at least [`MIN_QUERY_LENGTH`] characters
/// long. There is no other way to construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery(String);

impl ValidatedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidatedQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim a raw query and check it against the minimum length.
///
/// Only surrounding whitespace is removed; case, punctuation and inner
/// whitespace are left untouched.
pub fn validate_query(raw: &str) -> Result<ValidatedQuery, ValidationError> {
    let cleaned = raw.trim();
    let length = cleaned.chars().count();

    if length < MIN_QUERY_LENGTH {
        return Err(ValidationError::TooShort {
            length,
            min: MIN_QUERY_LENGTH,
        });
    }

    Ok(ValidatedQuery(cleaned.to_string()))
}
