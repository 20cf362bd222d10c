//! Domain types shared across careerwatch.
//!
//! A [`Target`] is one (company, URL) pair from the URL store. A [`Keyword`]
//! is the term searched for; constructing one is the validation step, so any
//! code holding a `Keyword` can rely on it being non-empty.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (company, URL) pair to evaluate.
///
/// Identity is the exact pair: the same URL listed under two companies is
/// two targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Company the careers page belongs to
    pub company: String,
    /// Page to search
    pub url: String,
}

impl Target {
    /// Create a new target. No validation is performed; see [`Target::validate`].
    #[must_use]
    pub fn new(company: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            url: url.into(),
        }
    }

    /// Check that the target can be fetched.
    ///
    /// The company must be non-empty and the URL must be an absolute
    /// `http` or `https` URL with a host.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.company.trim().is_empty() {
            return Err(self.invalid("company is empty"));
        }
        if self.url.trim().is_empty() {
            return Err(self.invalid("url is empty"));
        }

        let parsed =
            url::Url::parse(self.url.trim()).map_err(|e| self.invalid(&format!("{e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(self.invalid(&format!("unsupported scheme '{other}'"))),
        }

        if parsed.host_str().is_none() {
            return Err(self.invalid("url has no host"));
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> CoreError {
        CoreError::InvalidTarget {
            company: self.company.clone(),
            url: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.company, self.url)
    }
}

/// Keyword to search for.
///
/// Surrounding whitespace is trimmed; an empty keyword is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword(String);

impl Keyword {
    /// Create a new `Keyword`.
    ///
    /// # Errors
    /// Returns error if the keyword is empty after trimming.
    pub fn new(keyword: impl Into<String>) -> Result<Self, CoreError> {
        let keyword = keyword.into();
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidKeyword("keyword is empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Keyword {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
