//! Case-insensitive, word-boundary keyword matching.
//!
//! Matching runs over whatever the fetch returned (raw or rendered markup),
//! not over text with tags stripped, so `<b>Engineer</b>` matches `engineer`
//! because `>` and `<` are not word characters.

use crate::error::Result;
use careerwatch_core::{CoreError, Keyword};
use regex::{Regex, RegexBuilder};

/// Compiled matcher for a single keyword.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    /// Compile a matcher for `keyword`.
    ///
    /// A word boundary is required only on the sides where the keyword
    /// itself starts or ends with a word character, so `C++` and `.NET`
    /// still match. Regex metacharacters in the keyword are literal.
    pub fn new(keyword: &Keyword) -> Result<Self> {
        let kw = keyword.as_str();
        let leading = if kw.chars().next().is_some_and(is_word_char) {
            r"\b"
        } else {
            ""
        };
        let trailing = if kw.chars().last().is_some_and(is_word_char) {
            r"\b"
        } else {
            ""
        };

        let pattern = RegexBuilder::new(&format!("{leading}{}{trailing}", regex::escape(kw)))
            .case_insensitive(true)
            .build()
            .map_err(|e| CoreError::InvalidKeyword(format!("cannot compile '{kw}': {e}")))?;

        Ok(Self { pattern })
    }

    /// Whether the keyword occurs in `text` as a whole word.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// One-shot convenience over [`KeywordMatcher`].
pub fn matches(text: &str, keyword: &Keyword) -> Result<bool> {
    Ok(KeywordMatcher::new(keyword)?.matches(text))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
