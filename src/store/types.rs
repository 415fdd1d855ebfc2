//! Core entity types for the quotehub store
//!
//! This module defines the persisted entities and their write-time inputs:
//! - `Author`: a person quotes are attributed to
//! - `Tag`: a free-form label attached to quotes
//! - `Quote`: a piece of text owned by an author, carrying any number of tags
//!
//! Quote text is validated at write time: it must contain at least
//! [`MIN_QUOTE_WORDS`] word tokens.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::error::{StoreError, StoreResult};

/// Minimum number of word tokens a quote must contain
pub const MIN_QUOTE_WORDS: usize = 3;

/// A person quotes are attributed to
///
/// Uniqueness invariant: the (first_name, last_name, birth_date) triple
/// must be unique across all authors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    /// Unique identifier
    pub id: Uuid,
    /// Given name (required)
    pub first_name: String,
    /// Family name (may be empty)
    pub last_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Date of death, if any
    pub death_date: Option<NaiveDate>,
}

impl Author {
    /// Display name: "first last", or just "first" when last is empty
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Input for creating an author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}

/// Partial update for an author; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct AuthorUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Outer `None` = unchanged, `Some(None)` = clear the death date
    pub death_date: Option<Option<NaiveDate>>,
}

/// A label attached to quotes, with a unique case-sensitive name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Unique identifier
    pub id: Uuid,
    /// Unique name, case-sensitive
    pub name: String,
}

/// A quote: free text owned by one author, tagged with any number of tags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// Unique identifier
    pub id: Uuid,
    /// Quote body, at least [`MIN_QUOTE_WORDS`] word tokens
    pub text: String,
    /// Server-assigned creation time, immutable
    pub created_at: DateTime<Utc>,
    /// Owning author
    pub author_id: Uuid,
}

/// Input for creating a quote
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub text: String,
    pub author_id: Uuid,
    pub tags: Vec<Uuid>,
}

/// Partial update for a quote; `created_at` is never updatable
#[derive(Debug, Clone, Default)]
pub struct QuoteUpdate {
    pub text: Option<String>,
    pub author_id: Option<Uuid>,
    /// When present, replaces the quote's full tag set
    pub tags: Option<Vec<Uuid>>,
}

/// Ordering for quote listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteOrdering {
    /// Oldest first
    CreatedAt,
    /// Newest first (default listing order)
    #[default]
    CreatedAtDesc,
}

impl QuoteOrdering {
    /// Parse the public `ordering` query parameter value
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created_at" => Some(QuoteOrdering::CreatedAt),
            "-created_at" => Some(QuoteOrdering::CreatedAtDesc),
            _ => None,
        }
    }
}

/// Validate that quote text contains at least [`MIN_QUOTE_WORDS`] word tokens
///
/// Tokens are `\w+` runs, matching how the text is treated elsewhere in the
/// stack (punctuation does not count as a word).
pub fn validate_quote_text(text: &str) -> StoreResult<()> {
    let re = regex::Regex::new(r"\w+").expect("static regex");
    let words = re.find_iter(text).count();
    if words < MIN_QUOTE_WORDS {
        return Err(StoreError::validation(
            "text",
            format!("Must contain at least {} words.", MIN_QUOTE_WORDS),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let author = Author {
            id: Uuid::new_v4(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            death_date: None,
        };
        assert_eq!(author.full_name(), "John Doe");

        let mononym = Author {
            last_name: String::new(),
            ..author
        };
        assert_eq!(mononym.full_name(), "John");
    }

    #[test]
    fn test_validate_quote_text() {
        assert!(validate_quote_text("this is fine").is_ok());
        assert!(validate_quote_text("exactly three words").is_ok());
        assert!(validate_quote_text("two words").is_err());
        assert!(validate_quote_text("").is_err());
        // Punctuation is not a word token
        assert!(validate_quote_text("two words !!!").is_err());
    }

    #[test]
    fn test_validate_quote_text_error_field() {
        let err = validate_quote_text("nope").unwrap_err();
        match err {
            StoreError::Validation { field, .. } => assert_eq!(field, "text"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_ordering_parse() {
        assert_eq!(
            QuoteOrdering::parse("created_at"),
            Some(QuoteOrdering::CreatedAt)
        );
        assert_eq!(
            QuoteOrdering::parse("-created_at"),
            Some(QuoteOrdering::CreatedAtDesc)
        );
        assert_eq!(QuoteOrdering::parse("id"), None);
    }
}
