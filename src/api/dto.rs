//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::store::{Author, Quote, Tag};

/// Deserialize a field that distinguishes "absent" from "explicitly null"
///
/// Missing field → `None` (leave unchanged); `null` → `Some(None)` (clear);
/// value → `Some(Some(value))`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ============================================
// AUTHOR DTOs
// ============================================

/// Create author request
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    /// Given name (required)
    pub first_name: String,
    /// Family name (optional, empty allowed)
    #[serde(default)]
    pub last_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Date of death, if any
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
}

/// Update author request (partial)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAuthorRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// `null` clears the death date, absence leaves it unchanged
    #[serde(default, deserialize_with = "double_option")]
    pub death_date: Option<Option<NaiveDate>>,
}

/// Author response
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    /// Derived display name ("first last", or "first" alone)
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
}

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            full_name: author.full_name(),
            birth_date: author.birth_date,
            death_date: author.death_date,
        }
    }
}

// ============================================
// TAG DTOs
// ============================================

/// Create/update tag request
#[derive(Debug, Deserialize)]
pub struct TagRequest {
    /// Unique tag name, case-sensitive
    pub name: String,
}

/// Tag response
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
        }
    }
}

// ============================================
// QUOTE DTOs
// ============================================

/// Create quote request
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    /// Quote body, at least 3 word tokens
    pub text: String,
    /// Owning author
    pub author_id: Uuid,
    /// Tags to attach (optional)
    #[serde(default)]
    pub tags: Vec<Uuid>,
}

/// Update quote request (partial)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuoteRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
    /// When present, replaces the quote's full tag set
    #[serde(default)]
    pub tags: Option<Vec<Uuid>>,
}

/// Quote response
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    /// Link to this quote's tag listing
    pub tags_url: String,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id,
            text: quote.text.clone(),
            created_at: quote.created_at,
            author_id: quote.author_id,
            tags_url: format!("/quotes/{}/tags", quote.id),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    /// Current notification room member count
    pub room_members: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
