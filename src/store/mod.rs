//! Quotehub Entity Store
//!
//! Relational persistence for authors, tags and quotes, backed by SQLite:
//!
//! - **types**: entity structs and write-time inputs
//! - **filter**: query-string filter layer (declared allow-lists → predicates)
//! - **store**: the SQLite store with CRUD, search, ordering and pagination
//! - **error**: error types
//!
//! # Example
//!
//! ```rust,no_run
//! use quotehub::store::{NewAuthor, NewQuote, QuoteStore};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = QuoteStore::open(Path::new("./quotehub.db"))?;
//!
//!     let author = store
//!         .create_author(NewAuthor {
//!             first_name: "Seneca".to_string(),
//!             last_name: String::new(),
//!             birth_date: "0004-01-01".parse()?,
//!             death_date: None,
//!         })
//!         .await?;
//!
//!     let quote = store
//!         .create_quote(NewQuote {
//!             text: "We suffer more often in imagination than in reality".to_string(),
//!             author_id: author.id,
//!             tags: Vec::new(),
//!         })
//!         .await?;
//!
//!     println!("Created quote {}", quote.id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use filter::{FilterSet, ListFilter, ParameterSchema, Predicate};
pub use store::{ListQuery, QuoteListQuery, QuoteStore};
pub use types::{
    validate_quote_text, Author, AuthorUpdate, NewAuthor, NewQuote, Quote, QuoteOrdering,
    QuoteUpdate, Tag, MIN_QUOTE_WORDS,
};
