//! Book model and request shapes.
//!
//! Requests use dedicated shapes rather than the stored record: creation
//! requires every mutable field, updates carry each field as an explicit
//! present-or-absent option so a partial body never clobbers stored values.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A book as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Store-assigned identifier, immutable after creation
    pub id: i32,
    pub author: String,
    pub title: String,
    pub publisher: String,
}

/// Payload for creating a book. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub author: String,
    pub title: String,
    pub publisher: String,
}

/// Payload for updating a book; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}
