//! Books repository for database operations.
//!
//! Path ids arrive as raw strings; each operation decides how a malformed id
//! folds into its own failure path (see the individual methods), matching the
//! behavior of binding an arbitrary string against the integer key column.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new book and return the store-assigned id.
    pub async fn create(&self, book: &CreateBook) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO books (author, title, publisher) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&book.author)
        .bind(&book.title)
        .bind(&book.publisher)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch every book, in store order (no explicit sort).
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>("SELECT id, author, title, publisher FROM books")
                .fetch_all(&self.pool)
                .await?;

        Ok(books)
    }

    /// Fetch one book by id.
    ///
    /// A malformed id and an unknown id both report not-found; callers do not
    /// distinguish the two from a query failure.
    pub async fn find_one(&self, raw_id: &str) -> AppResult<Book> {
        let Some(id) = parse_id(raw_id) else {
            return Err(AppError::NotFound(format!("book {:?} not found", raw_id)));
        };

        sqlx::query_as::<_, Book>("SELECT id, author, title, publisher FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("book {} not found", id)))
    }

    /// Apply the supplied fields to the book matching `raw_id` and return the
    /// number of rows changed. An id that matches nothing, including an empty
    /// or malformed one, yields zero rather than an error.
    pub async fn update_where(&self, raw_id: &str, changes: &UpdateBook) -> AppResult<u64> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(0);
        };

        let result = sqlx::query(
            r#"
            UPDATE books SET
                author = COALESCE($1, author),
                title = COALESCE($2, title),
                publisher = COALESCE($3, publisher)
            WHERE id = $4
            "#,
        )
        .bind(changes.author.as_deref())
        .bind(changes.title.as_deref())
        .bind(changes.publisher.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete the book matching `raw_id` and return the number of rows
    /// removed. Deleting an id that matches nothing is not an error; a
    /// malformed id is, as it would be if bound against the key column.
    pub async fn delete_where(&self, raw_id: &str) -> AppResult<u64> {
        let Some(id) = parse_id(raw_id) else {
            return Err(AppError::Store(format!("malformed book id {:?}", raw_id)));
        };

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_padded_numeric_input() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
    }

    #[test]
    fn parse_id_rejects_non_numeric_input() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
    }
}
