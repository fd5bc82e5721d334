//! Catalog Adapter
//!
//! Trait and types for pluggable relational catalog backends. The catalog is
//! the authoritative store for book records; the REST CRUD layer talks to it
//! exclusively through this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// A book record as stored in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
	#[serde(rename = "id")]
	pub book_id: BookId,
	pub title: Box<str>,
	pub pages: i64,
}

/// Fields for creating a new book.
#[derive(Debug, Deserialize)]
pub struct CreateBookData {
	pub title: Box<str>,
	pub pages: i64,
}

/// Partial update: only provided fields are changed.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookData {
	pub title: Option<Box<str>>,
	pub pages: Option<i64>,
}

/// Pagination options for listing books.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListBookOptions {
	pub skip: Option<u32>,
	pub limit: Option<u32>,
}

/// Catalog Adapter trait.
///
/// Unified interface for relational catalog backends.
#[async_trait]
pub trait CatalogAdapter: Debug + Send + Sync {
	/// List books with optional pagination (defaults: skip 0, limit 100).
	async fn list_books(&self, opts: ListBookOptions) -> LbResult<Vec<Book>>;

	/// Read a single book. Returns `Error::NotFound` when missing.
	async fn read_book(&self, book_id: BookId) -> LbResult<Book>;

	/// Create a book with a store-assigned id. Returns the created record.
	async fn create_book(&self, data: &CreateBookData) -> LbResult<Book>;

	/// Partially update a book. Returns the updated record.
	async fn update_book(&self, book_id: BookId, data: &UpdateBookData) -> LbResult<Book>;

	/// Delete a book. Returns `Error::NotFound` when missing.
	async fn delete_book(&self, book_id: BookId) -> LbResult<()>;
}

// vim: ts=4
