//! Book HTTP handlers

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	Json,
};

use crate::prelude::*;
use librillo_types::catalog_adapter::{Book, CreateBookData, ListBookOptions, UpdateBookData};

/// GET /api/book - List books with optional pagination
pub async fn list_books(
	State(app): State<App>,
	Query(query): Query<ListBookOptions>,
) -> LbResult<Json<Vec<Book>>> {
	let books = app.catalog_adapter.list_books(query).await?;

	Ok(Json(books))
}

/// GET /api/book/:book_id - Read a single book
pub async fn get_book(
	State(app): State<App>,
	Path(book_id): Path<BookId>,
) -> LbResult<Json<Book>> {
	let book = app.catalog_adapter.read_book(book_id).await?;

	Ok(Json(book))
}

/// POST /api/book - Create a book
pub async fn post_book(
	State(app): State<App>,
	Json(data): Json<CreateBookData>,
) -> LbResult<(StatusCode, Json<Book>)> {
	let book = app.catalog_adapter.create_book(&data).await?;

	info!("Created book {} ({})", book.book_id, book.title);

	Ok((StatusCode::CREATED, Json(book)))
}

/// PATCH /api/book/:book_id - Partially update a book
pub async fn patch_book(
	State(app): State<App>,
	Path(book_id): Path<BookId>,
	Json(data): Json<UpdateBookData>,
) -> LbResult<Json<Book>> {
	let book = app.catalog_adapter.update_book(book_id, &data).await?;

	info!("Updated book {}", book_id);

	Ok(Json(book))
}

/// DELETE /api/book/:book_id - Delete a book
pub async fn delete_book(
	State(app): State<App>,
	Path(book_id): Path<BookId>,
) -> LbResult<StatusCode> {
	app.catalog_adapter.delete_book(book_id).await?;

	info!("Deleted book {}", book_id);

	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
