//! Catalog adapter CRUD operation tests
//!
//! Tests create, read, update, delete, and pagination for book records.

use librillo_catalog_adapter_sqlite::CatalogAdapterSqlite;
use librillo::catalog_adapter::{
	CatalogAdapter, CreateBookData, ListBookOptions, UpdateBookData,
};
use librillo::error::Error;
use librillo::types::BookId;
use tempfile::TempDir;

async fn create_test_adapter() -> (CatalogAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = CatalogAdapterSqlite::new(temp_dir.path().join("catalog.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

fn book_data(title: &str, pages: i64) -> CreateBookData {
	CreateBookData { title: title.into(), pages }
}

#[tokio::test]
async fn test_create_and_read_book() {
	let (adapter, _temp) = create_test_adapter().await;

	let created = adapter.create_book(&book_data("Dune", 412)).await.expect("Should create book");
	assert_eq!(created.title.as_ref(), "Dune");
	assert_eq!(created.pages, 412);

	let read = adapter.read_book(created.book_id).await.expect("Should read book back");
	assert_eq!(read.book_id, created.book_id);
	assert_eq!(read.title.as_ref(), "Dune");
	assert_eq!(read.pages, 412);
}

#[tokio::test]
async fn test_read_missing_book_is_not_found() {
	let (adapter, _temp) = create_test_adapter().await;

	let result = adapter.read_book(BookId(999)).await;

	assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_created_ids_are_distinct() {
	let (adapter, _temp) = create_test_adapter().await;

	let a = adapter.create_book(&book_data("A", 1)).await.expect("Should create book");
	let b = adapter.create_book(&book_data("B", 2)).await.expect("Should create book");

	assert_ne!(a.book_id, b.book_id);
}

#[tokio::test]
async fn test_list_books_with_pagination() {
	let (adapter, _temp) = create_test_adapter().await;

	for i in 1..=5 {
		adapter
			.create_book(&book_data(&format!("Book {}", i), i * 100))
			.await
			.expect("Should create book");
	}

	let all = adapter.list_books(ListBookOptions::default()).await.expect("Should list books");
	assert_eq!(all.len(), 5);

	let page = adapter
		.list_books(ListBookOptions { skip: Some(2), limit: Some(2) })
		.await
		.expect("Should list page");
	assert_eq!(page.len(), 2);
	assert_eq!(page[0].title.as_ref(), "Book 3");
	assert_eq!(page[1].title.as_ref(), "Book 4");
}

#[tokio::test]
async fn test_partial_update_title_only() {
	let (adapter, _temp) = create_test_adapter().await;

	let created = adapter.create_book(&book_data("Draft", 100)).await.expect("Should create book");

	let updated = adapter
		.update_book(
			created.book_id,
			&UpdateBookData { title: Some("Final".into()), pages: None },
		)
		.await
		.expect("Should update book");

	assert_eq!(updated.title.as_ref(), "Final");
	assert_eq!(updated.pages, 100);
}

#[tokio::test]
async fn test_partial_update_pages_only() {
	let (adapter, _temp) = create_test_adapter().await;

	let created = adapter.create_book(&book_data("Draft", 100)).await.expect("Should create book");

	let updated = adapter
		.update_book(created.book_id, &UpdateBookData { title: None, pages: Some(250) })
		.await
		.expect("Should update book");

	assert_eq!(updated.title.as_ref(), "Draft");
	assert_eq!(updated.pages, 250);
}

#[tokio::test]
async fn test_empty_update_returns_record_unchanged() {
	let (adapter, _temp) = create_test_adapter().await;

	let created = adapter.create_book(&book_data("Same", 42)).await.expect("Should create book");

	let updated = adapter
		.update_book(created.book_id, &UpdateBookData::default())
		.await
		.expect("Should tolerate empty patch");

	assert_eq!(updated.title.as_ref(), "Same");
	assert_eq!(updated.pages, 42);
}

#[tokio::test]
async fn test_update_missing_book_is_not_found() {
	let (adapter, _temp) = create_test_adapter().await;

	let result = adapter
		.update_book(BookId(999), &UpdateBookData { title: Some("X".into()), pages: None })
		.await;

	assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_delete_book() {
	let (adapter, _temp) = create_test_adapter().await;

	let created = adapter.create_book(&book_data("Gone", 1)).await.expect("Should create book");

	adapter.delete_book(created.book_id).await.expect("Should delete book");

	let result = adapter.read_book(created.book_id).await;
	assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_book_is_not_found() {
	let (adapter, _temp) = create_test_adapter().await;

	let result = adapter.delete_book(BookId(999)).await;

	assert!(matches!(result, Err(Error::NotFound)));
}

// vim: ts=4
