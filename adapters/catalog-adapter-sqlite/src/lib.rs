#![forbid(unsafe_code)]

mod schema;

use async_trait::async_trait;
use sqlx::{
	sqlite::{self, SqlitePool, SqliteRow},
	Row,
};
use std::path::Path;

use librillo::catalog_adapter::{
	Book, CatalogAdapter, CreateBookData, ListBookOptions, UpdateBookData,
};
use librillo::prelude::*;

// Helper functions
//******************
fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> LbResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

fn book_from_row(row: SqliteRow) -> Result<Book, sqlx::Error> {
	Ok(Book {
		book_id: BookId(row.try_get("book_id")?),
		title: row.try_get::<String, _>("title")?.into(),
		pages: row.try_get("pages")?,
	})
}

#[derive(Debug)]
pub struct CatalogAdapterSqlite {
	db: SqlitePool,
}

impl CatalogAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> LbResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		schema::init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl CatalogAdapter for CatalogAdapterSqlite {
	async fn list_books(&self, opts: ListBookOptions) -> LbResult<Vec<Book>> {
		let limit = opts.limit.unwrap_or(100);
		let skip = opts.skip.unwrap_or(0);

		let rows = sqlx::query(
			"SELECT book_id, title, pages FROM books ORDER BY book_id LIMIT ?1 OFFSET ?2",
		)
		.bind(limit)
		.bind(skip)
		.fetch_all(&self.db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

		rows.into_iter()
			.map(|row| book_from_row(row).inspect_err(inspect).map_err(|_| Error::DbError))
			.collect()
	}

	async fn read_book(&self, book_id: BookId) -> LbResult<Book> {
		let res = sqlx::query("SELECT book_id, title, pages FROM books WHERE book_id = ?1")
			.bind(book_id.0)
			.fetch_one(&self.db)
			.await;

		map_res(res, book_from_row)
	}

	async fn create_book(&self, data: &CreateBookData) -> LbResult<Book> {
		let res = sqlx::query(
			"INSERT INTO books (title, pages) VALUES (?1, ?2) RETURNING book_id, title, pages",
		)
		.bind(data.title.as_ref())
		.bind(data.pages)
		.fetch_one(&self.db)
		.await;

		map_res(res, book_from_row)
	}

	async fn update_book(&self, book_id: BookId, data: &UpdateBookData) -> LbResult<Book> {
		// Empty patch: nothing to write, return the current record
		if data.title.is_none() && data.pages.is_none() {
			return self.read_book(book_id).await;
		}

		let mut query = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE books SET ");
		{
			let mut sep = query.separated(", ");
			if let Some(ref title) = data.title {
				sep.push("title = ").push_bind_unseparated(title.as_ref());
			}
			if let Some(pages) = data.pages {
				sep.push("pages = ").push_bind_unseparated(pages);
			}
		}
		query.push(" WHERE book_id = ").push_bind(book_id.0);
		query.push(" RETURNING book_id, title, pages");

		let res = query.build().fetch_one(&self.db).await;

		map_res(res, book_from_row)
	}

	async fn delete_book(&self, book_id: BookId) -> LbResult<()> {
		let res = sqlx::query("DELETE FROM books WHERE book_id = ?1")
			.bind(book_id.0)
			.execute(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		if res.rows_affected() == 0 {
			return Err(Error::NotFound);
		}

		Ok(())
	}
}

// vim: ts=4
