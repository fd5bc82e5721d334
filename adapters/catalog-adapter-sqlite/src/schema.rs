//! Database schema initialization
//!
//! Creates the catalog tables and indexes when missing, so a fresh database
//! file is usable without a separate migration step.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Books
	//*******
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS books (
		book_id integer PRIMARY KEY AUTOINCREMENT,
		title text NOT NULL,
		pages integer NOT NULL
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query("CREATE INDEX IF NOT EXISTS idx_books_title ON books(title)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
