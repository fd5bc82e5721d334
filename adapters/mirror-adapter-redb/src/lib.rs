#![forbid(unsafe_code)]

mod error;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

pub use error::Error;

use librillo::mirror_adapter::{MirrorAdapter, MirrorInsert, MirrorSubscription};
use librillo::prelude::*;

/// Document storage table: key = `<collection>/<doc_id>`, value = JSON text
const TABLE_DOCUMENTS: redb::TableDefinition<&str, &str> = redb::TableDefinition::new("docs");

/// Broadcast channel capacity for insert events per collection
const BROADCAST_CAPACITY: usize = 1000;

/// redb-backed implementation of MirrorAdapter.
///
/// Holds the replicated catalog documents in an embedded redb file and fans
/// insert events out to open subscriptions over a broadcast channel. The
/// replication consumer writes through [`MirrorAdapterRedb::insert`]; the
/// streaming side only reads (`fetch_all`) and watches (`watch_inserts`).
#[derive(Debug)]
pub struct MirrorAdapterRedb {
	db: Arc<redb::Database>,
	/// Per-collection insert feeds, created lazily
	feeds: RwLock<HashMap<Box<str>, broadcast::Sender<MirrorInsert>>>,
}

impl MirrorAdapterRedb {
	/// Open (or create) the mirror database under `storage_dir`.
	pub async fn new(storage_dir: PathBuf) -> LbResult<Self> {
		tokio::fs::create_dir_all(&storage_dir).await?;
		let db_path = storage_dir.join("mirror.redb");

		let db = if db_path.exists() {
			redb::Database::open(&db_path).map_err(error::from_redb_error)?
		} else {
			redb::Database::create(&db_path).map_err(error::from_redb_error)?
		};

		// Initialize tables
		{
			let tx = db.begin_write().map_err(error::from_redb_error)?;
			let _ = tx.open_table(TABLE_DOCUMENTS).map_err(error::from_redb_error)?;
			tx.commit().map_err(error::from_redb_error)?;
		}

		Ok(Self { db: Arc::new(db), feeds: RwLock::new(HashMap::new()) })
	}

	/// Get or create the insert feed for a collection
	async fn feed(&self, collection: &str) -> broadcast::Sender<MirrorInsert> {
		{
			let feeds = self.feeds.read().await;
			if let Some(tx) = feeds.get(collection) {
				return tx.clone();
			}
		}

		let mut feeds = self.feeds.write().await;
		feeds
			.entry(collection.into())
			.or_insert_with(|| broadcast::channel(BROADCAST_CAPACITY).0)
			.clone()
	}

	/// Ingest one replicated document: store it, then notify open watches.
	///
	/// This is the entry point the replication consumer writes through. It is
	/// deliberately not part of [`MirrorAdapter`] — the streaming side never
	/// writes to the mirror.
	pub async fn insert(&self, collection: &str, doc_id: &str, doc: Value) -> LbResult<()> {
		let db = Arc::clone(&self.db);
		let key = format!("{}/{}", collection, doc_id);
		let json = serde_json::to_string(&doc)?;

		tokio::task::spawn_blocking(move || {
			let tx = db.begin_write().map_err(error::from_redb_error)?;
			{
				let mut table = tx.open_table(TABLE_DOCUMENTS).map_err(error::from_redb_error)?;
				table.insert(key.as_str(), json.as_str()).map_err(error::from_redb_error)?;
			}
			tx.commit().map_err(error::from_redb_error)?;
			Ok::<_, librillo::error::Error>(())
		})
		.await??;

		// The event document carries the native identifier, as the change
		// feed of the mirrored store would
		let mut full_document = doc;
		inject_native_id(&mut full_document, doc_id);

		let feed = self.feed(collection).await;
		let _ = feed.send(MirrorInsert { full_document: Some(full_document) });

		Ok(())
	}
}

#[async_trait]
impl MirrorAdapter for MirrorAdapterRedb {
	async fn fetch_all(&self, collection: &str) -> LbResult<Vec<Value>> {
		let db = Arc::clone(&self.db);
		let prefix = format!("{}/", collection);

		tokio::task::spawn_blocking(move || {
			use redb::{ReadableDatabase, ReadableTable};

			let tx = db.begin_read().map_err(error::from_redb_error)?;
			let table = tx.open_table(TABLE_DOCUMENTS).map_err(error::from_redb_error)?;

			let mut docs = Vec::new();
			let range = table.range(prefix.as_str()..).map_err(error::from_redb_error)?;

			for item in range {
				let (key, value) = item.map_err(error::from_redb_error)?;
				let key_str = key.value();

				if !key_str.starts_with(&prefix) {
					break;
				}

				let mut doc: Value = serde_json::from_str(value.value())?;
				inject_native_id(&mut doc, &key_str[prefix.len()..]);
				docs.push(doc);
			}

			Ok(docs)
		})
		.await?
	}

	async fn watch_inserts(&self, collection: &str) -> LbResult<Box<dyn MirrorSubscription>> {
		let rx = self.feed(collection).await.subscribe();
		debug!("Opened mirror watch on {}", collection);

		Ok(Box::new(RedbSubscription { rx: Some(rx) }))
	}
}

/// Inject the native document identifier into a document.
///
/// Stored documents carry their identity in the table key, so it must be
/// added back at read time (and on outgoing events).
fn inject_native_id(doc: &mut Value, doc_id: &str) {
	if let Value::Object(obj) = doc {
		obj.entry("_id").or_insert_with(|| Value::String(doc_id.to_string()));
	}
}

/// Subscription over one collection's insert feed.
///
/// Closing drops the broadcast receiver; dropping an unclosed handle releases
/// it too, so the feed is detached exactly once however the watch ends.
struct RedbSubscription {
	rx: Option<broadcast::Receiver<MirrorInsert>>,
}

#[async_trait]
impl MirrorSubscription for RedbSubscription {
	async fn try_next(&mut self) -> LbResult<Option<MirrorInsert>> {
		let Some(rx) = self.rx.as_mut() else {
			return Ok(None);
		};

		loop {
			match rx.try_recv() {
				Ok(insert) => return Ok(Some(insert)),
				Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
				Err(broadcast::error::TryRecvError::Lagged(n)) => {
					warn!("Mirror watch lagged, missed {} events", n);
					continue;
				}
				Err(broadcast::error::TryRecvError::Closed) => return Ok(None),
			}
		}
	}

	async fn close(&mut self) {
		if self.rx.take().is_some() {
			debug!("Mirror subscription closed");
		}
	}
}

// vim: ts=4
