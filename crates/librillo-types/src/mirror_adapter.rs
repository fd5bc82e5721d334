//! Mirror Store Adapter
//!
//! Trait and types for the secondary document store holding a replicated,
//! eventually-consistent copy of the catalog. An external change-data-capture
//! pipeline keeps it populated; Librillo only consumes its output: a bulk
//! snapshot read plus a live, insert-filtered watch.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::prelude::*;

/// One insert event observed on the mirror store's change feed.
#[derive(Debug, Clone)]
pub struct MirrorInsert {
	/// Full document attached to the event, when the feed provides one.
	pub full_document: Option<Value>,
}

/// A live watch over a collection's insert events.
///
/// Owned by exactly one watcher for the duration of one connection. The
/// handle must be closed from whichever code path ends the watch; `close` is
/// idempotent and never fails, and dropping an unclosed handle releases the
/// upstream feed as well (covers task-abort paths).
#[async_trait]
pub trait MirrorSubscription: Send {
	/// Poll for the next insert event without blocking.
	///
	/// Returns `Ok(None)` when no event is currently available; callers are
	/// expected to back off briefly before polling again.
	async fn try_next(&mut self) -> LbResult<Option<MirrorInsert>>;

	/// Close the subscription, releasing upstream resources.
	async fn close(&mut self);
}

/// Mirror Store Adapter trait.
#[async_trait]
pub trait MirrorAdapter: Debug + Send + Sync {
	/// Bulk read of all documents currently in `collection`.
	///
	/// Raw documents are returned as stored (envelope and all); normalization
	/// is the consumer's concern. No ordering is guaranteed.
	async fn fetch_all(&self, collection: &str) -> LbResult<Vec<Value>>;

	/// Open an insert-filtered watch over `collection`.
	async fn watch_inserts(&self, collection: &str) -> LbResult<Box<dyn MirrorSubscription>>;
}

// vim: ts=4
