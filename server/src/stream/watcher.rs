//! Mirror insert watcher
//!
//! Background task supervising one connection's live watch over the mirror
//! store. Polls the insert feed without blocking the connection's message
//! loop, normalizes each replicated document, and pushes it to the session
//! through a channel. Cooperates with cancellation through the shared
//! `running` flag (checked between polls) and task abort (interrupts an
//! in-progress wait); the subscription handle is released on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::prelude::*;
use crate::stream::normalize::normalize;
use crate::stream::protocol::StreamMessage;

/// Bounded wait between empty polls
pub const IDLE_POLL_WAIT: Duration = Duration::from_millis(100);

/// Watch the mirror store, pushing one `new_book` event per insertion.
///
/// Runs until cancelled, the feed fails, or the session drops the receiving
/// end of `push_tx`. At most one `error` event is emitted for a failure;
/// after emitting it the watcher terminates and never resumes.
pub async fn watch_inserts(
	app: App,
	running: Arc<AtomicBool>,
	push_tx: mpsc::UnboundedSender<StreamMessage>,
) {
	let collection = app.opts.mirror_collection.clone();

	let mut sub = match app.mirror_adapter.watch_inserts(&collection).await {
		Ok(sub) => sub,
		Err(err) => {
			warn!("Failed to open mirror watch on {}: {}", collection, err);
			if running.load(Ordering::Relaxed) {
				let _ = push_tx.send(StreamMessage::error(format!("Change stream error: {}", err)));
			}
			return;
		}
	};

	while running.load(Ordering::Relaxed) {
		match sub.try_next().await {
			Ok(Some(insert)) => {
				// Events without an attached document carry nothing to push
				let Some(doc) = insert.full_document else { continue };

				let record = normalize(&doc);
				debug!("Mirror insert: id={}", record.id);
				if push_tx.send(StreamMessage::new_book(record)).is_err() {
					// Session is gone
					break;
				}
			}
			Ok(None) => {
				tokio::time::sleep(IDLE_POLL_WAIT).await;
			}
			Err(err) => {
				warn!("Mirror watch poll failed: {}", err);
				if running.load(Ordering::Relaxed) {
					let _ = push_tx
						.send(StreamMessage::error(format!("Error watching changes: {}", err)));
				}
				break;
			}
		}
	}

	sub.close().await;
}

// vim: ts=4
