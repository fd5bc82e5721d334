//! WebSocket book stream handler
//!
//! The book stream (`/ws/book`) pushes the mirrored catalog to one client:
//! a `connected` ack, a full `books` snapshot, then one `new_book` event per
//! insertion observed on the mirror store. The literal text command
//! `refresh` (case-insensitive) re-sends a full snapshot; any other inbound
//! message has no effect.

use axum::extract::{
	ws::{Message, WebSocket, WebSocketUpgrade},
	State,
};
use axum::response::Response;
use futures::sink::SinkExt;
use futures::stream::{SplitSink, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use crate::prelude::*;
use crate::stream::normalize::{normalize, CatalogRecord};
use crate::stream::protocol::StreamMessage;
use crate::stream::watcher;

/// Outbound half of the socket; the mutex serializes writes so a snapshot
/// response and a watcher push can never interleave on the wire.
type WsSink = Arc<Mutex<SplitSink<WebSocket, Message>>>;

/// GET /ws/book - upgrade to the book stream protocol
pub async fn get_ws_book(ws: WebSocketUpgrade, State(app): State<App>) -> Response {
	ws.on_upgrade(move |ws| handle_book_stream(ws, app))
}

/// Fetch and normalize the full mirrored catalog.
pub async fn fetch_books(app: &App) -> LbResult<Vec<CatalogRecord>> {
	let docs = app
		.mirror_adapter
		.fetch_all(&app.opts.mirror_collection)
		.await
		.map_err(|err| Error::FetchFailed(err.to_string()))?;

	Ok(docs.iter().map(normalize).collect())
}

/// Send a frame, swallowing failures on an already closed socket.
async fn safe_send(ws_tx: &WsSink, msg: &StreamMessage) {
	let ws_msg = match msg.to_ws_message() {
		Ok(msg) => msg,
		Err(err) => {
			warn!("Failed to serialize stream message: {}", err);
			return;
		}
	};

	let mut tx = ws_tx.lock().await;
	if tx.send(ws_msg).await.is_err() {
		debug!("Client disconnected while sending");
	}
}

/// Run the snapshot and report the result to the client.
///
/// A failed fetch is recoverable: the client gets an `error` frame and the
/// session keeps serving.
async fn send_snapshot(app: &App, ws_tx: &WsSink) {
	match fetch_books(app).await {
		Ok(books) => {
			debug!("Sending snapshot: {} books", books.len());
			safe_send(ws_tx, &StreamMessage::books(books)).await;
		}
		Err(err) => {
			warn!("Snapshot fetch failed: {}", err);
			safe_send(ws_tx, &StreamMessage::error(format!("Error fetching books: {}", err))).await;
		}
	}
}

/// Handle one book stream connection end to end.
pub async fn handle_book_stream(ws: WebSocket, app: App) {
	info!("Book stream connected");

	let (ws_tx, mut ws_rx) = ws.split();
	let ws_tx: WsSink = Arc::new(Mutex::new(ws_tx));

	// Handshake: if the ack cannot be sent the connection is already unusable
	{
		let ack = match StreamMessage::connected().to_ws_message() {
			Ok(msg) => msg,
			Err(_) => return,
		};
		let mut tx = ws_tx.lock().await;
		if tx.send(ack).await.is_err() {
			return;
		}
	}

	let running = Arc::new(AtomicBool::new(true));

	// Initial snapshot precedes any watcher-sourced event
	send_snapshot(&app, &ws_tx).await;

	// Watcher pushes events into a channel; the forward task delivers them
	let (push_tx, mut push_rx) = mpsc::unbounded_channel::<StreamMessage>();

	let ws_tx_forward = ws_tx.clone();
	let forward_task = tokio::spawn(async move {
		while let Some(msg) = push_rx.recv().await {
			let ws_msg = match msg.to_ws_message() {
				Ok(msg) => msg,
				Err(err) => {
					warn!("Failed to serialize stream message: {}", err);
					continue;
				}
			};

			let mut tx = ws_tx_forward.lock().await;
			if tx.send(ws_msg).await.is_err() {
				debug!("Client disconnected while forwarding mirror event");
				return;
			}
		}
	});

	let watch_task = tokio::spawn(watcher::watch_inserts(app.clone(), running.clone(), push_tx));

	// Receive loop: handle client commands until disconnect
	while let Some(msg) = ws_rx.next().await {
		match msg {
			Ok(Message::Text(text)) => {
				if text.trim().eq_ignore_ascii_case("refresh") {
					send_snapshot(&app, &ws_tx).await;
				}
				// Other commands have no defined effect
			}
			Ok(Message::Close(_)) => break,
			Ok(_) => {} // ping/pong/binary
			Err(err) => {
				debug!("Book stream connection error: {}", err);
				break;
			}
		}
	}

	// Teardown: stop the watcher before releasing the connection
	running.store(false, Ordering::Relaxed);
	watch_task.abort();
	let _ = watch_task.await;
	forward_task.abort();
	let _ = forward_task.await;

	let mut tx = ws_tx.lock().await;
	let _ = tx.close().await;

	info!("Book stream closed");
}

// vim: ts=4
