//! Book stream wire protocol
//!
//! Every outbound frame is a JSON object with a `type` discriminator:
//! ```json
//! { "type": "new_book", "data": { "id": "7", "title": "Dune", "pages": 412 } }
//! ```
//! The only inbound command is the plain text `refresh`.

use axum::extract::ws::Message;
use serde::{Deserialize, Serialize};

use crate::stream::normalize::CatalogRecord;

/// An outbound message on the book stream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
	/// Handshake acknowledgment, sent once right after accept
	Connected { message: Box<str> },

	/// Full snapshot of the mirrored catalog
	Books { data: Vec<CatalogRecord>, count: usize },

	/// A single newly replicated record
	NewBook { data: CatalogRecord },

	/// A fetch or watch failure, reported to the client
	Error { message: Box<str> },
}

impl StreamMessage {
	/// Create the handshake acknowledgment
	pub fn connected() -> Self {
		Self::Connected { message: "WebSocket connection established".into() }
	}

	/// Create a snapshot message carrying the record count
	pub fn books(data: Vec<CatalogRecord>) -> Self {
		let count = data.len();
		Self::Books { data, count }
	}

	/// Create a new-record push message
	pub fn new_book(data: CatalogRecord) -> Self {
		Self::NewBook { data }
	}

	/// Create an error message
	pub fn error(message: impl Into<Box<str>>) -> Self {
		Self::Error { message: message.into() }
	}

	/// Serialize to JSON and wrap in a WebSocket message
	pub fn to_ws_message(&self) -> Result<Message, serde_json::Error> {
		let json = serde_json::to_string(self)?;
		Ok(Message::Text(json.into()))
	}
}

// vim: ts=4
