//! Book stream protocol frame tests

use librillo::stream::normalize::CatalogRecord;
use librillo::stream::protocol::StreamMessage;

fn record(id: &str, title: &str, pages: i64) -> CatalogRecord {
	CatalogRecord { id: id.to_string(), title: title.to_string(), pages }
}

#[test]
fn test_connected_frame_shape() {
	let msg = StreamMessage::connected();
	let v = serde_json::to_value(&msg).expect("serialize");

	assert_eq!(v["type"], "connected");
	assert!(v["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[test]
fn test_books_frame_carries_data_and_count() {
	let msg = StreamMessage::books(vec![record("1", "A", 10), record("2", "B", 20)]);
	let v = serde_json::to_value(&msg).expect("serialize");

	assert_eq!(v["type"], "books");
	assert_eq!(v["count"], 2);
	assert_eq!(v["data"][0]["id"], "1");
	assert_eq!(v["data"][0]["title"], "A");
	assert_eq!(v["data"][0]["pages"], 10);
	assert_eq!(v["data"][1]["id"], "2");
}

#[test]
fn test_empty_books_frame_has_zero_count() {
	let msg = StreamMessage::books(vec![]);
	let v = serde_json::to_value(&msg).expect("serialize");

	assert_eq!(v["count"], 0);
	assert!(v["data"].as_array().is_some_and(|a| a.is_empty()));
}

#[test]
fn test_new_book_frame_shape() {
	let msg = StreamMessage::new_book(record("7", "Dune", 412));
	let v = serde_json::to_value(&msg).expect("serialize");

	assert_eq!(v["type"], "new_book");
	assert_eq!(v["data"]["id"], "7");
	assert_eq!(v["data"]["pages"], 412);
}

#[test]
fn test_error_frame_shape() {
	let msg = StreamMessage::error("Error fetching books: database error");
	let v = serde_json::to_value(&msg).expect("serialize");

	assert_eq!(v["type"], "error");
	assert_eq!(v["message"], "Error fetching books: database error");
}

#[test]
fn test_frame_is_single_json_object() {
	// Each frame serializes to one self-contained JSON text, so writes are
	// atomic at the message level
	let msg = StreamMessage::new_book(record("1", "A", 1));
	let text = serde_json::to_string(&msg).expect("serialize");

	let parsed: serde_json::Value = serde_json::from_str(&text).expect("parse back");
	assert_eq!(parsed["type"], "new_book");
}

// vim: ts=4
