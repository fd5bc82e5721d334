//! Mirror document normalization tests
//!
//! Covers both upstream encodings (enveloped and direct), identity
//! preference, and the total-function defaulting rules.

use librillo::stream::normalize::{normalize, CatalogRecord};
use serde_json::json;

#[test]
fn test_enveloped_document_extracts_nested_fields() {
	let doc = json!({
		"after": { "id": 7, "title": "Dune", "pages": 412 },
		"op": "c",
		"source": { "table": "books" }
	});

	let record = normalize(&doc);

	assert_eq!(record, CatalogRecord { id: "7".to_string(), title: "Dune".to_string(), pages: 412 });
}

#[test]
fn test_enveloped_document_with_string_id() {
	let doc = json!({ "after": { "id": "42", "title": "Emma", "pages": 474 } });

	let record = normalize(&doc);

	assert_eq!(record.id, "42");
	assert_eq!(record.title, "Emma");
	assert_eq!(record.pages, 474);
}

#[test]
fn test_enveloped_document_defaults_missing_fields() {
	let doc = json!({ "after": {} });

	let record = normalize(&doc);

	assert_eq!(record, CatalogRecord { id: String::new(), title: String::new(), pages: 0 });
}

#[test]
fn test_enveloped_document_null_pages_defaults_to_zero() {
	let doc = json!({ "after": { "id": 1, "title": "Ulysses", "pages": null } });

	assert_eq!(normalize(&doc).pages, 0);
}

#[test]
fn test_direct_document_uses_native_identifier() {
	let doc = json!({ "_id": 3, "title": "Dracula", "pages": 418 });

	let record = normalize(&doc);

	assert_eq!(record, CatalogRecord { id: "3".to_string(), title: "Dracula".to_string(), pages: 418 });
}

#[test]
fn test_direct_document_prefers_native_identifier_over_id_field() {
	let doc = json!({ "_id": "3", "id": "999", "title": "Dracula", "pages": 418 });

	assert_eq!(normalize(&doc).id, "3");
}

#[test]
fn test_direct_document_falls_back_to_id_field() {
	let doc = json!({ "id": 5, "title": "Beloved", "pages": 324 });

	assert_eq!(normalize(&doc).id, "5");
}

#[test]
fn test_empty_document_yields_all_defaults() {
	let record = normalize(&json!({}));

	assert_eq!(record, CatalogRecord { id: String::new(), title: String::new(), pages: 0 });
}

#[test]
fn test_variant_selection_is_per_document() {
	let enveloped = json!({ "after": { "id": 1, "title": "A", "pages": 10 } });
	let direct = json!({ "_id": 2, "title": "B", "pages": 20 });

	// Both variants normalize to the same canonical shape independently
	assert_eq!(normalize(&enveloped).id, "1");
	assert_eq!(normalize(&direct).id, "2");
}

#[test]
fn test_non_string_title_defaults_to_empty() {
	let doc = json!({ "_id": 1, "title": 12, "pages": 100 });

	assert_eq!(normalize(&doc).title, "");
}

#[test]
fn test_numeric_string_pages_are_coerced() {
	let doc = json!({ "_id": 1, "title": "Ivanhoe", "pages": "527" });

	assert_eq!(normalize(&doc).pages, 527);
}

#[test]
fn test_unparseable_pages_default_to_zero() {
	let doc = json!({ "_id": 1, "title": "Ivanhoe", "pages": "many" });

	assert_eq!(normalize(&doc).pages, 0);
}

// vim: ts=4
