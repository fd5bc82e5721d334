//! Mirror document normalization
//!
//! The replication pipeline feeds the mirror store with two encodings of the
//! same logical record: an enveloped form that keeps the upstream change
//! envelope (record fields nested under `after`) and a direct form where the
//! envelope has already been unwrapped and the record's identity lives in the
//! store's native `_id` field. Both encodings may co-occur in one collection;
//! each document is mapped independently to the canonical wire shape here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key whose presence selects the enveloped encoding
const ENVELOPE_KEY: &str = "after";
/// The mirror store's native document identifier field
const NATIVE_ID_KEY: &str = "_id";

/// Canonical, wire-facing catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
	pub id: String,
	pub title: String,
	pub pages: i64,
}

/// Map one raw mirror document to the canonical record shape.
///
/// Total: absent or null fields degrade to defaults (`""`, `0`) instead of
/// failing. The identity is always stringified, whatever its source type.
pub fn normalize(doc: &Value) -> CatalogRecord {
	if let Some(after) = doc.get(ENVELOPE_KEY) {
		CatalogRecord {
			id: stringify(after.get("id")),
			title: string_or_default(after.get("title")),
			pages: int_or_default(after.get("pages")),
		}
	} else {
		// Direct encoding: the native identifier wins over an explicit `id`
		let id = doc.get(NATIVE_ID_KEY).or_else(|| doc.get("id"));
		CatalogRecord {
			id: stringify(id),
			title: string_or_default(doc.get("title")),
			pages: int_or_default(doc.get("pages")),
		}
	}
}

fn stringify(value: Option<&Value>) -> String {
	match value {
		Some(Value::String(s)) => s.clone(),
		Some(Value::Null) | None => String::new(),
		Some(v) => v.to_string(),
	}
}

fn string_or_default(value: Option<&Value>) -> String {
	match value {
		Some(Value::String(s)) => s.clone(),
		_ => String::new(),
	}
}

fn int_or_default(value: Option<&Value>) -> i64 {
	match value {
		Some(Value::Number(n)) => {
			n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0)
		}
		Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
		_ => 0,
	}
}

// vim: ts=4
